use chrono::NaiveDate;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::error::AppError;

// Row of the public film listing
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FilmShowing {
    pub showtime_id: i64,
    pub show_date: NaiveDate,
    pub start_time: String,
    pub hall_name: String,
    pub film_name: String,
    pub film_type: Option<String>,
    pub duration: Option<i32>,
    pub explanation: Option<String>,
}

// Row of the staff listing
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowtimeRow {
    pub showtime_id: i64,
    pub show_date: NaiveDate,
    pub start_time: String,
    pub film_name: String,
    pub hall_name: String,
}

// Entry of the showtime select on the purchase page
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowtimeOption {
    pub showtime_id: i64,
    pub show_date: NaiveDate,
    pub start_time: String,
    pub film_name: String,
    pub hall_name: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowtimeSchedule {
    pub showtime_id: i64,
    pub show_date: NaiveDate,
    pub start_time: String,
}

pub struct Showtime;

impl Showtime {
    /// Every showing with its film details, by date then start time.
    pub async fn list_for_films(pool: &PgPool) -> Result<Vec<FilmShowing>, sqlx::Error> {
        sqlx::query_as::<_, FilmShowing>(
            r#"
            SELECT
                s.ShowtimeID  AS showtime_id,
                s.ShowDate    AS show_date,
                s.StartTime   AS start_time,
                h.Name        AS hall_name,
                f.Name        AS film_name,
                f.Type        AS film_type,
                f.Duration    AS duration,
                f.Explanation AS explanation
            FROM Showtime s
            JOIN Film f ON f.FilmID = s.FilmID
            JOIN Hall h ON h.HallID = s.HallID
            ORDER BY s.ShowDate, s.StartTime
            "#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ShowtimeRow>, sqlx::Error> {
        sqlx::query_as::<_, ShowtimeRow>(
            r#"
            SELECT
                s.ShowtimeID AS showtime_id,
                s.ShowDate   AS show_date,
                s.StartTime  AS start_time,
                f.Name       AS film_name,
                h.Name       AS hall_name
            FROM Showtime s
            JOIN Film f ON f.FilmID = s.FilmID
            JOIN Hall h ON h.HallID = s.HallID
            ORDER BY s.ShowDate, s.StartTime
            "#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn list_options(pool: &PgPool) -> Result<Vec<ShowtimeOption>, sqlx::Error> {
        sqlx::query_as::<_, ShowtimeOption>(
            r#"
            SELECT
                s.ShowtimeID AS showtime_id,
                s.ShowDate   AS show_date,
                s.StartTime  AS start_time,
                f.Name       AS film_name,
                h.Name       AS hall_name
            FROM Showtime s
            JOIN Film f ON f.FilmID = s.FilmID
            JOIN Hall h ON h.HallID = s.HallID
            ORDER BY s.ShowDate, s.StartTime
            "#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_schedule(pool: &PgPool, showtime_id: i64) -> Result<Option<ShowtimeSchedule>, sqlx::Error> {
        sqlx::query_as::<_, ShowtimeSchedule>(
            "SELECT ShowtimeID AS showtime_id, ShowDate AS show_date, StartTime AS start_time
             FROM Showtime
             WHERE ShowtimeID = $1",
        )
        .bind(showtime_id)
        .fetch_optional(pool)
        .await
    }

    /// Hall the showtime is screened in, `None` if the showtime does not exist.
    pub async fn hall_of<'e, E>(executor: E, showtime_id: i64) -> Result<Option<i64>, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, i64>("SELECT HallID FROM Showtime WHERE ShowtimeID = $1")
            .bind(showtime_id)
            .fetch_optional(executor)
            .await
    }

    pub async fn update_schedule(
        pool: &PgPool,
        showtime_id: i64,
        show_date: NaiveDate,
        start_time: &str,
    ) -> Result<(), AppError> {
        let updated = sqlx::query(
            "UPDATE Showtime
             SET ShowDate = $1,
                 StartTime = $2
             WHERE ShowtimeID = $3",
        )
        .bind(show_date)
        .bind(start_time)
        .bind(showtime_id)
        .execute(pool)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(AppError::NotFound("Showtime"));
        }
        tracing::info!(showtime_id, %show_date, start_time, "showtime rescheduled");
        Ok(())
    }
}
