use serde::Serialize;
use sqlx::{FromRow, PgConnection, PgPool};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Seat {
    pub seat_id: i64,
    pub seat_no: String,
}

impl Seat {
    /// Seats of `hall_id` without a ticket for `showtime_id`, by seat number.
    pub async fn available(pool: &PgPool, hall_id: i64, showtime_id: i64) -> Result<Vec<Seat>, sqlx::Error> {
        sqlx::query_as::<_, Seat>(
            r#"
            SELECT se.SeatID AS seat_id, se.SeatNo AS seat_no
            FROM Seat se
            WHERE se.HallID = $1
              AND NOT EXISTS (
                  SELECT 1 FROM Ticket t
                  WHERE t.ShowtimeID = $2 AND t.SeatID = se.SeatID
              )
            ORDER BY se.SeatNo
            "#,
        )
        .bind(hall_id)
        .bind(showtime_id)
        .fetch_all(pool)
        .await
    }

    /// Row-locks the seat if it belongs to `hall_id`; `false` otherwise.
    ///
    /// Held until the surrounding transaction ends, so buyers of the same
    /// seat queue here and each sees the previous buyer's committed ticket.
    pub async fn lock_in_hall(conn: &mut PgConnection, seat_id: i64, hall_id: i64) -> Result<bool, sqlx::Error> {
        let locked = sqlx::query_scalar::<_, i64>(
            "SELECT SeatID FROM Seat WHERE SeatID = $1 AND HallID = $2 FOR UPDATE",
        )
        .bind(seat_id)
        .bind(hall_id)
        .fetch_optional(conn)
        .await?;

        Ok(locked.is_some())
    }
}
