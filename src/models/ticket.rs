use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgConnection, PgPool};

use crate::error::AppError;

// Ticket joined with its showtime, film, hall and seat
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TicketRow {
    pub ticket_id: i64,
    pub price: Decimal,
    pub showtime_id: i64,
    pub seat_id: i64,
    pub start_time: String,
    pub show_date: NaiveDate,
    pub film_name: String,
    pub hall_name: String,
    pub seat_no: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TicketPrice {
    pub ticket_id: i64,
    pub price: Decimal,
}

#[derive(Debug, Clone)]
pub struct NewTicket {
    pub ticket_id: i64,
    pub price: Decimal,
    pub showtime_id: i64,
    pub seat_id: i64,
    pub hall_id: i64,
}

pub struct Ticket;

impl Ticket {
    pub async fn list(pool: &PgPool) -> Result<Vec<TicketRow>, sqlx::Error> {
        sqlx::query_as::<_, TicketRow>(
            r#"
            SELECT
                t.TicketID   AS ticket_id,
                t.Price      AS price,
                t.ShowtimeID AS showtime_id,
                t.SeatID     AS seat_id,
                s.StartTime  AS start_time,
                s.ShowDate   AS show_date,
                f.Name       AS film_name,
                h.Name       AS hall_name,
                se.SeatNo    AS seat_no
            FROM Ticket t
            JOIN Showtime s ON s.ShowtimeID = t.ShowtimeID
            JOIN Film f ON f.FilmID = s.FilmID
            JOIN Hall h ON h.HallID = t.HallID
            JOIN Seat se ON se.SeatID = t.SeatID
            ORDER BY t.TicketID
            "#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_price(pool: &PgPool, ticket_id: i64) -> Result<Option<TicketPrice>, sqlx::Error> {
        sqlx::query_as::<_, TicketPrice>(
            "SELECT TicketID AS ticket_id, Price AS price FROM Ticket WHERE TicketID = $1",
        )
        .bind(ticket_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn update_price(pool: &PgPool, ticket_id: i64, price: Decimal) -> Result<(), AppError> {
        let updated = sqlx::query("UPDATE Ticket SET Price = $1 WHERE TicketID = $2")
            .bind(price)
            .bind(ticket_id)
            .execute(pool)
            .await?
            .rows_affected();

        if updated == 0 {
            return Err(AppError::NotFound("Ticket"));
        }
        tracing::info!(ticket_id, %price, "ticket price updated");
        Ok(())
    }

    /// Removes the ticket and the purchases pointing at it, all or nothing.
    pub async fn delete_with_purchases(pool: &PgPool, ticket_id: i64) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;

        let outcome = Self::delete_in(&mut *tx, ticket_id).await;
        match outcome {
            Ok((purchases, tickets)) if tickets > 0 => {
                tx.commit().await?;
                tracing::info!(ticket_id, purchases, "ticket deleted");
                Ok(())
            }
            Ok(_) => {
                let _ = tx.rollback().await;
                Err(AppError::NotFound("Ticket"))
            }
            Err(e) => {
                tracing::error!("failed to delete ticket {}: {:?}", ticket_id, e);
                let _ = tx.rollback().await;
                Err(e.into())
            }
        }
    }

    // (purchases removed, tickets removed)
    async fn delete_in(conn: &mut PgConnection, ticket_id: i64) -> Result<(u64, u64), sqlx::Error> {
        let purchases = sqlx::query("DELETE FROM Purchases WHERE TicketID = $1")
            .bind(ticket_id)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        let tickets = sqlx::query("DELETE FROM Ticket WHERE TicketID = $1")
            .bind(ticket_id)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        Ok((purchases, tickets))
    }

    /// One past the current maximum identifier, 1 for an empty table.
    pub async fn next_id(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COALESCE(MAX(TicketID), 0) + 1 FROM Ticket")
            .fetch_one(conn)
            .await
    }

    pub async fn is_booked(conn: &mut PgConnection, showtime_id: i64, seat_id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM Ticket WHERE ShowtimeID = $1 AND SeatID = $2)",
        )
        .bind(showtime_id)
        .bind(seat_id)
        .fetch_one(conn)
        .await
    }

    pub async fn insert(conn: &mut PgConnection, ticket: &NewTicket) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO Ticket (TicketID, Price, ShowtimeID, SeatID, HallID)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(ticket.ticket_id)
        .bind(ticket.price)
        .bind(ticket.showtime_id)
        .bind(ticket.seat_id)
        .bind(ticket.hall_id)
        .execute(conn)
        .await?;
        Ok(())
    }

    pub async fn record_purchase(conn: &mut PgConnection, ticket_id: i64, customer_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO Purchases (TicketID, ConsumableID, CustomerID)
             VALUES ($1, NULL, $2)",
        )
        .bind(ticket_id)
        .bind(customer_id)
        .execute(conn)
        .await?;
        Ok(())
    }
}
