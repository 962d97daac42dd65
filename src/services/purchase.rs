//! Ticket purchase: pick a showtime, list its free seats, sell one.
//!
//! The seat row is locked for the length of the purchase transaction, so two
//! buyers racing for the same seat run one after the other and the second
//! gets [`AppError::SeatUnavailable`]. The `(ShowtimeID, SeatID)` unique
//! constraint on `Ticket` backs this up for writers that bypass the lock.

use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use tracing::{error, info, warn};

use crate::error::AppError;
use crate::models::{NewTicket, Seat, Showtime, Ticket};
use crate::validation;

const SELECTION_MESSAGE: &str = "Customer, showtime, and seat must be selected.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRequest {
    pub customer_id: i64,
    pub showtime_id: i64,
    pub seat_id: i64,
    pub price: Decimal,
}

impl PurchaseRequest {
    pub fn parse(customer_id: &str, showtime_id: &str, seat_id: &str, price: &str) -> Result<Self, AppError> {
        let customer_id = validation::parse_id(customer_id, SELECTION_MESSAGE)?;
        let showtime_id = validation::parse_id(showtime_id, SELECTION_MESSAGE)?;
        let seat_id = validation::parse_id(seat_id, SELECTION_MESSAGE)?;
        let price = validation::parse_price(price)?;

        Ok(Self { customer_id, showtime_id, seat_id, price })
    }
}

/// Seats of the showtime's hall that have no ticket for that showtime.
pub async fn available_seats(pool: &PgPool, showtime_id: i64) -> Result<Vec<Seat>, AppError> {
    let hall_id = Showtime::hall_of(pool, showtime_id)
        .await?
        .ok_or(AppError::NotFound("Showtime"))?;

    Ok(Seat::available(pool, hall_id, showtime_id).await?)
}

/// Creates the ticket and its purchase record atomically, returning the new ticket id.
pub async fn purchase_ticket(pool: &PgPool, request: &PurchaseRequest) -> Result<i64, AppError> {
    let mut tx = pool.begin().await?;

    match sell_seat(&mut *tx, request).await {
        Ok(ticket_id) => {
            tx.commit().await?;
            info!(
                ticket_id,
                customer_id = request.customer_id,
                showtime_id = request.showtime_id,
                seat_id = request.seat_id,
                "ticket purchased"
            );
            Ok(ticket_id)
        }
        Err(e) => {
            if let AppError::Database(ref db) = e {
                error!("purchase failed for showtime {} seat {}: {:?}", request.showtime_id, request.seat_id, db);
            }
            let _ = tx.rollback().await;
            Err(e)
        }
    }
}

async fn sell_seat(conn: &mut PgConnection, request: &PurchaseRequest) -> Result<i64, AppError> {
    let hall_id = Showtime::hall_of(&mut *conn, request.showtime_id)
        .await?
        .ok_or(AppError::NotFound("Showtime"))?;

    // Same-seat buyers serialize on this lock, so the booked check below
    // sees whichever ticket committed first.
    if !Seat::lock_in_hall(&mut *conn, request.seat_id, hall_id).await? {
        return Err(AppError::NotFound("Seat"));
    }

    if Ticket::is_booked(&mut *conn, request.showtime_id, request.seat_id).await? {
        warn!(showtime_id = request.showtime_id, seat_id = request.seat_id, "seat already booked");
        return Err(AppError::SeatUnavailable);
    }

    let ticket_id = Ticket::next_id(&mut *conn).await?;
    let ticket = NewTicket {
        ticket_id,
        price: request.price,
        showtime_id: request.showtime_id,
        seat_id: request.seat_id,
        hall_id,
    };

    Ticket::insert(&mut *conn, &ticket)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.constraint() == Some("ticket_showtime_seat_uq") => {
                AppError::SeatUnavailable
            }
            other => AppError::Database(other),
        })?;

    Ticket::record_purchase(&mut *conn, ticket_id, request.customer_id).await?;

    Ok(ticket_id)
}
