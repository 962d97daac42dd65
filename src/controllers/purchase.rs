use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use super::render;
use crate::error::{BackTo, PageError};
use crate::models::{Customer, Showtime};
use crate::services::purchase::{self, PurchaseRequest};
use crate::views::{self, BuyTicketPage};
use crate::{validation, AppState};

const PAGE: &str = "/buy_ticket";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/buy_ticket", get(buy_ticket_page).post(buy_ticket))
}

#[derive(Debug, Deserialize)]
struct SeatQuery {
    showtime_id: Option<String>,
}

// GET /buy_ticket?showtime_id=
async fn buy_ticket_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeatQuery>,
) -> Result<Response, PageError> {
    let pool = &state.db.pool;

    let customers = Customer::list(pool).await.back_to(PAGE)?;
    let showtimes = Showtime::list_options(pool).await.back_to(PAGE)?;

    // Anything but a numeric selector just shows the showtime picker.
    let selected_showtime = query
        .showtime_id
        .as_deref()
        .map(str::trim)
        .filter(|s| validation::is_digits(s))
        .and_then(|s| s.parse::<i64>().ok());

    let available_seats = match selected_showtime {
        Some(showtime_id) => purchase::available_seats(pool, showtime_id).await.back_to(PAGE)?,
        None => Vec::new(),
    };

    Ok(render(views::buy_ticket(&BuyTicketPage {
        customers: &customers,
        showtimes: &showtimes,
        selected_showtime,
        available_seats: &available_seats,
    })))
}

#[derive(Debug, Deserialize)]
struct PurchaseForm {
    #[serde(default)]
    customer_id: String,
    #[serde(default)]
    showtime_id: String,
    #[serde(default)]
    seat_id: String,
    #[serde(default)]
    price: String,
}

// POST /buy_ticket
async fn buy_ticket(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PurchaseForm>,
) -> Result<Response, PageError> {
    let request = PurchaseRequest::parse(&form.customer_id, &form.showtime_id, &form.seat_id, &form.price)
        .back_to(PAGE)?;

    purchase::purchase_ticket(&state.db.pool, &request)
        .await
        .back_to(PAGE)?;

    Ok(Redirect::to("/admin/tickets").into_response())
}
