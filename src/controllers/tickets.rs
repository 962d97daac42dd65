use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use super::render;
use crate::error::{AppError, BackTo, PageError};
use crate::models::Ticket;
use crate::{validation, views, AppState};

const LISTING: &str = "/admin/tickets";
const ID_MESSAGE: &str = "Ticket ID must be numeric.";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin/tickets", get(list_tickets))
        .route("/admin/delete_ticket/{id}", post(delete_ticket))
        .route(
            "/admin/edit_ticket/{id}",
            get(edit_ticket_form).post(update_ticket_price),
        )
}

// GET /admin/tickets
async fn list_tickets(State(state): State<Arc<AppState>>) -> Result<Response, PageError> {
    let rows = Ticket::list(&state.db.pool).await.back_to("/admin")?;
    Ok(render(views::tickets(&rows)))
}

// POST /admin/delete_ticket/{id}
async fn delete_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, PageError> {
    let ticket_id = validation::parse_id(&id, ID_MESSAGE).back_to(LISTING)?;
    Ticket::delete_with_purchases(&state.db.pool, ticket_id)
        .await
        .back_to(LISTING)?;

    Ok(Redirect::to(LISTING).into_response())
}

// GET /admin/edit_ticket/{id}
async fn edit_ticket_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, PageError> {
    let ticket_id = validation::parse_id(&id, ID_MESSAGE).back_to(LISTING)?;
    let row = Ticket::find_price(&state.db.pool, ticket_id)
        .await
        .back_to(LISTING)?
        .ok_or(AppError::NotFound("Ticket"))
        .back_to(LISTING)?;

    Ok(render(views::edit_ticket(&row)))
}

#[derive(Debug, Deserialize)]
struct PriceForm {
    #[serde(default)]
    price: String,
}

// POST /admin/edit_ticket/{id}
async fn update_ticket_price(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<PriceForm>,
) -> Result<Response, PageError> {
    let ticket_id = validation::parse_id(&id, ID_MESSAGE).back_to(LISTING)?;
    let price = validation::parse_price(&form.price).back_to(LISTING)?;

    Ticket::update_price(&state.db.pool, ticket_id, price)
        .await
        .back_to(LISTING)?;

    Ok(Redirect::to(LISTING).into_response())
}
