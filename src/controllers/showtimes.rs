use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use super::render;
use crate::error::{AppError, BackTo, PageError};
use crate::models::Showtime;
use crate::{validation, views, AppState};

const LISTING: &str = "/admin/showtimes";
const ID_MESSAGE: &str = "Showtime ID must be numeric.";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin/showtimes", get(list_showtimes))
        .route(
            "/admin/edit_showtime/{id}",
            get(edit_showtime_form).post(update_showtime),
        )
}

// GET /admin/showtimes
async fn list_showtimes(State(state): State<Arc<AppState>>) -> Result<Response, PageError> {
    let rows = Showtime::list(&state.db.pool).await.back_to("/admin")?;
    Ok(render(views::showtimes(&rows)))
}

// GET /admin/edit_showtime/{id}
async fn edit_showtime_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, PageError> {
    let showtime_id = validation::parse_id(&id, ID_MESSAGE).back_to(LISTING)?;
    let row = Showtime::find_schedule(&state.db.pool, showtime_id)
        .await
        .back_to(LISTING)?
        .ok_or(AppError::NotFound("Showtime"))
        .back_to(LISTING)?;

    Ok(render(views::edit_showtime(&row)))
}

#[derive(Debug, Deserialize)]
struct ShowtimeForm {
    #[serde(default)]
    showdate: String,
    #[serde(default)]
    starttime: String,
}

// POST /admin/edit_showtime/{id}
async fn update_showtime(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<ShowtimeForm>,
) -> Result<Response, PageError> {
    let showtime_id = validation::parse_id(&id, ID_MESSAGE).back_to(LISTING)?;
    let show_date = validation::parse_show_date(&form.showdate).back_to(LISTING)?;
    let start_time = validation::parse_start_time(&form.starttime).back_to(LISTING)?;

    Showtime::update_schedule(&state.db.pool, showtime_id, show_date, &start_time)
        .await
        .back_to(LISTING)?;

    Ok(Redirect::to(LISTING).into_response())
}
