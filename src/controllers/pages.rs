use axum::{extract::State, response::Response, routing::get, Router};
use std::sync::Arc;

use super::render;
use crate::error::{BackTo, PageError};
use crate::models::Showtime;
use crate::{views, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/admin", get(admin))
        .route("/films", get(films))
}

async fn index() -> Response {
    render(views::index())
}

async fn admin() -> Response {
    render(views::admin())
}

// GET /films
async fn films(State(state): State<Arc<AppState>>) -> Result<Response, PageError> {
    let rows = Showtime::list_for_films(&state.db.pool).await.back_to("/")?;
    Ok(render(views::films(&rows)))
}
