pub mod customers;
pub mod pages;
pub mod purchase;
pub mod showtimes;
pub mod tickets;

use axum::{
    response::{Html, IntoResponse, Response},
    Router,
};
use maud::Markup;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(pages::routes())
        .merge(showtimes::routes())
        .merge(tickets::routes())
        .merge(purchase::routes())
        .merge(customers::routes())
}

fn render(markup: Markup) -> Response {
    Html(markup.into_string()).into_response()
}
