use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::views;

/// Everything a request can fail with, one variant per outcome the user
/// needs to tell apart.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("Phone number must contain digits only (e.g., 5051234567).")]
    InvalidPhone,

    #[error("{0} not found.")]
    NotFound(&'static str),

    #[error("This seat is already booked for the selected showtime.")]
    SeatUnavailable,

    #[error(
        "This customer has related purchase/ticket records. \
         Delete related purchases first or choose another customer."
    )]
    DeletionBlocked,

    #[error("{}", database_message(.0))]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn title(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "Invalid input",
            AppError::InvalidPhone => "Invalid phone",
            AppError::NotFound(_) => "Not found",
            AppError::SeatUnavailable => "Seat not available",
            AppError::DeletionBlocked => "Deletion blocked",
            AppError::Database(_) => "Database Error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::InvalidPhone => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::SeatUnavailable | AppError::DeletionBlocked => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn back_to(self, back_url: &'static str) -> PageError {
        PageError { error: self, back_url }
    }
}

// Server-side errors carry their own message; everything else uses the driver text.
fn database_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}

/// An error together with the page the user should return to.
#[derive(Debug)]
pub struct PageError {
    pub error: AppError,
    pub back_url: &'static str,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let message = self.error.to_string();

        if let AppError::Database(ref e) = self.error {
            tracing::error!(back_url = self.back_url, "database error: {:?}", e);
        } else {
            tracing::debug!(back_url = self.back_url, title = self.error.title(), "{}", message);
        }

        let page = views::message(self.error.title(), &message, self.back_url);
        (status, Html(page.into_string())).into_response()
    }
}

/// `result.back_to("/admin/tickets")?` in handlers.
pub trait BackTo<T> {
    fn back_to(self, back_url: &'static str) -> Result<T, PageError>;
}

impl<T, E> BackTo<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn back_to(self, back_url: &'static str) -> Result<T, PageError> {
        self.map_err(|e| e.into().back_to(back_url))
    }
}
