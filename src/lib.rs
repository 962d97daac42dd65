pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod validation;
pub mod views;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub config: config::Config,
}

impl AppState {
    pub async fn new(config: config::Config) -> anyhow::Result<Arc<Self>> {
        let db = database::Database::new(&config.database).await?;

        if config.database.run_migrations {
            db.run_migrations().await?;
        }

        Ok(Arc::new(Self { db, config }))
    }

    pub fn with_database(db: database::Database, config: config::Config) -> Arc<Self> {
        Arc::new(Self { db, config })
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
