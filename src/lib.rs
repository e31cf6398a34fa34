pub mod appresult;
pub mod config;
pub mod db;
pub mod envelope;
pub mod extract;
pub mod messages;
pub mod store;

use std::sync::Arc;

use axum::{extract::FromRef, Router};
use sqlx::SqlitePool;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub use appresult::{AppError, AppResult};
pub use config::Config;
use store::{MessageRepository, SqliteStore};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub messages: Arc<dyn MessageRepository>,
}

impl AppState {
    pub fn with_store<S>(store: S) -> AppState
    where
        S: MessageRepository + 'static,
    {
        AppState {
            messages: Arc::new(store),
        }
    }

    pub fn sqlite(db_pool: SqlitePool) -> AppState {
        Self::with_store(SqliteStore::new(db_pool))
    }
}

pub fn app(app_state: AppState) -> Router {
    Router::new()
        .merge(messages::router())
        .fallback(not_found)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
}

async fn not_found() -> AppError {
    AppError::NotFound("no such route".to_owned())
}
