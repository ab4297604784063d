//! HTTP surface for the scoring pipeline.
//!
//! Routes:
//! - `GET /health`
//! - `POST /summarize` scores an explicit list of article URLs
//! - `POST /summarize_by_date` searches a date range and scores what it finds

use axum::{
    routing::{get, post},
    Router,
};
use nr_core::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/health", get(handlers::health))
        .route("/summarize", post(handlers::summarize))
        .route("/summarize_by_date", post(handlers::summarize_by_date))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Binds `addr` and serves the app until the process is stopped.
pub async fn serve(state: AppState, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("🌐 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::{create_app, serve, ApiError, AppState};
    pub use nr_core::{Error, Result, ScoreReport};
}
