//! API Routes
//!
//! Configures the Axum router with all summary cache endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    delete_summary_handler, get_summary_handler, health_handler, raw_summary_handler,
    recent_handler, summarize_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /summarize` - Summarize submitted content and cache the result
/// - `GET /summaries/:encoded_url` - Retrieve a cached summary
/// - `DELETE /summaries/:encoded_url` - Delete a cached summary
/// - `GET /raw/:encoded_url` - Plain-text view of a cached summary
/// - `GET /recent` - Most recently created summaries
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/summarize", post(summarize_handler))
        .route(
            "/summaries/:encoded_url",
            get(get_summary_handler).delete(delete_summary_handler),
        )
        .route("/raw/:encoded_url", get(raw_summary_handler))
        .route("/recent", get(recent_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
