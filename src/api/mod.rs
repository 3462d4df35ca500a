//! API Module
//!
//! HTTP handlers and routing for the summary cache REST API.
//!
//! # Endpoints
//! - `POST /summarize` - Summarize submitted content and cache the result
//! - `GET /summaries/:encoded_url` - Retrieve a cached summary
//! - `DELETE /summaries/:encoded_url` - Delete a cached summary
//! - `GET /raw/:encoded_url` - Plain-text view of a cached summary
//! - `GET /recent` - Most recently created summaries
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
