//! API Handlers
//!
//! HTTP request handlers for each summary cache endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;

use crate::cache::{decode_url, recency, validate_url, CachedArtifact, SummaryStore};
use crate::error::{Result, ServiceError};
use crate::models::{
    DeleteResponse, HealthResponse, RecentQuery, RecentResponse, StoreResponse, SummarizeRequest,
    SummaryResponse,
};
use crate::summarizer::Summarizer;

/// Application state shared across all handlers.
///
/// Holds the cache store and summarizer handles; both are cheap clones over
/// shared backends, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: SummaryStore,
    pub summarizer: Arc<dyn Summarizer>,
    /// Upper bound on entries served by the recency view
    pub recent_max_entries: usize,
    /// Page size used when enumerating the object store
    pub list_page_size: usize,
}

impl AppState {
    /// Creates a new AppState with default listing limits.
    pub fn new(store: SummaryStore, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            store,
            summarizer,
            recent_max_entries: 1000,
            list_page_size: 1000,
        }
    }

    /// Overrides the listing limits (from configuration).
    pub fn with_limits(mut self, recent_max_entries: usize, list_page_size: usize) -> Self {
        self.recent_max_entries = recent_max_entries;
        self.list_page_size = list_page_size;
        self
    }
}

/// Resolves a path token to a validated HTTPS URL.
///
/// Runs the same gate on stored-key lookups as on inbound writes, so a
/// foreign token can never reach the backend.
fn url_from_token(encoded_url: &str) -> Result<String> {
    let url = decode_url(encoded_url)?;
    validate_url(&url)
}

/// Handler for POST /summarize
///
/// Validates the URL, summarizes the submitted content, and stores the
/// artifact under the URL's key.
pub async fn summarize_handler(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<StoreResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let url = validate_url(&req.url)?;
    info!("Summarizing content for {url}");

    let summary = state.summarizer.summarize(&req.content).await?;
    let artifact = CachedArtifact::new(&req.title, summary);
    state.store.put(&url, &artifact).await?;

    Ok(Json(StoreResponse::new(url)))
}

/// Handler for GET /summaries/:encoded_url
///
/// Returns the cached summary for the decoded URL; a clean miss is 404, an
/// undecodable token 400, a corrupt payload 500.
pub async fn get_summary_handler(
    State(state): State<AppState>,
    Path(encoded_url): Path<String>,
) -> Result<Json<SummaryResponse>> {
    let url = url_from_token(&encoded_url)?;

    match state.store.get(&url).await? {
        Some(artifact) => Ok(Json(SummaryResponse::new(url, artifact))),
        None => Err(ServiceError::NotFound(url)),
    }
}

/// Handler for GET /raw/:encoded_url
///
/// Plain-text rendering of the cached artifact, for debugging.
pub async fn raw_summary_handler(
    State(state): State<AppState>,
    Path(encoded_url): Path<String>,
) -> Result<String> {
    let url = url_from_token(&encoded_url)?;

    match state.store.get(&url).await? {
        Some(artifact) => Ok(format!(
            "Title: {}\n\nSummary:\n{}",
            artifact.title, artifact.summary
        )),
        None => Err(ServiceError::NotFound(url)),
    }
}

/// Handler for DELETE /summaries/:encoded_url
///
/// Removes the cached summary; deleting a URL that was never stored is a
/// not-found outcome rather than a failure.
pub async fn delete_summary_handler(
    State(state): State<AppState>,
    Path(encoded_url): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let url = url_from_token(&encoded_url)?;

    if state.store.delete(&url).await? {
        Ok(Json(DeleteResponse::new(url)))
    } else {
        Err(ServiceError::NotFound(url))
    }
}

/// Handler for GET /recent
///
/// Serves the bounded recency view over the backend listing.
pub async fn recent_handler(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<RecentResponse>> {
    let limit = query
        .limit
        .unwrap_or(state.recent_max_entries)
        .min(state.recent_max_entries);

    let entries =
        recency::top_k(state.store.backend().as_ref(), limit, state.list_page_size).await?;

    Ok(Json(RecentResponse::new(&entries)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
