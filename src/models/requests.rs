//! Request DTOs for the summary cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for the summarize operation (POST /summarize)
///
/// # Fields
/// - `url`: The page the content came from; must validate as HTTPS
/// - `title`: Display title stored alongside the summary
/// - `content`: Raw page content handed to the summarizer
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
    pub title: String,
    pub content: String,
}

impl SummarizeRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid. URL
    /// validation proper happens in the codec; this only checks shape.
    pub fn validate(&self) -> Option<String> {
        if self.url.trim().is_empty() {
            return Some("URL cannot be empty".to_string());
        }
        if self.title.trim().is_empty() {
            return Some("Title cannot be empty".to_string());
        }
        if self.content.trim().is_empty() {
            return Some("Content cannot be empty".to_string());
        }
        None
    }
}

/// Query parameters for the recency view (GET /recent)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentQuery {
    /// Caps the number of returned entries; clamped to the server bound
    #[serde(default)]
    pub limit: Option<usize>,
}
