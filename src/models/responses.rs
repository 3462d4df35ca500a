//! Response DTOs for the summary cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{encode_url, CachedArtifact, RecencyEntry};

/// Response body for a cached summary (GET /summaries/:encoded_url)
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    /// The summarized page
    pub url: String,
    /// Stored display title
    pub title: String,
    /// Long-form summary in markdown
    pub summary: String,
}

impl SummaryResponse {
    pub fn new(url: impl Into<String>, artifact: CachedArtifact) -> Self {
        Self {
            url: url.into(),
            title: artifact.title,
            summary: artifact.summary,
        }
    }
}

/// Response body for the summarize operation (POST /summarize)
#[derive(Debug, Clone, Serialize)]
pub struct StoreResponse {
    /// Success message
    pub message: String,
    /// The summarized page
    pub url: String,
    /// Token for retrieving the stored summary
    pub encoded_url: String,
}

impl StoreResponse {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let encoded_url = encode_url(&url);
        Self {
            message: format!("Summary for '{}' stored successfully", url),
            url,
            encoded_url,
        }
    }
}

/// Response body for the delete operation (DELETE /summaries/:encoded_url)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The URL whose summary was deleted
    pub url: String,
}

impl DeleteResponse {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            message: format!("Summary for '{}' deleted successfully", url),
            url,
        }
    }
}

/// One row of the recency view (GET /recent)
#[derive(Debug, Clone, Serialize)]
pub struct RecentEntryResponse {
    /// The summarized page
    pub url: String,
    /// Token for retrieving the stored summary
    pub encoded_url: String,
    /// Compact display title derived from the URL
    pub title: String,
    /// Creation time as `YYYY-MM-DD HH:MM UTC`
    pub timestamp: String,
}

impl From<&RecencyEntry> for RecentEntryResponse {
    fn from(entry: &RecencyEntry) -> Self {
        let title = entry
            .url
            .strip_prefix("https://")
            .unwrap_or(&entry.url)
            .trim_end_matches('/')
            .to_string();
        Self {
            url: entry.url.clone(),
            encoded_url: encode_url(&entry.url),
            title,
            timestamp: entry.formatted_timestamp(),
        }
    }
}

/// Response body for the recency view (GET /recent)
#[derive(Debug, Clone, Serialize)]
pub struct RecentResponse {
    pub entries: Vec<RecentEntryResponse>,
    pub count: usize,
}

impl RecentResponse {
    pub fn new(entries: &[RecencyEntry]) -> Self {
        let entries: Vec<RecentEntryResponse> =
            entries.iter().map(RecentEntryResponse::from).collect();
        let count = entries.len();
        Self { entries, count }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_summary_response_from_artifact() {
        let resp = SummaryResponse::new(
            "https://example.com",
            CachedArtifact::new("Title", "body"),
        );
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("https://example.com"));
        assert!(json.contains("Title"));
    }

    #[test]
    fn test_store_response_carries_encoded_url() {
        let resp = StoreResponse::new("https://example.com/a");
        assert_eq!(resp.encoded_url, encode_url("https://example.com/a"));
        assert!(resp.message.contains("stored"));
    }

    #[test]
    fn test_recent_entry_title_derivation() {
        let entry = RecencyEntry {
            url: "https://example.com/posts/".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
        };
        let resp = RecentEntryResponse::from(&entry);
        assert_eq!(resp.title, "example.com/posts");
        assert_eq!(resp.timestamp, "2025-01-02 03:04 UTC");
    }

    #[test]
    fn test_recent_response_count() {
        let entries = vec![
            RecencyEntry {
                url: "https://example.com/a".to_string(),
                created_at: Utc.timestamp_opt(200, 0).unwrap(),
            },
            RecencyEntry {
                url: "https://example.com/b".to_string(),
                created_at: Utc.timestamp_opt(100, 0).unwrap(),
            },
        ];
        let resp = RecentResponse::new(&entries);
        assert_eq!(resp.count, 2);
        assert_eq!(resp.entries[0].url, "https://example.com/a");
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
