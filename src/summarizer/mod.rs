//! Summarizer Module
//!
//! Upstream collaborator that turns raw page content into a long-form
//! markdown summary. The cache core only sees this trait; the Claude-backed
//! implementation lives behind it.

mod claude;

pub use claude::ClaudeSummarizer;

use async_trait::async_trait;

use crate::error::Result;

/// Produces a long-form markdown summary for raw page content.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, content: &str) -> Result<String>;
}
