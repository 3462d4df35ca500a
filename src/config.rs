//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::Context;

/// Server configuration parameters.
///
/// All values except the API key can be configured via environment variables
/// with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Root directory for the filesystem object store
    pub data_dir: PathBuf,
    /// API key for the summarization backend
    pub anthropic_api_key: String,
    /// Model used for summarization
    pub claude_model: String,
    /// Summarization request timeout in seconds
    pub claude_timeout: u64,
    /// Upper bound on entries returned by the recency view
    pub recent_max_entries: usize,
    /// Page size used when enumerating the object store
    pub list_page_size: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `ANTHROPIC_API_KEY` - Summarization API key (required)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `DATA_DIR` - Object store root directory (default: ./data)
    /// - `CLAUDE_MODEL` - Summarization model (default: claude-3-5-sonnet-latest)
    /// - `CLAUDE_TIMEOUT` - Summarization timeout in seconds (default: 120)
    /// - `RECENT_MAX_ENTRIES` - Recency view bound (default: 1000)
    /// - `LIST_PAGE_SIZE` - Listing page size (default: 1000)
    pub fn from_env() -> anyhow::Result<Self> {
        let anthropic_api_key =
            env::var("ANTHROPIC_API_KEY").context("ANTHROPIC_API_KEY must be set")?;

        Ok(Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            anthropic_api_key,
            claude_model: env::var("CLAUDE_MODEL")
                .unwrap_or_else(|_| "claude-3-5-sonnet-latest".to_string()),
            claude_timeout: env::var("CLAUDE_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(120),
            recent_max_entries: env::var("RECENT_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            list_page_size: env::var("LIST_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            data_dir: PathBuf::from("./data"),
            anthropic_api_key: String::new(),
            claude_model: "claude-3-5-sonnet-latest".to_string(),
            claude_timeout: 120,
            recent_max_entries: 1000,
            list_page_size: 1000,
        }
    }
}
