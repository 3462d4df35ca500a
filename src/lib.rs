//! Summary Cache - a URL summary cache server
//!
//! Maps HTTPS URLs to cached `{title, summary}` artifacts in an object
//! store and serves a bounded most-recent view over the store's listing.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod summarizer;

pub use api::AppState;
pub use config::Config;
