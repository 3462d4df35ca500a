//! Storage Module
//!
//! Backend abstraction over a flat object namespace with paginated listing.

mod fs;
mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;

// == Listing Types ==
/// Metadata for one stored object, surfaced while enumerating the backend.
#[derive(Debug, Clone)]
pub struct ObjectMeta {
    /// Object name within the flat namespace
    pub key: String,
    /// Backend-supplied creation time
    pub created_at: DateTime<Utc>,
}

/// One page of a paginated listing.
#[derive(Debug, Clone)]
pub struct ListPage {
    /// Objects in this page, in no particular order
    pub entries: Vec<ObjectMeta>,
    /// Opaque cursor for the next page; None when the listing is exhausted
    pub next_token: Option<String>,
}

// == Object Store Trait ==
/// Flat object-store backend.
///
/// Per-key put/get/delete are assumed atomic with read-after-write
/// consistency; no cross-key transactions are offered or required. Callers
/// never assume a maximum listing size and hold at most one page in memory.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Writes an object, unconditionally overwriting any existing value.
    async fn put_object(&self, key: &str, bytes: Vec<u8>) -> Result<()>;

    /// Downloads an object's payload, or None when the key has no object.
    async fn get_object(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Removes an object. Returns false when the key had no object.
    async fn delete_object(&self, key: &str) -> Result<bool>;

    /// Existence probe that does not download the payload.
    async fn object_exists(&self, key: &str) -> Result<bool>;

    /// Returns one page of the key listing.
    ///
    /// Pass the token from the previous page to continue; a None token in
    /// the returned page means the listing is exhausted.
    async fn list_objects(&self, page_size: usize, token: Option<&str>) -> Result<ListPage>;
}
