//! Cache Module
//!
//! URL codec, artifact format, cache store, and the bounded recency index.

mod artifact;
mod codec;
pub mod recency;
mod store;


// Re-export public types
pub use artifact::CachedArtifact;
pub use codec::{
    blob_name, decode_url, encode_url, url_from_blob_name, validate_url, BLOB_SUFFIX,
};
pub use recency::RecencyEntry;
pub use store::SummaryStore;
