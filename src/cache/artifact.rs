//! Cached Artifact Module
//!
//! The stored representation of one summary: a UTF-8 JSON record compressed
//! with gzip before upload.

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ServiceError};

// == Cached Artifact ==
/// Immutable cached result for one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedArtifact {
    /// Page title
    pub title: String,
    /// Long-form summary in markdown
    pub summary: String,
}

impl CachedArtifact {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
        }
    }

    // == Serialize ==
    /// Serializes to the stored representation.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let json = serde_json::to_vec(self)
            .map_err(|e| ServiceError::Storage(format!("serialize artifact: {e}")))?;
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(&json)
            .map_err(|e| ServiceError::Storage(format!("compress artifact: {e}")))?;
        encoder
            .finish()
            .map_err(|e| ServiceError::Storage(format!("compress artifact: {e}")))
    }

    // == Deserialize ==
    /// Parses the stored representation.
    ///
    /// Any failure here means the object exists but its payload is corrupt,
    /// which callers must keep distinct from a clean miss.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut decoder = GzDecoder::new(bytes);
        let mut json = Vec::new();
        decoder
            .read_to_end(&mut json)
            .map_err(|e| ServiceError::Storage(format!("decompress artifact: {e}")))?;
        serde_json::from_slice(&json)
            .map_err(|e| ServiceError::Storage(format!("parse artifact: {e}")))
    }
}
