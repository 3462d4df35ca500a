//! Recency Index Module
//!
//! Bounded top-K selection over the backend's paginated key listing.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::cache::{url_from_blob_name, BLOB_SUFFIX};
use crate::error::Result;
use crate::storage::ObjectStore;

// == Recency Entry ==
/// One row of the "most recent summaries" view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecencyEntry {
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl RecencyEntry {
    /// Display form of the creation time. Ordering always uses the
    /// underlying instant, never this string.
    pub fn formatted_timestamp(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M UTC").to_string()
    }
}

// Heap element ordered by creation time; the key participates only to make
// the order total, so equal timestamps stay stable within one query.
#[derive(Debug, PartialEq, Eq)]
struct HeapEntry {
    created_at: DateTime<Utc>,
    key: String,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.created_at
            .cmp(&other.created_at)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// == Top K ==
/// Returns the `max_entries` most recently created summaries, newest first.
///
/// The full key space is scanned one page at a time while a min-heap capped
/// at `max_entries` keeps auxiliary memory at O(max_entries) no matter how
/// many objects the backend holds: entries are pushed until the heap is
/// full, after which each newer entry evicts the current minimum. Keys
/// without the artifact suffix are skipped as foreign objects; keys that
/// fail to decode after the scan are dropped from the result rather than
/// failing the query. Any listing failure mid-scan aborts the whole query —
/// a partial view is never returned as if it were complete.
pub async fn top_k(
    store: &dyn ObjectStore,
    max_entries: usize,
    page_size: usize,
) -> Result<Vec<RecencyEntry>> {
    if max_entries == 0 {
        return Ok(Vec::new());
    }

    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::with_capacity(max_entries + 1);
    let mut total_scanned = 0usize;
    let mut token: Option<String> = None;

    loop {
        let page = store.list_objects(page_size, token.as_deref()).await?;

        for meta in page.entries {
            if !meta.key.ends_with(BLOB_SUFFIX) {
                debug!("Skipping foreign object {}", meta.key);
                continue;
            }
            total_scanned += 1;

            let entry = HeapEntry {
                created_at: meta.created_at,
                key: meta.key,
            };
            if heap.len() < max_entries {
                heap.push(Reverse(entry));
            } else {
                let newer_than_oldest =
                    heap.peek().is_some_and(|Reverse(oldest)| entry > *oldest);
                if newer_than_oldest {
                    heap.pop();
                    heap.push(Reverse(entry));
                }
            }
        }

        match page.next_token {
            Some(next) => token = Some(next),
            None => break,
        }
    }

    let mut newest: Vec<HeapEntry> = heap.into_iter().map(|Reverse(e)| e).collect();
    newest.sort_by(|a, b| b.cmp(a));

    let entries: Vec<RecencyEntry> = newest
        .into_iter()
        .filter_map(|e| match url_from_blob_name(&e.key) {
            Ok(url) => Some(RecencyEntry {
                url,
                created_at: e.created_at,
            }),
            Err(err) => {
                debug!("Dropping undecodable key {}: {err}", e.key);
                None
            }
        })
        .collect();

    info!(
        "Scanned {total_scanned} objects, returning {} most recent",
        entries.len()
    );
    Ok(entries)
}
