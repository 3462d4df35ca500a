//! Models Module
//!
//! Request and response DTOs for the summary cache API.

mod requests;
mod responses;

pub use requests::{RecentQuery, SummarizeRequest};
pub use responses::{
    DeleteResponse, ErrorResponse, HealthResponse, RecentEntryResponse, RecentResponse,
    StoreResponse, SummaryResponse,
};
