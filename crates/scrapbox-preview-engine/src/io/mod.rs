//! # Transport
//!
//! The contract for retrieving a page's raw content, plus the HTTP
//! implementation against the Scrapbox pages API.

pub mod http;

use async_trait::async_trait;

use crate::models::{ContentKey, PageData};

pub use http::HttpTransport;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("API fetch error: {message} (status: {status}) for {url}")]
    Status {
        status: u16,
        message: String,
        url: String,
    },
    #[error("API response format error: {0}")]
    Format(String),
    #[error("Request failed: {0}")]
    Transport(String),
}

/// Retrieves one page's structured content. One call is one attempt; retries
/// are not the transport's job.
#[async_trait]
pub trait PageTransport: Send + Sync {
    async fn fetch_page(&self, key: &ContentKey) -> Result<PageData, FetchError>;
}
