use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{FetchError, PageTransport};
use crate::models::{ContentKey, PageData};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches pages from `{base_url}/api/pages/{namespace}/{title}`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn page_url(&self, key: &ContentKey) -> String {
        format!(
            "{}/api/pages{}",
            self.base_url.trim_end_matches('/'),
            key.path()
        )
    }
}

#[async_trait]
impl PageTransport for HttpTransport {
    async fn fetch_page(&self, key: &ContentKey) -> Result<PageData, FetchError> {
        let url = self.page_url(key);
        log::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("{e} for {url}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
                url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(format!("{e} for {url}")))?;
        parse_page(&body)
    }
}

/// Decodes a pages-API payload. A body without a `lines` array is a format
/// error.
pub fn parse_page(body: &str) -> Result<PageData, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Format(e.to_string()))
}
