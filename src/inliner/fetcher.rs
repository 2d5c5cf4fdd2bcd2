//! Content retrieval for remote and local addresses
//!
//! The fetcher decides between HTTP and the filesystem by scheme, skips
//! blacklisted remote addresses, and hands back raw bytes or UTF-8 text.
//! It never swallows errors; each pass decides what a failure means for the
//! element it was working on.
//!
//! Requests are issued one at a time by the callers. There is no timeout and
//! no retry, a stalled server blocks the run for as long as the transport lets it.

use futures::StreamExt;
use reqwest::Client;

use super::errors::FetchError;
use crate::config::InlineConfig;
use crate::utils::{is_blacklisted, is_remote};

/// Largest buffer reserved up front from a Content-Length header
const MAX_PREALLOCATION: usize = 8 * 1024 * 1024;

/// Fetched payload, shaped by what the caller asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Binary(Vec<u8>),
}

impl Content {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(text) => text.is_empty(),
            Content::Binary(bytes) => bytes.is_empty(),
        }
    }
}

/// Retrieves resources for the inlining passes
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    config: InlineConfig,
}

impl Fetcher {
    pub fn new(config: InlineConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, config })
    }

    /// Fetch `address` as bytes when `expect_binary` is set, as text otherwise
    pub async fn get_content(
        &self,
        address: &str,
        expect_binary: bool,
    ) -> Result<Content, FetchError> {
        if expect_binary {
            self.get_bytes(address).await.map(Content::Binary)
        } else {
            self.get_text(address).await.map(Content::Text)
        }
    }

    /// Fetch raw bytes
    ///
    /// Blacklisted remote addresses yield an empty buffer without a request.
    pub async fn get_bytes(&self, address: &str) -> Result<Vec<u8>, FetchError> {
        if is_remote(address) {
            if is_blacklisted(address, &self.config.blacklist) {
                log::debug!("Skipping blacklisted address: {address}");
                return Ok(Vec::new());
            }
            return self.download(address).await;
        }

        tokio::fs::read(address)
            .await
            .map_err(|source| FetchError::Io {
                path: address.to_string(),
                source,
            })
    }

    /// Fetch content and decode it as UTF-8
    pub async fn get_text(&self, address: &str) -> Result<String, FetchError> {
        let bytes = self.get_bytes(address).await?;
        String::from_utf8(bytes).map_err(|source| FetchError::Decode {
            address: address.to_string(),
            source,
        })
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        // Enforce the cap before reading anything when the server announces a size
        let expected_size = response.content_length().unwrap_or(0);
        if let Some(limit) = self.config.max_resource_size
            && expected_size > limit as u64
        {
            return Err(FetchError::TooLarge {
                url: url.to_string(),
                size: expected_size,
                limit,
            });
        }

        let capacity = usize::try_from(expected_size)
            .unwrap_or(0)
            .min(MAX_PREALLOCATION);
        let mut buffer = Vec::with_capacity(capacity);

        // Content-Length can be missing or wrong, so check again while streaming
        let mut stream = response.bytes_stream();
        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

            let new_total = buffer.len() + chunk.len();
            if let Some(limit) = self.config.max_resource_size
                && new_total > limit
            {
                return Err(FetchError::TooLarge {
                    url: url.to_string(),
                    size: new_total as u64,
                    limit,
                });
            }

            buffer.extend_from_slice(&chunk);
        }

        Ok(buffer)
    }
}
