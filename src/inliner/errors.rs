//! Error types for fetching and inlining
//!
//! Every variant describes a failure of a single resource. Passes catch these
//! per unit and keep going; only the driver turns them into fatal errors.

use thiserror::Error;

/// Failure to retrieve the bytes behind an address
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, TLS or body transfer failure
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("{url} answered with HTTP status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Body exceeded the configured size cap
    #[error("{url} is too large: {size} bytes exceeds limit of {limit} bytes")]
    TooLarge { url: String, size: u64, limit: usize },

    /// Local file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Text content was not valid UTF-8
    #[error("Content of {address} is not valid UTF-8: {source}")]
    Decode {
        address: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Failure while inlining a single resource reference
#[derive(Debug, Error)]
pub enum InlineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Reference could not be joined onto its base address
    #[error("Cannot resolve '{reference}' against '{base}': {source}")]
    Resolve {
        base: String,
        reference: String,
        #[source]
        source: url::ParseError,
    },

    /// Inline style text did not split into `property: value` pairs
    #[error("Malformed style declaration: '{0}'")]
    MalformedStyle(String),

    /// A replacement element could not be built
    #[error("Failed to create <{0}> element")]
    Element(String),
}

/// Result type alias for per-resource operations
pub type InlineResult<T> = Result<T, InlineError>;
