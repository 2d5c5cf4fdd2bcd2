//! Shared configuration constants for the inliner
//!
//! Default values used by `InlineConfig` and the fetcher.

/// Hosts whose resources are never fetched
///
/// Matching is a plain substring test against the whole address, so any remote
/// address that mentions one of these anywhere is skipped, not only requests
/// to the host itself. Analytics and feedback widgets add nothing to an
/// offline copy of a page.
pub const URL_BLACKLIST: &[&str] = &["getsatisfaction.com", "google-analytics.com"];

/// Chrome user agent string sent with every remote request
///
/// Some CDNs refuse to serve stylesheets and images to unknown clients.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
