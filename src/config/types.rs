use crate::utils::{CHROME_USER_AGENT, URL_BLACKLIST};

/// Settings shared by every fetch made during one inlining run
#[derive(Debug, Clone)]
pub struct InlineConfig {
    /// Substrings that mark a remote address as not worth fetching
    ///
    /// A blacklisted address yields empty content instead of a request.
    pub blacklist: Vec<String>,

    /// User-Agent header sent with remote requests
    pub user_agent: String,

    /// Upper bound on a single remote body, in bytes
    ///
    /// `None` (the default) accepts anything the server sends.
    pub max_resource_size: Option<usize>,
}

impl Default for InlineConfig {
    fn default() -> Self {
        Self {
            blacklist: URL_BLACKLIST.iter().map(|s| (*s).to_string()).collect(),
            user_agent: CHROME_USER_AGENT.to_string(),
            max_resource_size: None,
        }
    }
}
