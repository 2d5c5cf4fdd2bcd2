//! Builder-style setters for `InlineConfig`

use super::types::InlineConfig;

impl InlineConfig {
    /// Replace the blacklist
    ///
    /// An empty list disables skipping entirely.
    #[must_use]
    pub fn with_blacklist<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklist = entries.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Reject remote bodies larger than `limit` bytes
    #[must_use]
    pub fn with_max_resource_size(mut self, limit: usize) -> Self {
        self.max_resource_size = Some(limit);
        self
    }
}
