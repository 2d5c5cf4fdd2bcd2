//! Type definitions for resource inlining

/// Category of an inlined resource, used in failure reports and log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Script,
    Stylesheet,
    /// A `url(...)` reference inside a fetched stylesheet
    StylesheetAsset,
    Image,
    Background,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Script => write!(f, "javascript"),
            ResourceType::Stylesheet => write!(f, "css"),
            ResourceType::StylesheetAsset => write!(f, "css asset"),
            ResourceType::Image => write!(f, "image"),
            ResourceType::Background => write!(f, "background-image"),
        }
    }
}

/// Error information for a resource that was left in its original form
///
/// `address` is whatever identifies the unit in the page: the raw `src` or
/// `href`, the resolved asset address inside a stylesheet, or the full style
/// text for background rewrites.
#[derive(Debug, Clone)]
pub struct InliningError {
    pub address: String,
    pub resource_type: ResourceType,
    pub error: String,
}

impl InliningError {
    pub(crate) fn new(
        address: impl Into<String>,
        resource_type: ResourceType,
        error: &dyn std::error::Error,
    ) -> Self {
        let failure = Self {
            address: address.into(),
            resource_type,
            error: error.to_string(),
        };
        log::warn!("{failure}");
        failure
    }
}

impl std::fmt::Display for InliningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "failed to load {} from {}: {}",
            self.resource_type, self.address, self.error
        )
    }
}

/// Outcome of a single pass over the document
#[derive(Debug, Clone, Default)]
pub struct PassReport {
    pub successes: usize,
    pub failures: Vec<InliningError>,
}

impl PassReport {
    pub(crate) fn record(&mut self, outcome: Result<(), InliningError>) {
        match outcome {
            Ok(()) => self.successes += 1,
            Err(failure) => self.failures.push(failure),
        }
    }

    pub(crate) fn merge(&mut self, other: PassReport) {
        self.successes += other.successes;
        self.failures.extend(other.failures);
    }
}

/// Result of resource inlining with success and failure tracking
#[derive(Debug, Clone)]
pub struct InliningResult {
    pub html: String,
    pub successes: usize,
    pub failures: Vec<InliningError>,
}

impl InliningResult {
    /// Total number of resources processed
    #[must_use]
    pub fn total(&self) -> usize {
        self.successes + self.failures.len()
    }

    /// Check if any failures occurred
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Get failure rate as a ratio between 0.0 and 1.0
    #[must_use]
    pub fn failure_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.failures.len() as f64 / total as f64
        }
    }
}
