pub mod config;
pub mod inliner;
pub mod utils;

pub use config::InlineConfig;
pub use inliner::{
    Content, FetchError, Fetcher, InlineError, InliningError, InliningResult, PassReport,
    ResourceType, data_encode_image, inline_document, inline_html, inline_to_file,
};
pub use utils::{is_remote, resolve_path};

/// Inline `source` into `output` with the default configuration
pub async fn inline(
    source: &str,
    output: impl AsRef<std::path::Path>,
) -> anyhow::Result<InliningResult> {
    inline_to_file(source, output.as_ref(), &InlineConfig::default()).await
}
