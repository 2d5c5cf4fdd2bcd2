//! Driver: fetch, parse, run the four passes, serialize, write

use std::path::Path;

use anyhow::{Context, Result};

use super::dom::{parse_document, serialize};
use super::fetcher::Fetcher;
use super::processors::{replace_backgrounds, replace_css, replace_images, replace_javascript};
use super::types::{InliningResult, PassReport};
use crate::config::InlineConfig;

/// Fetch the document at `source` and inline everything it references
///
/// Failing to load the root document is fatal; failures of individual
/// resources are reported in the returned `InliningResult`.
pub async fn inline_document(source: &str, config: &InlineConfig) -> Result<InliningResult> {
    let fetcher = Fetcher::new(config.clone()).context("Failed to set up fetcher")?;

    let html = fetcher
        .get_text(source)
        .await
        .with_context(|| format!("Failed to load document from {source}"))?;
    log::debug!("Loaded {} chars from {source}", html.len());

    inline_html(&html, source, &fetcher).await
}

/// Run the four passes over already-loaded HTML
///
/// `base_url` is the address the HTML came from; every reference in the
/// document is resolved against it.
pub async fn inline_html(html: &str, base_url: &str, fetcher: &Fetcher) -> Result<InliningResult> {
    let document = parse_document(html);
    let mut report = PassReport::default();

    let scripts = replace_javascript(base_url, &document, fetcher).await?;
    log_pass("scripts", &scripts);
    report.merge(scripts);

    let stylesheets = replace_css(base_url, &document, fetcher).await?;
    log_pass("stylesheets", &stylesheets);
    report.merge(stylesheets);

    let images = replace_images(base_url, &document, fetcher).await?;
    log_pass("images", &images);
    report.merge(images);

    let backgrounds = replace_backgrounds(base_url, &document, fetcher).await?;
    log_pass("backgrounds", &backgrounds);
    report.merge(backgrounds);

    let html = serialize(&document)?;

    Ok(InliningResult {
        html,
        successes: report.successes,
        failures: report.failures,
    })
}

/// Inline `source` and write the result to `output` as UTF-8
pub async fn inline_to_file(
    source: &str,
    output: &Path,
    config: &InlineConfig,
) -> Result<InliningResult> {
    let result = inline_document(source, config).await?;

    tokio::fs::write(output, result.html.as_bytes())
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(result)
}

fn log_pass(name: &str, report: &PassReport) {
    log::debug!(
        "{name}: {} inlined, {} failed",
        report.successes,
        report.failures.len()
    );
}
