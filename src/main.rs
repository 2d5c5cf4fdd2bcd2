// Command-line entry point: inline one page into one self-contained file.
//
// Usage: kodegen-inliner <source-url-or-path> <output-file>

use anyhow::{Result, bail};
use kodegen_tools_inliner::{InlineConfig, inline_to_file};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    // Failure lines go to stdout next to the tool's other output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .filter_module("reqwest", log::LevelFilter::Warn)
        .filter_module("hyper_util", log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let (source, output) = match args.as_slice() {
        [_, source, output] => (source.as_str(), PathBuf::from(output)),
        _ => bail!("usage: kodegen-inliner <source-url-or-path> <output-file>"),
    };

    let result = inline_to_file(source, &output, &InlineConfig::default()).await?;

    log::info!(
        "Wrote {} ({} resources inlined, {} failed, {:.0}% failure rate)",
        output.display(),
        result.successes,
        result.failures.len(),
        result.failure_rate() * 100.0
    );

    Ok(())
}
