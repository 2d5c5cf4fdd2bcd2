//! The four inlining passes
//!
//! Each pass walks the shared document once, in document order, and fetches
//! one resource at a time. A unit that fails (one script, one stylesheet, one
//! `url()` inside a stylesheet, one image, one style attribute) is logged,
//! recorded in the pass report, and left in its original form. Only an
//! invalid selector aborts a pass.

use anyhow::Result;
use kuchiki::{ElementData, NodeDataRef, NodeRef};
use lazy_static::lazy_static;
use regex::Regex;

use super::data_uri::data_encode_image;
use super::dom::{new_text_element, non_empty_attr, replace_node, select_all};
use super::errors::{InlineError, InlineResult};
use super::fetcher::Fetcher;
use super::style_attr::{parse_declarations, serialize_declarations};
use super::types::{InliningError, PassReport, ResourceType};
use crate::utils::resolve_path;

lazy_static! {
    // Lazy, single capture, quotes are not stripped: `url("a.png")` captures
    // `"a.png"` including the quotes.
    static ref CSS_URL: Regex =
        Regex::new(r"url\((.+?)\)")
            .expect("BUG: hardcoded regex 'url\\((.+?)\\)' is invalid - this is a compile-time bug");
}

const SCRIPT_SELECTOR: &str = "script[src]";
const STYLESHEET_SELECTOR: &str = "link[rel~=\"stylesheet\"][href]";
const IMG_SELECTOR: &str = "img[src]";
const IMAGE_INPUT_SELECTOR: &str = "input[type=\"image\"][src]";
const BACKGROUND_SELECTOR: &str = "[style*=\"background-image\"]";

/// Fetch `address` as binary and wrap it in a `data:` URI
async fn fetch_data_uri(address: &str, fetcher: &Fetcher) -> InlineResult<String> {
    let content = fetcher.get_bytes(address).await?;
    Ok(data_encode_image(&address.to_lowercase(), &content))
}

// ============================================================================
// SCRIPTS
// ============================================================================

/// Replace every `<script src>` with an inline `<script>` holding the fetched code
pub async fn replace_javascript(
    base_url: &str,
    document: &NodeRef,
    fetcher: &Fetcher,
) -> Result<PassReport> {
    let mut report = PassReport::default();

    for script in select_all(document, SCRIPT_SELECTOR)? {
        let Some(src) = non_empty_attr(&script, "src") else {
            continue;
        };

        let outcome = inline_script(base_url, &script, &src, fetcher).await;
        report.record(outcome.map_err(|e| InliningError::new(src, ResourceType::Script, &e)));
    }

    Ok(report)
}

async fn inline_script(
    base_url: &str,
    script: &NodeDataRef<ElementData>,
    src: &str,
    fetcher: &Fetcher,
) -> InlineResult<()> {
    let address = resolve_path(base_url, src)?;
    log::debug!("Processing script: {src} -> {address}");

    let code = fetcher.get_text(&address).await?;
    let replacement = new_text_element("script", &code)?;
    replace_node(script.as_node(), replacement);

    log::debug!("Replaced script with inline code: {src} ({} chars)", code.len());
    Ok(())
}

// ============================================================================
// STYLESHEETS
// ============================================================================

/// Replace every stylesheet `<link>` with a `<style>` holding the fetched CSS,
/// after turning each `url(...)` inside it into a data URI
pub async fn replace_css(
    base_url: &str,
    document: &NodeRef,
    fetcher: &Fetcher,
) -> Result<PassReport> {
    let mut report = PassReport::default();

    for link in select_all(document, STYLESHEET_SELECTOR)? {
        let Some(href) = non_empty_attr(&link, "href") else {
            continue;
        };

        let outcome = inline_stylesheet(base_url, &link, &href, fetcher, &mut report).await;
        report.record(outcome.map_err(|e| InliningError::new(href, ResourceType::Stylesheet, &e)));
    }

    Ok(report)
}

async fn inline_stylesheet(
    base_url: &str,
    link: &NodeDataRef<ElementData>,
    href: &str,
    fetcher: &Fetcher,
    report: &mut PassReport,
) -> InlineResult<()> {
    let css_address = resolve_path(base_url, href)?;
    log::debug!("Processing CSS: {href} -> {css_address}");

    let css = fetcher.get_text(&css_address).await?;
    let rewritten = rewrite_css_urls(&css, &css_address, fetcher, report).await;

    let replacement = new_text_element("style", &rewritten)?;
    replace_node(link.as_node(), replacement);

    log::debug!("Replaced CSS link with inline style: {href} (resolved to {css_address})");
    Ok(())
}

/// Rewrite every `url(...)` in `css` as a data URI
///
/// References are resolved against the stylesheet's own address. A reference
/// that cannot be resolved or fetched is replaced by the empty string; the
/// remaining matches are still processed.
pub async fn rewrite_css_urls(
    css: &str,
    css_address: &str,
    fetcher: &Fetcher,
    report: &mut PassReport,
) -> String {
    let mut rewritten = String::with_capacity(css.len());
    let mut last_end = 0;

    for captures in CSS_URL.captures_iter(css) {
        let (Some(whole), Some(reference)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        rewritten.push_str(&css[last_end..whole.start()]);
        last_end = whole.end();

        let outcome = match resolve_path(css_address, reference.as_str()) {
            Ok(asset) => {
                let fetched = fetch_data_uri(&asset, fetcher).await;
                match fetched {
                    Ok(data_uri) => {
                        rewritten.push_str("url(");
                        rewritten.push_str(&data_uri);
                        rewritten.push(')');
                        Ok(())
                    }
                    Err(e) => Err(InliningError::new(asset, ResourceType::StylesheetAsset, &e)),
                }
            }
            Err(e) => Err(InliningError::new(
                reference.as_str(),
                ResourceType::StylesheetAsset,
                &e,
            )),
        };
        report.record(outcome);
    }

    rewritten.push_str(&css[last_end..]);
    rewritten
}

// ============================================================================
// IMAGES
// ============================================================================

/// Overwrite the `src` of every `<img>` and `<input type="image">` with a data URI
///
/// All `<img>` elements are handled before any image input. Sources that are
/// already `data:` URIs are left alone.
pub async fn replace_images(
    base_url: &str,
    document: &NodeRef,
    fetcher: &Fetcher,
) -> Result<PassReport> {
    let mut report = PassReport::default();

    let mut images = select_all(document, IMG_SELECTOR)?;
    images.extend(select_all(document, IMAGE_INPUT_SELECTOR)?);

    for image in images {
        let Some(src) = non_empty_attr(&image, "src") else {
            continue;
        };
        if src.starts_with("data:") {
            log::debug!("Skipping image already inlined as a data URL");
            continue;
        }

        let outcome = inline_image(base_url, &image, &src, fetcher).await;
        report.record(outcome.map_err(|e| InliningError::new(src, ResourceType::Image, &e)));
    }

    Ok(report)
}

async fn inline_image(
    base_url: &str,
    image: &NodeDataRef<ElementData>,
    src: &str,
    fetcher: &Fetcher,
) -> InlineResult<()> {
    let address = resolve_path(base_url, src)?;
    log::debug!("Processing image: {src} -> {address}");

    let data_uri = fetch_data_uri(&address, fetcher).await?;
    image.attributes.borrow_mut().insert("src", data_uri);

    log::debug!("Replaced image src with data URL: {src}");
    Ok(())
}

// ============================================================================
// INLINE STYLE BACKGROUNDS
// ============================================================================

/// Inline `background`/`background-image` URLs found in `style` attributes
///
/// The attribute is only written back when every declaration that needed a
/// fetch succeeded; otherwise it stays exactly as it was.
pub async fn replace_backgrounds(
    base_url: &str,
    document: &NodeRef,
    fetcher: &Fetcher,
) -> Result<PassReport> {
    let mut report = PassReport::default();

    for element in select_all(document, BACKGROUND_SELECTOR)? {
        let Some(style) = non_empty_attr(&element, "style") else {
            continue;
        };

        let rewritten = rewrite_style(base_url, &style, fetcher).await;
        match rewritten {
            Ok((new_style, inlined)) => {
                element.attributes.borrow_mut().insert("style", new_style);
                if inlined > 0 {
                    report.successes += 1;
                }
            }
            Err(e) => report
                .failures
                .push(InliningError::new(style, ResourceType::Background, &e)),
        }
    }

    Ok(report)
}

/// Rebuild style text with background images inlined
///
/// Returns the new text and how many declarations were rewritten.
async fn rewrite_style(
    base_url: &str,
    style: &str,
    fetcher: &Fetcher,
) -> InlineResult<(String, usize)> {
    let mut declarations = parse_declarations(style)?;
    let mut inlined = 0;

    for declaration in &mut declarations {
        if !declaration.has_external_background() {
            continue;
        }

        let reference = declaration.url_reference()?.to_string();
        if reference.is_empty() {
            return Err(InlineError::MalformedStyle(format!(
                "{}: {}",
                declaration.property, declaration.value
            )));
        }

        let address = resolve_path(base_url, &reference)?;
        log::debug!("Processing background image: {reference} -> {address}");

        let data_uri = fetch_data_uri(&address, fetcher).await?;
        declaration.value = declaration.value.replace(&reference, &data_uri);
        inlined += 1;
    }

    Ok((serialize_declarations(&declarations), inlined))
}
