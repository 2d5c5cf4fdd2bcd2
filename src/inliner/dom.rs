//! Helpers over the mutable kuchiki document tree
//!
//! The document is parsed once per run and every pass mutates it in place
//! through these functions.

use anyhow::{Context, Result, anyhow};
use kuchiki::traits::TendrilSink;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

use super::errors::InlineError;

/// Parse a full HTML document
#[must_use]
pub fn parse_document(html: &str) -> NodeRef {
    kuchiki::parse_html().one(html)
}

/// Collect every element matching `selector`, in document order
///
/// Matches must be collected before iteration because passes call
/// `detach()` on them, which would invalidate the live iterator.
pub fn select_all(document: &NodeRef, selector: &str) -> Result<Vec<NodeDataRef<ElementData>>> {
    Ok(document
        .select(selector)
        .map_err(|()| anyhow!("Invalid selector: {selector}"))?
        .collect())
}

/// Read an attribute, treating an empty value as absent
#[must_use]
pub fn non_empty_attr(element: &NodeDataRef<ElementData>, name: &str) -> Option<String> {
    let attrs = element.attributes.borrow();
    attrs
        .get(name)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

/// Build a detached, attribute-free element whose only child is `text`
///
/// kuchiki does not expose element construction without html5ever names, so
/// the element is lifted out of a scratch document.
pub fn new_text_element(tag: &str, text: &str) -> Result<NodeRef, InlineError> {
    let scratch = kuchiki::parse_html().one(format!("<{tag}></{tag}>"));
    let element = scratch
        .select_first(tag)
        .map_err(|()| InlineError::Element(tag.to_string()))?;

    let node = element.as_node().clone();
    node.detach();
    if !text.is_empty() {
        node.append(NodeRef::new_text(text));
    }
    Ok(node)
}

/// Put `replacement` where `original` was and drop `original` from the tree
pub fn replace_node(original: &NodeRef, replacement: NodeRef) {
    original.insert_before(replacement);
    original.detach();
}

/// Serialize the whole tree back to HTML text
pub fn serialize(document: &NodeRef) -> Result<String> {
    let mut html_output = Vec::new();
    document
        .serialize(&mut html_output)
        .context("Failed to serialize HTML document")?;

    String::from_utf8(html_output).context("Failed to convert HTML bytes to UTF-8 string")
}
