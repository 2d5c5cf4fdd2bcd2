//! Resource inlining functionality
//!
//! This module turns a page into a self-contained document: scripts and
//! stylesheets become inline elements, images and CSS backgrounds become
//! `data:` URIs.

pub mod data_uri;
pub mod dom;
pub mod errors;
pub mod fetcher;
pub mod orchestrator;
pub mod processors;
pub mod style_attr;
pub mod types;

pub use data_uri::{data_encode_image, guess_media_type};
pub use errors::{FetchError, InlineError};
pub use fetcher::{Content, Fetcher};
pub use orchestrator::{inline_document, inline_html, inline_to_file};
pub use processors::{replace_backgrounds, replace_css, replace_images, replace_javascript};
pub use types::{InliningError, InliningResult, PassReport, ResourceType};
