//! Test utilities shared by the inliner integration tests

use std::path::Path;

use kodegen_tools_inliner::inliner::dom::{parse_document, select_all};
use kodegen_tools_inliner::{Fetcher, InlineConfig};
use kuchiki::NodeRef;
use tempfile::TempDir;

/// Minimal PNG (1x1 transparent pixel)
#[allow(dead_code)]
pub const PNG_BYTES: [u8; 67] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// A temporary site on disk: `index.html` plus whatever files the test writes
#[allow(dead_code)]
pub struct LocalSite {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl LocalSite {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Write `contents` to `name` (relative to the site root), creating folders
    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> &Self {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture dir");
        }
        std::fs::write(path, contents).expect("write fixture");
        self
    }

    /// Address of a file in the site, usable as a document base
    pub fn address(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().into_owned()
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

#[allow(dead_code)]
pub fn fetcher() -> Fetcher {
    Fetcher::new(InlineConfig::default()).expect("build fetcher")
}

/// Parse `body` wrapped in a minimal page
#[allow(dead_code)]
pub fn page(body: &str) -> NodeRef {
    parse_document(&format!(
        "<!DOCTYPE html><html><head><title>Test</title></head><body>{body}</body></html>"
    ))
}

/// Value of `attr` on the first element matching `selector`
#[allow(dead_code)]
pub fn attr_of(document: &NodeRef, selector: &str, attr: &str) -> Option<String> {
    select_all(document, selector)
        .expect("valid selector")
        .first()
        .and_then(|element| element.attributes.borrow().get(attr).map(ToString::to_string))
}
