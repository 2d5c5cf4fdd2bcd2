pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{is_blacklisted, is_remote, resolve_path};
