//! Configuration for resource inlining
//!
//! `InlineConfig` carries the few knobs the fetcher honours. Defaults match the
//! behaviour of the command-line tool, which takes no flags.

pub mod methods;
pub mod types;

pub use types::InlineConfig;
