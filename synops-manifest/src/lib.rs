//! Manifest loading for synops.
//!
//! A manifest is a TOML file describing one source file as a tree of
//! entities, plus the options used to render it. Loading assigns ids,
//! validates the structure of the tree and reports references to entities
//! the manifest does not declare.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod options;

use std::path::Path;

pub use error::{Error, Result, SourceContext};
pub use manifest::{Manifest, ParseContext, SynopsToml, Warning, parse_manifest};
pub use options::{Format, IndentSetting, KIND_NAMES, RenderOptions};

/// Parse a manifest file from the given path
pub fn parse_file(path: impl AsRef<Path>) -> Result<Manifest> {
    Manifest::from_file(path)
}

/// Parse a manifest from a string (uses "synops.toml" as default filename)
pub fn parse_str(content: &str) -> Result<Manifest> {
    parse_manifest(content, "synops.toml")
}

/// Parse a manifest from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Manifest> {
    parse_manifest(content, filename)
}
