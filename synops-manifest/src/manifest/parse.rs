//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, RawManifest, Warning, lower::Lowering, references, validate::ParseContext};
use crate::{Error, KIND_NAMES, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "synops.toml")
    }
}

impl Manifest {
    /// Parse a manifest file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a manifest from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawManifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    let ctx = ParseContext::new(content, filename);
    for kind in &raw.render.exclude_kinds {
        if !KIND_NAMES.contains(&kind.as_str()) {
            let span = content
                .find(&format!("\"{kind}\""))
                .map(|pos| (pos + 1, kind.len()).into());
            return Err(source_ctx.validation_error(format!("unknown entity kind '{kind}'"), span));
        }
    }

    let mut lowering = Lowering::new(&ctx);
    let file = lowering.lower_file(&raw.file)?;
    let ids = lowering.into_ids();

    let mut warnings = references::unresolved(&file, &ids);
    for (option, list) in [
        ("exclude", &raw.render.exclude),
        ("declarations", &raw.render.declarations),
    ] {
        warnings.extend(
            list.iter()
                .filter(|id| !ids.contains(*id))
                .map(|id| Warning::UnknownId {
                    option,
                    id: id.clone(),
                }),
        );
    }
    for warning in &warnings {
        tracing::warn!(file = filename, "{warning}");
    }
    tracing::debug!(file = filename, entities = ids.len(), "loaded manifest");

    Ok(Manifest {
        render: raw.render,
        file,
        warnings,
    })
}
