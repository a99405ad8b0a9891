use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use synops_codegen::Indent;
use synops_ir::EntityId;
use synops_manifest::{Format, SynopsToml};

use super::UnwrapOrExit;
use crate::ops;

#[derive(Args)]
pub struct RenderCommand {
    /// Path to the manifest (defaults to ./synops.toml)
    #[arg(default_value = "synops.toml")]
    pub file: PathBuf,

    /// Output format, overriding `render.format`
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Indentation width or `tab`, overriding `render.indent`
    #[arg(long)]
    pub indent: Option<Indent>,

    /// Exclude an entity and its children (repeatable)
    #[arg(long, value_name = "ID")]
    pub exclude: Vec<String>,

    /// Render only the declaration of an entity (repeatable)
    #[arg(long = "declaration", value_name = "ID")]
    pub declarations: Vec<String>,

    /// Exclude every entity of a kind, e.g. `macro` (repeatable)
    #[arg(long = "exclude-kind", value_name = "KIND")]
    pub exclude_kinds: Vec<String>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let toml = SynopsToml::open(&self.file).unwrap_or_exit();
        let manifest = toml.manifest();

        let mut options = manifest.render.clone();
        options.merge(
            self.format,
            self.indent.map(ops::indent_setting),
            self.exclude.iter().map(EntityId::new),
            self.declarations.iter().map(EntityId::new),
            self.exclude_kinds.iter().cloned(),
        );
        let rendered = ops::render(manifest, &options)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &rendered)
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                tracing::info!(path = %path.display(), "wrote synopsis");
            }
            None => print!("{rendered}"),
        }
        Ok(())
    }
}
