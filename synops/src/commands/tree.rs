use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use synops_manifest::SynopsToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TreeCommand {
    /// Path to the manifest (defaults to ./synops.toml)
    #[arg(default_value = "synops.toml")]
    pub file: PathBuf,

    /// Print the lowered entity tree as JSON
    #[arg(long)]
    pub json: bool,
}

impl TreeCommand {
    pub fn run(&self) -> Result<()> {
        let toml = SynopsToml::open(&self.file).unwrap_or_exit();
        let manifest = toml.manifest();

        if self.json {
            let json = serde_json::to_string_pretty(&manifest.file)
                .wrap_err("Failed to serialize entity tree")?;
            println!("{json}");
            return Ok(());
        }

        ops::tree(manifest).render(&mut TerminalOutput::new());
        Ok(())
    }
}
