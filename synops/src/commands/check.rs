use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use synops_manifest::SynopsToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the manifest (defaults to ./synops.toml)
    #[arg(default_value = "synops.toml")]
    pub file: PathBuf,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let toml = SynopsToml::open(&self.file).unwrap_or_exit();
        let report = ops::check(toml.manifest(), toml.path());

        report.render(&mut TerminalOutput::new());

        if self.strict && !report.warnings.is_empty() {
            std::process::exit(1);
        }
        Ok(())
    }
}
