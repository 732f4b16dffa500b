use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::load_manifest;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to sprout.toml (defaults to ./sprout.toml, or built-in defaults if absent)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        // Parse errors exit here with a diagnostic
        let (manifest, source) = load_manifest(self.config.as_deref());
        ops::check(&manifest, source).render(&mut TerminalOutput::new());
        Ok(())
    }
}
