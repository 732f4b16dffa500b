use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::load_manifest;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to sprout.toml (defaults to ./sprout.toml, or built-in defaults if absent)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let (manifest, source) = load_manifest(self.config.as_deref());
        ops::list(&manifest, source).render(&mut TerminalOutput::new());
        Ok(())
    }
}
