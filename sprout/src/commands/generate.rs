use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::load_manifest;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to sprout.toml (defaults to ./sprout.toml, or built-in defaults if absent)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory (overrides the manifest setting)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let (manifest, source) = load_manifest(self.config.as_deref());
        let output_dir = self.output.clone().unwrap_or_else(|| manifest.output.clone());

        let report = ops::generate(
            &manifest,
            source,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());

        match report.failure_count() {
            0 => Ok(()),
            n => Err(eyre::eyre!(
                "{} file{} could not be written",
                n,
                if n == 1 { "" } else { "s" }
            )),
        }
    }
}
