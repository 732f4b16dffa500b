use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sprout_manifest::{MANIFEST_FILE, Manifest};

use crate::{
    ops::{self, InitOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the manifest
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Output directory to record in the manifest
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing manifest
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let mut manifest = Manifest::default();
        if let Some(output) = &self.output {
            manifest = manifest.with_output(output);
        }

        let report = ops::init(
            &manifest,
            InitOptions {
                path: &self.config,
                force: self.force,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
