mod check;
mod completions;
mod generate;
mod init;
mod list;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use list::ListCommand;
use sprout_manifest::{MANIFEST_FILE, Manifest};

use crate::reports::ManifestSource;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for sprout_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load the manifest for a command.
///
/// An explicit `--config` must exist. Without one, `./sprout.toml` is used
/// when present and the built-in reference configuration otherwise.
pub(crate) fn load_manifest(config: Option<&Path>) -> (Manifest, ManifestSource) {
    match resolve_config(config) {
        Some(path) => {
            let manifest = Manifest::from_file(&path).unwrap_or_exit();
            (manifest, ManifestSource::File(path))
        }
        None => (Manifest::default(), ManifestSource::Builtin),
    }
}

fn resolve_config(config: Option<&Path>) -> Option<PathBuf> {
    match config {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(MANIFEST_FILE);
            default.is_file().then_some(default)
        }
    }
}

#[derive(Parser)]
#[command(name = "sprout")]
#[command(version)]
#[command(about = "Scaffold placeholder React component files")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create any missing files listed in sprout.toml
    #[command(visible_alias = "gen")]
    Generate(GenerateCommand),

    /// Write a sprout.toml with the default file list
    Init(InitCommand),

    /// List configured files and their component names
    List(ListCommand),

    /// Validate sprout.toml without writing files
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
