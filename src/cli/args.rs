//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `update`: reconcile every configured source into the store and rebuild the release files
//! - `build`: rebuild `Dict.json` / `Dict-Mini.json` from an existing store
//! - `lookup`: show the ranked translations of an origin text
//! - `init`: write a starter `source_mods.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::{CONFIG_FILE_NAME, STORE_FILE_NAME};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Update(cmd)) => cmd.common.verbose,
            Some(Command::Build(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

/// Common arguments shared by commands that touch the store.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Path of the SQLite dictionary store
    #[arg(long, default_value = STORE_FILE_NAME)]
    pub store: PathBuf,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Source configuration file
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Directory receiving Dict.json, Dict-Mini.json, Dict-Diff.json and Report.md
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Read repositories from <DIR>/<owner>/<name> instead of GitHub
    #[arg(long, value_name = "DIR")]
    pub local: Option<PathBuf>,

    /// GitHub API token (required unless --local is given)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository the release is published to (required unless --local is given)
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory receiving Dict.json and Dict-Mini.json
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Origin text to look up (exact match)
    pub text: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the configuration file
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch every configured source, update the store and rebuild the release files
    Update(UpdateArgs),
    /// Rebuild Dict.json and Dict-Mini.json from an existing store
    Build(BuildArgs),
    /// Show the translations recorded for an origin text
    Lookup(LookupArgs),
    /// Initialize a new source_mods.json configuration file
    Init(InitArgs),
}
