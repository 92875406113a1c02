use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::core::projection::RankedTranslation;
use crate::output::WrittenOutputs;
use crate::pipeline::RunSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Update(UpdateSummary),
    Build(BuildSummary),
    Lookup(LookupSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct UpdateSummary {
    pub run: RunSummary,
    pub written: WrittenOutputs,
    pub store_entries: usize,
    /// Entries written to `Dict-Diff.json`, `None` when the diff was empty.
    pub diff_entries: Option<usize>,
    pub report_path: PathBuf,
}

#[derive(Debug)]
pub struct BuildSummary {
    pub written: WrittenOutputs,
    pub store_entries: usize,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub query: String,
    pub translations: Vec<RankedTranslation>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    pub created: bool,
}

/// Result of running an i18n-dict command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, exit_status: ExitStatus) -> Self {
        Self {
            summary,
            exit_status,
        }
    }
}
