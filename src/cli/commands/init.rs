use std::fs;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::cli::{args::InitArgs, exit_status::ExitStatus};
use crate::config::default_config_json;

pub fn init(args: InitArgs) -> Result<CommandResult> {
    let path = args.config;

    let created = !path.exists();
    if created {
        fs::write(&path, default_config_json()?)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }

    Ok(CommandResult::new(
        CommandSummary::Init(InitSummary { path, created }),
        ExitStatus::success_if(created),
    ))
}
