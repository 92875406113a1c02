use anyhow::{Context, Result, bail};

use super::{BuildSummary, CommandResult, CommandSummary};
use crate::cli::{args::BuildArgs, exit_status::ExitStatus};
use crate::core::{projection::build_projections, store::Store};
use crate::output::write_projections;

/// Regenerate `Dict.json` and `Dict-Mini.json` from an existing store.
pub fn build(args: BuildArgs) -> Result<CommandResult> {
    let store_path = &args.common.store;
    if !store_path.is_file() {
        bail!("Store not found: {}", store_path.display());
    }

    let store = Store::open(store_path)?;
    let entries = store
        .all_entries()
        .with_context(|| format!("Failed to read store: {}", store_path.display()))?;
    tracing::info!(entries = entries.len(), "loaded store");

    let written = write_projections(&build_projections(&entries), &args.out_dir)?;

    Ok(CommandResult::new(
        CommandSummary::Build(BuildSummary {
            written,
            store_entries: entries.len(),
        }),
        ExitStatus::Success,
    ))
}
