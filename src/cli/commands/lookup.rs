use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, LookupSummary};
use crate::cli::{args::LookupArgs, exit_status::ExitStatus};
use crate::core::{projection::rank_translations, store::Store};

pub fn lookup(args: LookupArgs) -> Result<CommandResult> {
    let store_path = &args.common.store;
    if !store_path.is_file() {
        bail!("Store not found: {}", store_path.display());
    }

    let store = Store::open(store_path)?;
    let matches = store
        .find_by_origin(&args.text)
        .with_context(|| format!("Failed to query store: {}", store_path.display()))?;
    tracing::debug!(matches = matches.len(), "queried origin index");

    let translations = rank_translations(&matches);
    let exit_status = ExitStatus::success_if(!translations.is_empty());

    Ok(CommandResult::new(
        CommandSummary::Lookup(LookupSummary {
            query: args.text,
            translations,
        }),
        exit_status,
    ))
}
