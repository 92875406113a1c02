use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, UpdateSummary};
use crate::cli::{args::UpdateArgs, exit_status::ExitStatus};
use crate::config::{Config, REPORT_FILE_NAME, STORE_FILE_NAME, load_config};
use crate::core::{projection::build_projections, store::Store};
use crate::output::{write_diff, write_file, write_projections};
use crate::pipeline::run_units;
use crate::report::{ReportContext, render_markdown};
use crate::source::{GithubFetcher, LocalFetcher, SourceFetcher};

/// Where repository snapshots come from for this run.
enum Source {
    Local(LocalFetcher),
    Github(GithubFetcher),
}

impl Source {
    /// Pick the source before any unit runs. GitHub needs both a token and
    /// the release repository.
    fn from_args(args: &UpdateArgs) -> Result<Self> {
        if let Some(root) = &args.local {
            tracing::info!(root = %root.display(), "reading repositories from local directory");
            return Ok(Self::Local(LocalFetcher::new(root)));
        }

        let Some(token) = args.token.as_deref().filter(|t| !t.trim().is_empty()) else {
            bail!("GITHUB_TOKEN is not set (pass --token, or --local to read repositories from disk)");
        };
        if args
            .repository
            .as_deref()
            .is_none_or(|repo| repo.trim().is_empty())
        {
            bail!("GITHUB_REPOSITORY is not set (pass --repository, or --local to read repositories from disk)");
        }

        Ok(Self::Github(GithubFetcher::new(token)?))
    }

    fn fetcher(&self) -> &dyn SourceFetcher {
        match self {
            Self::Local(fetcher) => fetcher,
            Self::Github(fetcher) => fetcher,
        }
    }
}

pub fn update(args: UpdateArgs) -> Result<CommandResult> {
    let config = load_config(&args.config)?;
    tracing::info!(
        config = %args.config.display(),
        units = config.mods.len(),
        "loaded configuration"
    );

    let source = Source::from_args(&args)?;

    let store_path = &args.common.store;
    if let Some(parent) = store_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    if let Source::Github(github) = &source {
        retrieve_upstream_store(github, &config, store_path);
    }
    let mut store = Store::open(store_path)?;

    let run = run_units(&config, &mut store, source.fetcher());

    let entries = store
        .all_entries()
        .with_context(|| format!("Failed to read store: {}", store_path.display()))?;
    let projections = build_projections(&entries);

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create directory: {}", args.out_dir.display()))?;
    let written = write_projections(&projections, &args.out_dir)?;
    let diff_entries = write_diff(&run.diff, &args.out_dir)?;

    let report = render_markdown(
        &run,
        &ReportContext {
            publish_repo: args.repository.as_deref(),
            written,
            store_entries: entries.len(),
        },
    );
    let report_path = args.out_dir.join(REPORT_FILE_NAME);
    write_file(&report_path, &report)?;

    Ok(CommandResult::new(
        CommandSummary::Update(UpdateSummary {
            run,
            written,
            store_entries: entries.len(),
            diff_entries,
            report_path,
        }),
        ExitStatus::Success,
    ))
}

/// Seed a missing store from the latest release of `upstreamStore`.
///
/// Failures only warn. A fresh store is created afterwards either way.
fn retrieve_upstream_store(github: &GithubFetcher, config: &Config, store_path: &Path) {
    let Some(upstream) = config.upstream_store.as_deref() else {
        return;
    };
    if store_path.exists() {
        tracing::debug!(path = %store_path.display(), "using existing store");
        return;
    }

    let part = partial_path(store_path);
    match github.download_release_asset(upstream, STORE_FILE_NAME, &part) {
        Ok(true) => match fs::rename(&part, store_path) {
            Ok(()) => tracing::info!(%upstream, "retrieved store from latest release"),
            Err(err) => {
                tracing::warn!(error = %err, "failed to move downloaded store into place");
                let _ = fs::remove_file(&part);
            }
        },
        Ok(false) => {
            tracing::warn!(%upstream, "latest release has no {} asset, starting a fresh store", STORE_FILE_NAME);
        }
        Err(err) => {
            tracing::warn!(%upstream, error = %format!("{:#}", err), "failed to retrieve store, starting a fresh store");
            let _ = fs::remove_file(&part);
        }
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}
