//! Markdown run report, published alongside the release files.

use std::fmt::Write;

use crate::config::{FULL_CORPUS_FILE_NAME, MINI_INDEX_FILE_NAME};
use crate::output::WrittenOutputs;
use crate::pipeline::{RunSummary, UnitStatus};

/// Everything the report needs besides the per-unit rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportContext<'a> {
    /// Repository the release is published to (`GITHUB_REPOSITORY`).
    pub publish_repo: Option<&'a str>,
    pub written: WrittenOutputs,
    pub store_entries: usize,
}

pub fn render_markdown(summary: &RunSummary, ctx: &ReportContext<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Dictionary update report");
    let _ = writeln!(out);
    if let Some(repo) = ctx.publish_repo {
        let _ = writeln!(out, "Release repository: `{}`", repo);
        let _ = writeln!(out);
    }

    let _ = writeln!(
        out,
        "- Entries touched this run: **{}**",
        summary.diff.len()
    );
    let _ = writeln!(out, "- Entries in store: {}", ctx.store_entries);
    let _ = writeln!(
        out,
        "- {}: {}",
        FULL_CORPUS_FILE_NAME,
        written_label(ctx.written.full_entries, "entries")
    );
    let _ = writeln!(
        out,
        "- {}: {}",
        MINI_INDEX_FILE_NAME,
        written_label(ctx.written.mini_keys, "keys")
    );
    let _ = writeln!(
        out,
        "- Sources: {} processed, {} failed",
        summary.units.len(),
        summary.failed_count()
    );
    let _ = writeln!(out);

    if summary.units.is_empty() {
        let _ = writeln!(out, "No sources configured.");
        return out;
    }

    let _ = writeln!(
        out,
        "| Repository | Branch | Version | Inserted | Updated | Skipped | Status |"
    );
    let _ = writeln!(out, "| --- | --- | --- | ---: | ---: | ---: | --- |");
    for unit in &summary.units {
        let status = match &unit.status {
            UnitStatus::Succeeded { .. } => "OK".to_string(),
            UnitStatus::Failed(err) => format!("FAILED ({}): {}", err.kind(), err),
        };
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} | {} |",
            escape_cell(&unit.repo),
            escape_cell(unit.branch.as_deref().unwrap_or("-")),
            escape_cell(unit.version.as_deref().unwrap_or("-")),
            unit.inserted(),
            unit.updated(),
            unit.skipped(),
            escape_cell(&status)
        );
    }

    out
}

fn written_label(count: Option<usize>, noun: &str) -> String {
    match count {
        Some(count) => format!("{} {}", count, noun),
        None => "not written (empty)".to_string(),
    }
}

/// Keep a value on one table row.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
