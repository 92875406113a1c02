//! Console output for command results.
//!
//! Logs go to stderr through `tracing`. This module prints the human-facing
//! summary to stdout. Kept apart from the commands so the library can be used
//! without any console output.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    BuildSummary, CommandResult, CommandSummary, InitSummary, LookupSummary, UpdateSummary,
};
use crate::config::{DIFF_FILE_NAME, FULL_CORPUS_FILE_NAME, MINI_INDEX_FILE_NAME};
use crate::output::WrittenOutputs;
use crate::pipeline::UnitStatus;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Update(summary) => print_update(summary, writer),
        CommandSummary::Build(summary) => print_build(summary, writer),
        CommandSummary::Lookup(summary) => print_lookup(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_update<W: Write>(summary: &UpdateSummary, writer: &mut W) {
    for unit in &summary.run.units {
        match &unit.status {
            UnitStatus::Succeeded {
                inserted,
                updated,
                skipped,
            } => {
                let _ = writeln!(
                    writer,
                    "{} {} {}",
                    SUCCESS_MARK.green(),
                    unit.repo.bold(),
                    format!(
                        "(+{} inserted, ~{} updated, {} skipped)",
                        inserted, updated, skipped
                    )
                    .dimmed()
                );
            }
            UnitStatus::Failed(err) => {
                let _ = writeln!(
                    writer,
                    "{} {} {}: {}",
                    FAILURE_MARK.red(),
                    unit.repo.bold(),
                    err.kind().red(),
                    err
                );
            }
        }
    }

    let failed = summary.run.failed_count();
    let processed = summary.run.units.len();
    let _ = writeln!(writer);
    if failed == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Processed {} {}, {} {} touched",
                processed,
                plural(processed, "source", "sources"),
                summary.run.diff.len(),
                plural(summary.run.diff.len(), "entry", "entries")
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.yellow(),
            format!(
                "Processed {} {} ({} failed), {} {} touched",
                processed,
                plural(processed, "source", "sources"),
                failed,
                summary.run.diff.len(),
                plural(summary.run.diff.len(), "entry", "entries")
            )
            .yellow()
        );
    }

    print_written(&summary.written, summary.store_entries, writer);
    if let Some(count) = summary.diff_entries {
        let _ = writeln!(writer, "  - {}: {} entries", DIFF_FILE_NAME, count);
    }
    let _ = writeln!(writer, "  - report: {}", summary.report_path.display());
}

fn print_build<W: Write>(summary: &BuildSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Built release files from {} store {}",
            summary.store_entries,
            plural(summary.store_entries, "entry", "entries")
        )
        .green()
    );
    print_written(&summary.written, summary.store_entries, writer);
}

fn print_written<W: Write>(written: &WrittenOutputs, store_entries: usize, writer: &mut W) {
    let _ = writeln!(writer, "  - store: {} entries", store_entries);
    match written.full_entries {
        Some(count) => {
            let _ = writeln!(writer, "  - {}: {} entries", FULL_CORPUS_FILE_NAME, count);
        }
        None => {
            let _ = writeln!(
                writer,
                "  - {}: {}",
                FULL_CORPUS_FILE_NAME,
                "skipped (empty)".yellow()
            );
        }
    }
    match written.mini_keys {
        Some(count) => {
            let _ = writeln!(writer, "  - {}: {} keys", MINI_INDEX_FILE_NAME, count);
        }
        None => {
            let _ = writeln!(
                writer,
                "  - {}: {}",
                MINI_INDEX_FILE_NAME,
                "skipped (empty)".yellow()
            );
        }
    }
}

fn print_lookup<W: Write>(summary: &LookupSummary, writer: &mut W) {
    if summary.translations.is_empty() {
        let _ = writeln!(
            writer,
            "{} No translations found for \"{}\"",
            FAILURE_MARK.red(),
            summary.query
        );
        return;
    }

    let _ = writeln!(writer, "{}", summary.query.bold());
    for ranked in &summary.translations {
        let _ = writeln!(
            writer,
            "  {} {}",
            ranked.text,
            format!("({})", ranked.count).dimmed()
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.path.display()).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} already exists",
            FAILURE_MARK.red(),
            summary.path.display()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
