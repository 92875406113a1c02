//! Serialization of the release files.
//!
//! `Dict.json` and `Dict-Diff.json` are pretty-printed with 4-space indentation.
//! `Dict-Mini.json` is compact. Non-ASCII text is written unescaped. Empty
//! projections are not written at all.

use std::{fs, io, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::{DIFF_FILE_NAME, FULL_CORPUS_FILE_NAME, MINI_INDEX_FILE_NAME};
use crate::core::{Entry, projection::Projections};

/// Counts of what was written. `None` means the file was suppressed because it would be empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WrittenOutputs {
    pub full_entries: Option<usize>,
    pub mini_keys: Option<usize>,
}

/// Serialize with 4-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    String::from_utf8(buf).context("Serialized JSON is not valid UTF-8")
}

/// Write `Dict.json` and `Dict-Mini.json` into `out_dir`.
pub fn write_projections(projections: &Projections, out_dir: &Path) -> Result<WrittenOutputs> {
    let mut written = WrittenOutputs::default();

    if projections.full.is_empty() {
        tracing::warn!("{} is empty, not writing it", FULL_CORPUS_FILE_NAME);
    } else {
        write_file(
            &out_dir.join(FULL_CORPUS_FILE_NAME),
            &to_pretty_json(&projections.full)?,
        )?;
        tracing::info!(
            entries = projections.full.len(),
            "wrote {}",
            FULL_CORPUS_FILE_NAME
        );
        written.full_entries = Some(projections.full.len());
    }

    if projections.mini.is_empty() {
        tracing::warn!("{} is empty, not writing it", MINI_INDEX_FILE_NAME);
    } else {
        let text = serde_json::to_string(&projections.mini).context("Failed to serialize JSON")?;
        write_file(&out_dir.join(MINI_INDEX_FILE_NAME), &text)?;
        tracing::info!(
            keys = projections.mini.len(),
            "wrote {}",
            MINI_INDEX_FILE_NAME
        );
        written.mini_keys = Some(projections.mini.len());
    }

    Ok(written)
}

/// Write `Dict-Diff.json` into `out_dir`.
///
/// An empty diff writes nothing and removes the file left by an earlier run,
/// so the directory never carries entries this run did not touch.
pub fn write_diff(diff: &[Entry], out_dir: &Path) -> Result<Option<usize>> {
    let path = out_dir.join(DIFF_FILE_NAME);
    if diff.is_empty() {
        tracing::info!("no entries touched, not writing {}", DIFF_FILE_NAME);
        remove_stale(&path)?;
        return Ok(None);
    }
    write_file(&path, &to_pretty_json(diff)?)?;
    Ok(Some(diff.len()))
}

fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "removed stale diff from an earlier run");
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => {
            Err(err).with_context(|| format!("Failed to remove file: {}", path.display()))
        }
    }
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}
