//! Candidate path resolution.
//!
//! A source unit lists one or more directories that may hold its language
//! files. Two policies pick the files:
//!
//! - **first found**: for each language independently, the first candidate
//!   directory containing that language's file wins. Origin and translation
//!   may therefore come from different directories.
//! - **merge**: every candidate directory contributes whichever files it has.
//!   Keys are merged per language, and later directories override earlier ones.

use crate::core::{
    LanguagePair, RawMessages,
    format::SourceFormat,
    parsers::parse_messages,
    tree::{SourceTree, join_path},
};
use crate::error::UnitError;
use crate::utils::find_ignore_case;

/// Expected file names for the two languages of a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageFiles {
    pub format: SourceFormat,
    pub origin: String,
    pub target: String,
}

impl LanguageFiles {
    pub fn new(format: SourceFormat, origin_locale: &str, target_locale: &str) -> Self {
        Self {
            format,
            origin: format.file_name(origin_locale),
            target: format.file_name(target_locale),
        }
    }
}

/// Resolve and parse the origin/translated mappings for one unit.
pub fn resolve_language_pair(
    tree: &dyn SourceTree,
    paths: &[String],
    merge_paths: bool,
    files: &LanguageFiles,
) -> Result<LanguagePair, UnitError> {
    if paths.is_empty() {
        return Err(UnitError::Configuration(
            "no candidate language paths configured".to_string(),
        ));
    }

    if merge_paths {
        resolve_merged(tree, paths, files)
    } else {
        resolve_first_found(tree, paths, files)
    }
}

fn resolve_first_found(
    tree: &dyn SourceTree,
    paths: &[String],
    files: &LanguageFiles,
) -> Result<LanguagePair, UnitError> {
    let mut origin: Option<RawMessages> = None;
    let mut translated: Option<RawMessages> = None;

    for dir in paths {
        if origin.is_some() && translated.is_some() {
            break;
        }
        let listing = tree.list_dir(dir);

        if origin.is_none()
            && let Some(name) = find_ignore_case(&listing, &files.origin)
        {
            tracing::debug!(path = %dir, file = name, "found origin language file");
            origin = Some(load(tree, files.format, &join_path(dir, name))?);
        }
        if translated.is_none()
            && let Some(name) = find_ignore_case(&listing, &files.target)
        {
            tracing::debug!(path = %dir, file = name, "found target language file");
            translated = Some(load(tree, files.format, &join_path(dir, name))?);
        }
    }

    match (origin, translated) {
        (Some(origin), Some(translated)) => Ok(LanguagePair::new(origin, translated)),
        (origin, translated) => Err(missing_files(
            files,
            paths,
            origin.is_none(),
            translated.is_none(),
        )),
    }
}

fn resolve_merged(
    tree: &dyn SourceTree,
    paths: &[String],
    files: &LanguageFiles,
) -> Result<LanguagePair, UnitError> {
    let mut origin = RawMessages::new();
    let mut translated = RawMessages::new();

    for dir in paths {
        let listing = tree.list_dir(dir);

        if let Some(name) = find_ignore_case(&listing, &files.origin) {
            let messages = load(tree, files.format, &join_path(dir, name))?;
            tracing::debug!(path = %dir, keys = messages.len(), "merging origin language file");
            origin.extend(messages);
        }
        if let Some(name) = find_ignore_case(&listing, &files.target) {
            let messages = load(tree, files.format, &join_path(dir, name))?;
            tracing::debug!(path = %dir, keys = messages.len(), "merging target language file");
            translated.extend(messages);
        }
    }

    if origin.is_empty() || translated.is_empty() {
        return Err(missing_files(
            files,
            paths,
            origin.is_empty(),
            translated.is_empty(),
        ));
    }

    Ok(LanguagePair::new(origin, translated))
}

fn load(tree: &dyn SourceTree, format: SourceFormat, path: &str) -> Result<RawMessages, UnitError> {
    let content = tree.read_file(path)?;
    Ok(parse_messages(format, &content, path)?)
}

fn missing_files(
    files: &LanguageFiles,
    paths: &[String],
    origin_missing: bool,
    target_missing: bool,
) -> UnitError {
    let mut missing = Vec::new();
    if origin_missing {
        missing.push(files.origin.clone());
    }
    if target_missing {
        missing.push(files.target.clone());
    }
    UnitError::MissingLanguageFiles {
        missing,
        paths: paths.to_vec(),
    }
}
