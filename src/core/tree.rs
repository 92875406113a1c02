//! Read-only view of a repository snapshot.
//!
//! Path resolution only needs two things from a checkout: the file names in a
//! directory and the contents of a file. Abstracting them lets the resolution
//! policy run against an in-memory listing in tests.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};

pub trait SourceTree {
    /// File names (not paths) directly inside `dir`. Missing directories yield an empty list;
    /// other listing failures are logged and also yield an empty list.
    fn list_dir(&self, dir: &str) -> Vec<String>;

    /// Contents of the file at `path`, relative to the tree root.
    fn read_file(&self, path: &str) -> Result<String>;
}

/// Joins a candidate directory and a file name with `/`, ignoring stray slashes.
///
/// ```
/// use i18n_dict::core::tree::join_path;
///
/// assert_eq!(join_path("assets/x/lang/", "en_us.json"), "assets/x/lang/en_us.json");
/// assert_eq!(join_path("", "en_us.json"), "en_us.json");
/// ```
pub fn join_path(dir: &str, name: &str) -> String {
    let dir = normalize_dir(dir);
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

fn normalize_dir(dir: &str) -> &str {
    dir.trim_matches('/')
}

/// A tree backed by an extracted checkout on disk.
#[derive(Debug, Clone)]
pub struct FsTree {
    root: PathBuf,
}

impl FsTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceTree for FsTree {
    fn list_dir(&self, dir: &str) -> Vec<String> {
        let path = self.root.join(normalize_dir(dir));
        let entries = match fs::read_dir(&path) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to list directory");
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().to_str().map(String::from))
            .collect();
        names.sort();
        names
    }

    fn read_file(&self, path: &str) -> Result<String> {
        let full_path = self.root.join(path);
        fs::read_to_string(&full_path)
            .with_context(|| format!("Failed to read file: {}", full_path.display()))
    }
}

/// An in-memory tree keyed by `/`-separated relative paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    files: BTreeMap<String, String>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files
            .insert(path.trim_matches('/').to_string(), content.to_string());
        self
    }
}

impl SourceTree for MemoryTree {
    fn list_dir(&self, dir: &str) -> Vec<String> {
        let dir = normalize_dir(dir);
        self.files
            .keys()
            .filter_map(|path| {
                let (parent, name) = path.rsplit_once('/').unwrap_or(("", path.as_str()));
                (parent == dir).then(|| name.to_string())
            })
            .collect()
    }

    fn read_file(&self, path: &str) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("No such file: {}", path))
    }
}
