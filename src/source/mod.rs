//! Repository snapshot retrieval.
//!
//! - `github`: downloads branch zipballs through the GitHub API
//! - `local`: reads already checked-out repositories from a directory

pub mod github;
pub mod local;

use std::path::PathBuf;

use tempfile::TempDir;

use crate::core::tree::FsTree;
use crate::error::UnitError;

pub use github::GithubFetcher;
pub use local::LocalFetcher;

/// Supplies repository snapshots to the pipeline.
pub trait SourceFetcher {
    /// Branch used when a unit does not name one.
    fn default_branch(&self, repo: &str) -> Result<String, UnitError>;

    /// Retrieve `repo` at `branch`.
    fn fetch(&self, repo: &str, branch: &str) -> Result<Checkout, UnitError>;
}

/// A retrieved repository snapshot.
///
/// Extracted archives live in a temporary directory owned by the checkout and
/// are removed when it is dropped, whether or not the unit succeeded.
#[derive(Debug)]
pub struct Checkout {
    tree: FsTree,
    _temp: Option<TempDir>,
}

impl Checkout {
    /// A checkout pointing at an existing directory. Nothing is cleaned up.
    pub fn borrowed(root: impl Into<PathBuf>) -> Self {
        Self {
            tree: FsTree::new(root),
            _temp: None,
        }
    }

    /// A checkout whose files live under `temp` and are removed on drop.
    pub fn owned(temp: TempDir, root: impl Into<PathBuf>) -> Self {
        Self {
            tree: FsTree::new(root),
            _temp: Some(temp),
        }
    }

    pub fn tree(&self) -> &FsTree {
        &self.tree
    }
}
