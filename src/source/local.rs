use std::path::PathBuf;

use super::{Checkout, SourceFetcher};
use crate::error::UnitError;

/// Branch reported for local checkouts when a unit names none.
pub const LOCAL_BRANCH: &str = "local";

/// Reads repositories from `<root>/<owner>/<name>/`.
#[derive(Debug, Clone)]
pub struct LocalFetcher {
    root: PathBuf,
}

impl LocalFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceFetcher for LocalFetcher {
    fn default_branch(&self, _repo: &str) -> Result<String, UnitError> {
        Ok(LOCAL_BRANCH.to_string())
    }

    fn fetch(&self, repo: &str, _branch: &str) -> Result<Checkout, UnitError> {
        let dir = self.root.join(repo);
        if !dir.is_dir() {
            return Err(UnitError::Fetch(format!(
                "repository directory not found: {}",
                dir.display()
            )));
        }
        Ok(Checkout::borrowed(dir))
    }
}
