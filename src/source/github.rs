//! GitHub API client.
//!
//! Blocking reqwest client (no async runtime). Covers default-branch lookup,
//! branch zipball download, and release asset download for the upstream store.

use std::{
    fs,
    io::{Cursor, Read, Seek},
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use serde::Deserialize;
use tempfile::TempDir;

use super::{Checkout, SourceFetcher};
use crate::error::UnitError;

const API_BASE: &str = "https://api.github.com";

#[derive(Debug, Deserialize)]
struct RepoInfo {
    default_branch: String,
}

#[derive(Debug, Deserialize)]
struct Release {
    #[serde(default)]
    assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Deserialize)]
struct ReleaseAsset {
    name: String,
    url: String,
}

pub struct GithubFetcher {
    http: reqwest::blocking::Client,
    api_base: String,
    token: String,
}

impl std::fmt::Debug for GithubFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubFetcher")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl GithubFetcher {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_api_base(token, API_BASE)
    }

    /// Client talking to `api_base` instead of api.github.com (enterprise hosts, tests).
    pub fn with_api_base(token: impl Into<String>, api_base: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("i18n-dict/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(300))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Download the asset named `asset_name` from the latest release of `repo` into `dest`.
    ///
    /// Returns `Ok(false)` if the release has no such asset.
    pub fn download_release_asset(&self, repo: &str, asset_name: &str, dest: &Path) -> Result<bool> {
        let url = format!("{}/repos/{}/releases/latest", self.api_base, repo);
        let release: Release = self
            .get(&url, None)?
            .json()
            .with_context(|| format!("Failed to parse release metadata from {}", url))?;

        let Some(asset) = release.assets.into_iter().find(|a| a.name == asset_name) else {
            return Ok(false);
        };

        let bytes = self
            .get(&asset.url, Some("application/octet-stream"))?
            .bytes()
            .with_context(|| format!("Failed to download {}", asset.url))?;
        fs::write(dest, &bytes)
            .with_context(|| format!("Failed to write file: {}", dest.display()))?;
        Ok(true)
    }

    fn get(&self, url: &str, accept: Option<&str>) -> Result<reqwest::blocking::Response, UnitError> {
        let mut request = self
            .http
            .get(url)
            .header("Authorization", format!("token {}", self.token));
        if let Some(accept) = accept {
            request = request.header("Accept", accept);
        }

        let response = request
            .send()
            .map_err(|e| UnitError::Fetch(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UnitError::Fetch(format!("HTTP {} from {}", status.as_u16(), url)));
        }
        Ok(response)
    }
}

impl SourceFetcher for GithubFetcher {
    fn default_branch(&self, repo: &str) -> Result<String, UnitError> {
        let url = format!("{}/repos/{}", self.api_base, repo);
        let info: RepoInfo = self
            .get(&url, None)?
            .json()
            .map_err(|e| UnitError::Fetch(format!("invalid repository metadata: {}", e)))?;
        Ok(info.default_branch)
    }

    fn fetch(&self, repo: &str, branch: &str) -> Result<Checkout, UnitError> {
        let url = format!("{}/repos/{}/zipball/{}", self.api_base, repo, branch);
        tracing::info!(%url, "downloading repository archive");

        let bytes = self
            .get(&url, None)?
            .bytes()
            .map_err(|e| UnitError::Fetch(format!("download of {} failed: {}", url, e)))?;

        let temp = TempDir::new()
            .map_err(|e| UnitError::Fetch(format!("failed to create temp dir: {}", e)))?;
        let root = extract_single_root(Cursor::new(bytes), temp.path())?;
        tracing::debug!(root = %root.display(), "extracted repository archive");

        Ok(Checkout::owned(temp, root))
    }
}

/// Extract a zip archive into `dest` and return its single top-level directory.
///
/// GitHub zipballs wrap everything in one `<owner>-<repo>-<sha>/` directory.
/// Any other layout is a fetch error.
pub fn extract_single_root<R: Read + Seek>(reader: R, dest: &Path) -> Result<PathBuf, UnitError> {
    let mut archive = zip::ZipArchive::new(reader)
        .map_err(|e| UnitError::Fetch(format!("invalid archive: {}", e)))?;
    archive
        .extract(dest)
        .map_err(|e| UnitError::Fetch(format!("failed to extract archive: {}", e)))?;

    let entries = fs::read_dir(dest)
        .map_err(|e| UnitError::Fetch(format!("failed to read extracted archive: {}", e)))?;
    let dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();

    match <[PathBuf; 1]>::try_from(dirs) {
        Ok([root]) => Ok(root),
        Err(dirs) => Err(UnitError::Fetch(format!(
            "expected 1 top-level directory in archive, found {}",
            dirs.len()
        ))),
    }
}
