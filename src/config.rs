use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{UnitScope, format::version_from_branch};

pub const CONFIG_FILE_NAME: &str = "source_mods.json";

pub const STORE_FILE_NAME: &str = "Dict-Sqlite.db";
pub const FULL_CORPUS_FILE_NAME: &str = "Dict.json";
pub const MINI_INDEX_FILE_NAME: &str = "Dict-Mini.json";
pub const DIFF_FILE_NAME: &str = "Dict-Diff.json";
pub const REPORT_FILE_NAME: &str = "Report.md";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_origin_locale")]
    pub origin_locale: String,
    #[serde(default = "default_target_locale")]
    pub target_locale: String,
    /// Repository whose latest release provides the starting store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_store: Option<String>,
    #[serde(default)]
    pub mods: Vec<SourceUnit>,
}

/// One repository mined for translation pairs.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceUnit {
    /// `owner/name` on GitHub.
    pub repo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, alias = "lang_paths")]
    pub lang_paths: Vec<String>,
    /// Single-path spelling kept for older config files.
    #[serde(default, alias = "lang_path", skip_serializing_if = "Option::is_none")]
    pub lang_path: Option<String>,
    #[serde(default, alias = "merge_paths")]
    pub merge_paths: bool,
    pub modid: String,
    #[serde(deserialize_with = "string_or_number")]
    pub curseforge: String,
}

fn default_origin_locale() -> String {
    "en_us".to_string()
}

fn default_target_locale() -> String {
    "zh_cn".to_string()
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin_locale: default_origin_locale(),
            target_locale: default_target_locale(),
            upstream_store: Some("CFPATools/i18n-dict".to_string()),
            mods: vec![SourceUnit {
                repo: "owner/example-mod".to_string(),
                branch: Some("1.20".to_string()),
                version: None,
                lang_paths: vec!["src/main/resources/assets/examplemod/lang".to_string()],
                lang_path: None,
                merge_paths: false,
                modid: "examplemod".to_string(),
                curseforge: "000000".to_string(),
            }],
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Units without candidate paths are accepted here. They fail on their
    /// own at run time so that the remaining units still get processed.
    pub fn validate(&self) -> Result<()> {
        if self.origin_locale.trim().is_empty() || self.target_locale.trim().is_empty() {
            bail!("'originLocale' and 'targetLocale' must not be empty");
        }

        for (index, unit) in self.mods.iter().enumerate() {
            if unit.repo.trim().is_empty() {
                bail!("mods[{}]: 'repo' must not be empty", index);
            }
            if unit.modid.trim().is_empty() {
                bail!("mods[{}] ({}): 'modid' must not be empty", index, unit.repo);
            }
        }

        Ok(())
    }
}

impl SourceUnit {
    /// Candidate directories in configuration order.
    pub fn candidate_paths(&self) -> Vec<String> {
        let mut paths = self.lang_paths.clone();
        if let Some(path) = &self.lang_path
            && !paths.contains(path)
        {
            paths.push(path.clone());
        }
        paths
    }

    /// Explicit version, else derived from the branch name.
    pub fn resolve_version(&self, branch: &str) -> String {
        match &self.version {
            Some(version) if !version.trim().is_empty() => version.clone(),
            _ => version_from_branch(branch),
        }
    }

    pub fn scope(&self, format_version: &str) -> UnitScope {
        UnitScope::new(&self.modid, format_version, &self.curseforge)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Load and validate a configuration file.
///
/// `.yml` / `.yaml` files are read as YAML, anything else as JSON. Both accept
/// the same fields, including the snake_case spellings.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = if is_yaml(path) {
        serde_yml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?
    };
    config.validate()?;
    Ok(config)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
}
