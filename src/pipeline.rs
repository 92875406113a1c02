//! Sequential processing of every configured source unit.
//!
//! Each unit is resolved, fetched, parsed and reconciled in configuration
//! order. A unit's failure is logged and recorded in its report row. It never
//! stops the remaining units.

use crate::config::{Config, SourceUnit};
use crate::core::{
    Entry,
    format::SourceFormat,
    reconcile::{ReconcileOutcome, reconcile_unit},
    resolve::{LanguageFiles, resolve_language_pair},
    store::Store,
};
use crate::error::UnitError;
use crate::source::SourceFetcher;

/// Outcome of one source unit.
#[derive(Debug)]
pub struct UnitReport {
    pub repo: String,
    /// Resolved branch, if resolution got that far.
    pub branch: Option<String>,
    /// Resolved format version, if resolution got that far.
    pub version: Option<String>,
    pub status: UnitStatus,
}

#[derive(Debug)]
pub enum UnitStatus {
    Succeeded {
        inserted: usize,
        updated: usize,
        skipped: usize,
    },
    Failed(UnitError),
}

impl UnitReport {
    pub fn inserted(&self) -> usize {
        match self.status {
            UnitStatus::Succeeded { inserted, .. } => inserted,
            UnitStatus::Failed(_) => 0,
        }
    }

    pub fn updated(&self) -> usize {
        match self.status {
            UnitStatus::Succeeded { updated, .. } => updated,
            UnitStatus::Failed(_) => 0,
        }
    }

    pub fn skipped(&self) -> usize {
        match self.status {
            UnitStatus::Succeeded { skipped, .. } => skipped,
            UnitStatus::Failed(_) => 0,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, UnitStatus::Succeeded { .. })
    }
}

/// Result of reconciling every unit.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub units: Vec<UnitReport>,
    /// Entries inserted or updated during this run.
    pub diff: Vec<Entry>,
}

impl RunSummary {
    pub fn failed_count(&self) -> usize {
        self.units.iter().filter(|u| !u.is_success()).count()
    }
}

/// Reconcile every unit of `config` into `store`.
pub fn run_units(config: &Config, store: &mut Store, fetcher: &dyn SourceFetcher) -> RunSummary {
    let mut summary = RunSummary::default();

    for unit in &config.mods {
        let _span = tracing::info_span!("unit", repo = %unit.repo).entered();
        let mut resolved = Resolved::default();

        let status = match process_unit(config, unit, store, fetcher, &mut resolved) {
            Ok(outcome) => {
                tracing::info!(
                    inserted = outcome.inserted,
                    updated = outcome.updated,
                    skipped = outcome.skipped,
                    "unit reconciled"
                );
                summary.diff.extend(outcome.touched);
                UnitStatus::Succeeded {
                    inserted: outcome.inserted,
                    updated: outcome.updated,
                    skipped: outcome.skipped,
                }
            }
            Err(err) => {
                tracing::error!(kind = err.kind(), error = %err, "unit failed");
                UnitStatus::Failed(err)
            }
        };

        summary.units.push(UnitReport {
            repo: unit.repo.clone(),
            branch: resolved.branch,
            version: resolved.version,
            status,
        });
    }

    summary
}

/// Branch and version as far as resolution got before success or failure.
#[derive(Debug, Default)]
struct Resolved {
    branch: Option<String>,
    version: Option<String>,
}

fn process_unit(
    config: &Config,
    unit: &SourceUnit,
    store: &mut Store,
    fetcher: &dyn SourceFetcher,
    resolved: &mut Resolved,
) -> Result<ReconcileOutcome, UnitError> {
    let paths = unit.candidate_paths();
    if paths.is_empty() {
        return Err(UnitError::Configuration(format!(
            "no 'langPaths' configured for {}",
            unit.repo
        )));
    }

    let branch = match &unit.branch {
        Some(branch) if !branch.trim().is_empty() => branch.clone(),
        _ => fetcher.default_branch(&unit.repo)?,
    };
    resolved.branch = Some(branch.clone());

    let version = unit.resolve_version(&branch);
    resolved.version = Some(version.clone());

    let format = SourceFormat::for_version(&version);
    tracing::info!(%branch, %version, %format, "processing unit");

    let files = LanguageFiles::new(format, &config.origin_locale, &config.target_locale);
    let checkout = fetcher.fetch(&unit.repo, &branch)?;
    let pair = resolve_language_pair(checkout.tree(), &paths, unit.merge_paths, &files)?;
    tracing::debug!(
        origin_keys = pair.origin.len(),
        translated_keys = pair.translated.len(),
        common_keys = pair.common_keys().count(),
        "resolved language files"
    );

    reconcile_unit(store, &unit.scope(&version), &pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Checkout, LocalFetcher};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn unit(repo: &str, paths: &[&str]) -> SourceUnit {
        SourceUnit {
            repo: repo.to_string(),
            branch: Some("1.20".to_string()),
            version: None,
            lang_paths: paths.iter().map(|s| s.to_string()).collect(),
            lang_path: None,
            merge_paths: false,
            modid: repo.rsplit('/').next().unwrap_or(repo).to_string(),
            curseforge: "1".to_string(),
        }
    }

    fn config(mods: Vec<SourceUnit>) -> Config {
        Config {
            mods,
            upstream_store: None,
            ..Config::default()
        }
    }

    fn write(root: &TempDir, path: &str, content: &str) {
        let path = root.path().join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_failures_do_not_stop_other_units() {
        let root = tempdir().unwrap();
        write(&root, "o/good/lang/en_us.json", r#"{"a": "Hello"}"#);
        write(&root, "o/good/lang/zh_cn.json", r#"{"a": "你好"}"#);
        write(&root, "o/half/lang/en_us.json", r#"{"a": "Hello"}"#);

        let config = config(vec![
            unit("o/missing", &["lang"]),
            unit("o/nopaths", &[]),
            unit("o/half", &["lang"]),
            unit("o/good", &["lang"]),
        ]);
        let mut store = Store::open_in_memory().unwrap();
        let summary = run_units(&config, &mut store, &LocalFetcher::new(root.path()));

        let kinds: Vec<&str> = summary
            .units
            .iter()
            .map(|u| match &u.status {
                UnitStatus::Succeeded { .. } => "ok",
                UnitStatus::Failed(err) => err.kind(),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                "FetchError",
                "ConfigurationError",
                "MissingLanguageFiles",
                "ok"
            ]
        );
        assert_eq!(summary.failed_count(), 3);
        assert_eq!(summary.diff.len(), 1);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_legacy_lang_unit() {
        let root = tempdir().unwrap();
        write(
            &root,
            "o/old/assets/old/lang/en_US.lang",
            "# comment\n\nkey=Some Value\n",
        );
        write(&root, "o/old/assets/old/lang/zh_CN.lang", "key=某个值\n");

        let mut legacy = unit("o/old", &["assets/old/lang"]);
        legacy.branch = Some("1.12.2".to_string());
        let mut store = Store::open_in_memory().unwrap();
        let summary = run_units(
            &config(vec![legacy]),
            &mut store,
            &LocalFetcher::new(root.path()),
        );

        let report = &summary.units[0];
        assert!(report.is_success());
        assert_eq!(report.version.as_deref(), Some("1.12"));
        assert_eq!(report.inserted(), 1);
        assert_eq!(
            store.all_entries().unwrap()[0].translated_text,
            "某个值".to_string()
        );
    }

    #[test]
    fn test_default_branch_is_used_when_unset() {
        let root = tempdir().unwrap();
        write(&root, "o/m/l/en_us.json", r#"{"a": "A"}"#);
        write(&root, "o/m/l/zh_cn.json", r#"{"a": "甲"}"#);

        let mut no_branch = unit("o/m", &["l"]);
        no_branch.branch = None;
        let mut store = Store::open_in_memory().unwrap();
        let summary = run_units(
            &config(vec![no_branch]),
            &mut store,
            &LocalFetcher::new(root.path()),
        );

        let report = &summary.units[0];
        assert_eq!(report.branch.as_deref(), Some("local"));
        assert_eq!(report.version.as_deref(), Some("unknown"));
        assert!(report.is_success());
    }

    struct FailingFetcher;

    impl SourceFetcher for FailingFetcher {
        fn default_branch(&self, _repo: &str) -> Result<String, UnitError> {
            Err(UnitError::Fetch("HTTP 404".to_string()))
        }

        fn fetch(&self, _repo: &str, _branch: &str) -> Result<Checkout, UnitError> {
            Err(UnitError::Fetch("connection reset".to_string()))
        }
    }

    #[test]
    fn test_fetch_failure_leaves_store_untouched() {
        let mut no_branch = unit("o/a", &["l"]);
        no_branch.branch = None;
        let config = config(vec![no_branch, unit("o/b", &["l"])]);
        let mut store = Store::open_in_memory().unwrap();

        let summary = run_units(&config, &mut store, &FailingFetcher);

        assert_eq!(summary.failed_count(), 2);
        assert_eq!(summary.units[0].branch, None);
        assert_eq!(summary.units[1].branch.as_deref(), Some("1.20"));
        assert_eq!(summary.units[1].inserted(), 0);
        assert!(summary.diff.is_empty());
        assert_eq!(store.count().unwrap(), 0);
    }
}
