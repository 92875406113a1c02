//! Format-version handling.
//!
//! Minecraft switched language files from line-based `.lang` to JSON in 1.13.
//! The choice of parser depends only on the version tag, never on file content.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Version tag used when the branch name carries no `major.minor` pair.
pub const UNKNOWN_VERSION: &str = "unknown";

static BRANCH_VERSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+\.\d+)").unwrap());

/// A parsed `major.minor[.patch]` version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FormatVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl FormatVersion {
    /// Parse `major.minor[.patch]`. Returns `None` for anything else.
    pub fn parse(version: &str) -> Option<Self> {
        let mut parts = version.trim().split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let patch = match parts.next() {
            Some(patch) => patch.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            major,
            minor,
            patch,
        })
    }

    pub fn source_format(&self) -> SourceFormat {
        if self.major > 1 || (self.major == 1 && self.minor >= 13) {
            SourceFormat::Json
        } else {
            SourceFormat::Lang
        }
    }
}

/// Raw language file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// `en_us.json`, a flat JSON object.
    Json,
    /// `en_US.lang`, legacy `key=value` lines.
    Lang,
}

impl SourceFormat {
    /// Select the format for a version tag.
    ///
    /// Unparseable tags (including [`UNKNOWN_VERSION`]) fall back to JSON,
    /// the format of every release since 1.13.
    pub fn for_version(version: &str) -> Self {
        match FormatVersion::parse(version) {
            Some(parsed) => parsed.source_format(),
            None => {
                tracing::warn!(version, "unparseable format version, assuming JSON sources");
                SourceFormat::Json
            }
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Json => "json",
            SourceFormat::Lang => "lang",
        }
    }

    /// File name for `locale` in this format. Lookup is case-insensitive, so
    /// `en_us` also finds `en_US.lang`.
    pub fn file_name(&self, locale: &str) -> String {
        format!("{}.{}", locale, self.extension())
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Extract a `major.minor` version from a branch name.
///
/// ```
/// use i18n_dict::core::format::version_from_branch;
///
/// assert_eq!(version_from_branch("mc1.20.1/dev"), "1.20");
/// assert_eq!(version_from_branch("1.12.x"), "1.12");
/// assert_eq!(version_from_branch("main"), "unknown");
/// ```
pub fn version_from_branch(branch: &str) -> String {
    match BRANCH_VERSION.captures(branch) {
        Some(caps) => caps[1].to_string(),
        None => {
            tracing::warn!(branch, "could not derive a version from branch name");
            UNKNOWN_VERSION.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_patch() {
        assert_eq!(
            FormatVersion::parse("1.20"),
            Some(FormatVersion {
                major: 1,
                minor: 20,
                patch: 0
            })
        );
        assert_eq!(
            FormatVersion::parse("1.16.5"),
            Some(FormatVersion {
                major: 1,
                minor: 16,
                patch: 5
            })
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(FormatVersion::parse("unknown"), None);
        assert_eq!(FormatVersion::parse("1"), None);
        assert_eq!(FormatVersion::parse("1.x"), None);
        assert_eq!(FormatVersion::parse("1.2.3.4"), None);
        assert_eq!(FormatVersion::parse(""), None);
    }

    #[test]
    fn test_format_threshold() {
        assert_eq!(SourceFormat::for_version("1.12"), SourceFormat::Lang);
        assert_eq!(SourceFormat::for_version("1.12.2"), SourceFormat::Lang);
        assert_eq!(SourceFormat::for_version("1.7.10"), SourceFormat::Lang);
        assert_eq!(SourceFormat::for_version("1.13"), SourceFormat::Json);
        assert_eq!(SourceFormat::for_version("1.20"), SourceFormat::Json);
        assert_eq!(SourceFormat::for_version("2.0"), SourceFormat::Json);
        assert_eq!(SourceFormat::for_version("0.99"), SourceFormat::Lang);
    }

    #[test]
    fn test_unknown_version_uses_json() {
        assert_eq!(SourceFormat::for_version(UNKNOWN_VERSION), SourceFormat::Json);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(SourceFormat::Json.file_name("en_us"), "en_us.json");
        assert_eq!(SourceFormat::Lang.file_name("zh_cn"), "zh_cn.lang");
    }

    #[test]
    fn test_version_from_branch_takes_first_pair() {
        assert_eq!(version_from_branch("1.19.2-forge"), "1.19");
        assert_eq!(version_from_branch("release/1.18"), "1.18");
        assert_eq!(version_from_branch("dev"), UNKNOWN_VERSION);
    }
}
