use serde::{Deserialize, Serialize};

/// Maximum length (in Unicode scalar values) of an origin text eligible for projections.
pub const MAX_ORIGIN_LEN: usize = 50;

/// One translation record.
///
/// Field names match the published `Dict.json` shape, so the same struct
/// is serialized for the full corpus and for the diff output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Source-language text (e.g. "Iron Ingot").
    #[serde(rename = "origin_name")]
    pub origin_text: String,
    /// Localized text (e.g. "铁锭").
    #[serde(rename = "trans_name")]
    pub translated_text: String,
    /// Owning mod identifier.
    #[serde(rename = "modid")]
    pub source_id: String,
    pub key: String,
    /// Coarse version tag, e.g. "1.20".
    #[serde(rename = "version")]
    pub format_version: String,
    /// External catalog identifier (CurseForge project).
    #[serde(rename = "curseforge")]
    pub registry_id: String,
}

impl Entry {
    /// Whether this entry may appear in the full corpus and the mini index.
    ///
    /// ```
    /// use i18n_dict::core::Entry;
    ///
    /// let mut entry = Entry {
    ///     origin_text: "Iron Ingot".to_string(),
    ///     translated_text: "铁锭".to_string(),
    ///     source_id: "minecraft".to_string(),
    ///     key: "item.iron_ingot".to_string(),
    ///     format_version: "1.20".to_string(),
    ///     registry_id: "0".to_string(),
    /// };
    /// assert!(entry.is_projectable());
    ///
    /// entry.origin_text.clear();
    /// assert!(!entry.is_projectable());
    /// ```
    pub fn is_projectable(&self) -> bool {
        !self.origin_text.is_empty() && self.origin_text.chars().count() <= MAX_ORIGIN_LEN
    }

    pub fn identity(&self) -> IdentityKey<'_> {
        IdentityKey {
            source_id: &self.source_id,
            key: &self.key,
            format_version: &self.format_version,
            registry_id: &self.registry_id,
        }
    }
}

/// The `(source_id, key, format_version, registry_id)` tuple that identifies
/// an entry in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityKey<'a> {
    pub source_id: &'a str,
    pub key: &'a str,
    pub format_version: &'a str,
    pub registry_id: &'a str,
}

/// The part of the identity tuple shared by every key of one source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitScope {
    pub source_id: String,
    pub format_version: String,
    pub registry_id: String,
}

impl UnitScope {
    pub fn new(
        source_id: impl Into<String>,
        format_version: impl Into<String>,
        registry_id: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            format_version: format_version.into(),
            registry_id: registry_id.into(),
        }
    }

    /// Build an entry for `key` within this scope.
    pub fn entry(
        &self,
        key: impl Into<String>,
        origin_text: impl Into<String>,
        translated_text: impl Into<String>,
    ) -> Entry {
        Entry {
            origin_text: origin_text.into(),
            translated_text: translated_text.into(),
            source_id: self.source_id.clone(),
            key: key.into(),
            format_version: self.format_version.clone(),
            registry_id: self.registry_id.clone(),
        }
    }
}
