use serde_json::{Map, Value};

/// Raw key → value mapping read from one language file.
///
/// Values stay as JSON values so that non-textual entries (nested objects,
/// arrays, numbers) survive parsing and can be skipped during reconciliation.
/// Key order follows the file.
pub type RawMessages = Map<String, Value>;

/// Origin and translated mappings for one source unit, after path resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguagePair {
    pub origin: RawMessages,
    pub translated: RawMessages,
}

impl LanguagePair {
    pub fn new(origin: RawMessages, translated: RawMessages) -> Self {
        Self { origin, translated }
    }

    /// Keys present in both mappings, in origin-file order.
    pub fn common_keys(&self) -> impl Iterator<Item = &str> {
        self.origin
            .keys()
            .filter(|key| self.translated.contains_key(key.as_str()))
            .map(String::as_str)
    }
}
