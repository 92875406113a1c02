//! Projections rebuilt from the full store after every run.
//!
//! - **Full corpus**: every entry whose origin text is non-empty and at most
//!   [`MAX_ORIGIN_LEN`](crate::core::MAX_ORIGIN_LEN) characters, in store order.
//! - **Mini index**: origin text → distinct translations ordered by how many
//!   entries use them. Entries whose translation equals the origin are left out.
//!   Ties keep first-seen order.
//!
//! Both projections are computed from the same filtered candidate set.

use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::core::Entry;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projections {
    pub full: Vec<Entry>,
    pub mini: MiniIndex,
}

/// Build both projections from the store's entries.
pub fn build_projections(entries: &[Entry]) -> Projections {
    let full: Vec<Entry> = entries
        .iter()
        .filter(|entry| entry.is_projectable())
        .cloned()
        .collect();
    let mini = MiniIndex::from_entries(&full);
    Projections { full, mini }
}

/// A translation and the number of entries that use it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedTranslation {
    pub text: String,
    pub count: usize,
}

/// Distinct translations of `entries`, most frequent first.
///
/// Entries whose translated text equals their origin text are not counted.
/// Ties keep the order in which translations were first seen.
pub fn rank_translations<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Vec<RankedTranslation> {
    let mut ranked: Vec<RankedTranslation> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        if entry.origin_text == entry.translated_text {
            continue;
        }
        match positions.get(entry.translated_text.as_str()) {
            Some(&pos) => ranked[pos].count += 1,
            None => {
                positions.insert(&entry.translated_text, ranked.len());
                ranked.push(RankedTranslation {
                    text: entry.translated_text.clone(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Origin text → ranked distinct translations, in first-seen origin order.
///
/// Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MiniIndex {
    groups: Vec<(String, Vec<String>)>,
}

impl MiniIndex {
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut order: Vec<&str> = Vec::new();
        let mut grouped: HashMap<&str, Vec<&Entry>> = HashMap::new();

        for entry in entries {
            if entry.origin_text == entry.translated_text {
                continue;
            }
            grouped
                .entry(entry.origin_text.as_str())
                .or_insert_with(|| {
                    order.push(entry.origin_text.as_str());
                    Vec::new()
                })
                .push(entry);
        }

        let groups = order
            .into_iter()
            .map(|origin| {
                let members = grouped.remove(origin).unwrap_or_default();
                let translations = rank_translations(members)
                    .into_iter()
                    .map(|ranked| ranked.text)
                    .collect();
                (origin.to_string(), translations)
            })
            .collect();

        Self { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, origin: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(key, _)| key == origin)
            .map(|(_, translations)| translations.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(origin, translations)| (origin.as_str(), translations.as_slice()))
    }
}

impl Serialize for MiniIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.groups.iter().map(|(k, v)| (k, v)))
    }
}
