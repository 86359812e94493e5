//! Typed model of the Merriam-Webster entry payload.
//!
//! A lookup returns a JSON array whose elements are either a structured
//! entry object or a bare string (spelling suggestions and cross-references
//! for words the dictionary does not know). Only structured entries are ever
//! consulted.
//!
//! Two accessor policies exist, and tools name which one they use:
//! - [`first_with`]: scan every structured entry, first match for the
//!   requested field wins (`meaning`, `part_of_speech`)
//! - [`first_structured`]: only the first structured entry is consulted
//!   (`pronunciations`, `stems`, and all of `full_info`)

use serde::Deserialize;
use std::collections::BTreeSet;

/// One element of a dictionary response.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// A full entry object.
    Structured(EntryData),

    /// A bare suggestion/cross-reference string; always skipped.
    CrossReference(String),
}

impl Entry {
    pub fn as_structured(&self) -> Option<&EntryData> {
        match self {
            Self::Structured(data) => Some(data),
            Self::CrossReference(_) => None,
        }
    }
}

/// The fields of a structured entry that the tools consult.
///
/// Everything is optional: real entries omit fields freely, and presence
/// matters (`shortdef: []` counts as present).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryData {
    /// Entry metadata; carries the stem list.
    #[serde(default)]
    pub meta: Option<EntryMeta>,

    /// Short definition strings.
    #[serde(default, rename = "shortdef")]
    pub short_defs: Option<Vec<String>>,

    /// Functional label (part of speech).
    #[serde(default, rename = "fl")]
    pub functional_label: Option<String>,

    /// Headword information; carries the pronunciations.
    #[serde(default, rename = "hwi")]
    pub headword: Option<HeadwordInfo>,
}

/// Entry metadata block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryMeta {
    #[serde(default)]
    pub stems: Vec<String>,
}

/// Headword information block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeadwordInfo {
    #[serde(default, rename = "prs")]
    pub pronunciations: Vec<Pronunciation>,
}

/// One pronunciation record; only the written form is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pronunciation {
    #[serde(default, rename = "mw")]
    pub written: Option<String>,
}

impl EntryData {
    /// Deduplicated stem strings, sorted (the upstream order carries no
    /// meaning).
    pub fn stems(&self) -> Vec<String> {
        self.meta
            .as_ref()
            .map(|meta| {
                meta.stems
                    .iter()
                    .cloned()
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Deduplicated written pronunciations, sorted.
    pub fn pronunciations(&self) -> Vec<String> {
        self.headword
            .as_ref()
            .map(|hwi| {
                hwi.pronunciations
                    .iter()
                    .filter_map(|prs| prs.written.clone())
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// First structured entry of a response, if any.
pub fn first_structured(entries: &[Entry]) -> Option<&EntryData> {
    entries.iter().find_map(Entry::as_structured)
}

/// Scan every structured entry; the first one `pick` accepts wins.
pub fn first_with<'a, T, F>(entries: &'a [Entry], pick: F) -> Option<T>
where
    F: Fn(&'a EntryData) -> Option<T>,
{
    entries.iter().filter_map(Entry::as_structured).find_map(pick)
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_mixed_array_deserializes() {
        let entries: Vec<Entry> = serde_json::from_str(
            r#"[{"shortdef": ["a def"]}, "suggestion", {"fl": "noun"}]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].as_structured().is_some());
        assert!(entries[1].as_structured().is_none());
        assert!(entries[2].as_structured().is_some());
    }

    #[test]
    fn test_suggestions_have_no_structured_entry() {
        let entries = parse(SUGGESTIONS_ONLY);
        assert!(first_structured(&entries).is_none());
    }

    #[test]
    fn test_stems_deduplicated() {
        let entries = parse(WORD_WITH_EVERYTHING);
        let stems = first_structured(&entries).unwrap().stems();
        assert_eq!(stems, vec!["test", "tested", "testing", "tests"]);
    }

    #[test]
    fn test_pronunciations_deduplicated() {
        let entries = parse(WORD_WITH_EVERYTHING);
        let prs = first_structured(&entries).unwrap().pronunciations();
        assert_eq!(prs, vec!["ˈtest"]);
    }

    #[test]
    fn test_empty_shortdef_counts_as_present() {
        let entries: Vec<Entry> =
            serde_json::from_str(r#"[{"shortdef": []}, {"shortdef": ["later"]}]"#).unwrap();
        let defs = first_with(&entries, |e| e.short_defs.clone()).unwrap();
        assert!(defs.is_empty());
    }

    #[test]
    fn test_first_with_scans_past_entries_without_field() {
        let entries = parse(LATE_FIELDS);
        let label = first_with(&entries, |e| e.functional_label.clone());
        assert_eq!(label.as_deref(), Some("adjective"));
    }

    #[test]
    fn test_first_structured_stops_at_first() {
        let entries = parse(LATE_FIELDS);
        let data = first_structured(&entries).unwrap();
        assert!(data.functional_label.is_none());
        assert_eq!(data.pronunciations(), vec!["ˈber"]);
    }
}
