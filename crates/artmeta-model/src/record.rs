use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which decoder produced a raw record.
///
/// The normalizer needs this to pick between exact-key lookup (delimited
/// sources carry canonical header names) and fallback-chain resolution
/// (line-object sources use whatever keys the upstream extractor chose).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Character-separated text with a header row.
    DelimitedText,
    /// One JSON object per line.
    LineObjects,
}

impl SourceFormat {
    /// Pick the decoder for a source file from its extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::DelimitedText,
            _ => Self::LineObjects,
        }
    }
}

/// One record exactly as decoded, keyed by source-specific field names.
///
/// Field order matches the source (insertion order is preserved), values are
/// loosely typed, and the record is never mutated after the decoder builds
/// it. The canonical record keeps it around for full-detail display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn insert(&mut self, key: String, value: Value) {
        self.0.insert(key, value);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every field value is an empty string. A decoded trailing
    /// blank line looks like this; the decoder keeps it and leaves the
    /// discard decision to the caller.
    #[must_use]
    pub fn is_all_empty(&self) -> bool {
        self.0
            .iter()
            .all(|(_, value)| matches!(value, Value::String(text) if text.is_empty()))
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// The normalized, fixed-shape view of one raw record.
///
/// Text fields are empty strings when the source had nothing usable, never
/// absent. Dimensions are `Some` only for a finite parsed number; "no data"
/// and "zero" stay distinguishable until predicate comparison time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalRecord {
    /// Dataset/site identifier.
    pub source: String,
    /// Upstream record identifier.
    pub id: String,
    pub artist: String,
    pub title: String,
    /// Classification label.
    pub category: String,
    /// Remote fallback image location.
    pub image_url: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Local file reference, preferred over `image_url` for display.
    pub path: String,
    pub file_rel: String,
    /// Opaque timestamp, never parsed.
    pub ts: String,
    /// `"1"` marks the record as soft-deleted.
    pub is_deleted: String,
    pub src_file: String,
    pub src_line: String,
    pub new_filename: String,
    /// The record as decoded, read-only, for detail display.
    pub raw: RawRecord,
}

impl CanonicalRecord {
    /// Soft-deleted records stay in the collection but are always excluded
    /// from filtered views.
    #[must_use]
    pub fn is_soft_deleted(&self) -> bool {
        self.is_deleted == "1"
    }

    /// The single file reference to use for copy/open actions:
    /// path, else file_rel, else image_url.
    #[must_use]
    pub fn preferred_file_ref(&self) -> Option<&str> {
        [&self.path, &self.file_rel, &self.image_url]
            .into_iter()
            .find(|value| !value.is_empty())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            SourceFormat::from_path(&PathBuf::from("data/records.csv")),
            SourceFormat::DelimitedText
        );
        assert_eq!(
            SourceFormat::from_path(&PathBuf::from("data/records.CSV")),
            SourceFormat::DelimitedText
        );
        assert_eq!(
            SourceFormat::from_path(&PathBuf::from("data/records.jsonl")),
            SourceFormat::LineObjects
        );
        assert_eq!(
            SourceFormat::from_path(&PathBuf::from("data/records")),
            SourceFormat::LineObjects
        );
    }

    #[test]
    fn raw_record_preserves_source_order() {
        let raw: RawRecord =
            serde_json::from_str(r#"{"zulu":"1","alpha":"2","mike":"3"}"#).expect("parse");
        let keys: Vec<&String> = raw.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["zulu", "alpha", "mike"]);
    }

    #[test]
    fn soft_delete_flag_is_exact() {
        let mut record = CanonicalRecord::default();
        assert!(!record.is_soft_deleted());
        record.is_deleted = "1".to_string();
        assert!(record.is_soft_deleted());
        record.is_deleted = "true".to_string();
        assert!(!record.is_soft_deleted());
    }

    #[test]
    fn preferred_file_ref_falls_back_in_order() {
        let mut record = CanonicalRecord {
            path: "/img/1.jpg".to_string(),
            file_rel: "rel/1.jpg".to_string(),
            image_url: "https://example.org/1.jpg".to_string(),
            ..CanonicalRecord::default()
        };
        assert_eq!(record.preferred_file_ref(), Some("/img/1.jpg"));
        record.path.clear();
        assert_eq!(record.preferred_file_ref(), Some("rel/1.jpg"));
        record.file_rel.clear();
        assert_eq!(record.preferred_file_ref(), Some("https://example.org/1.jpg"));
        record.image_url.clear();
        assert_eq!(record.preferred_file_ref(), None);
    }
}
