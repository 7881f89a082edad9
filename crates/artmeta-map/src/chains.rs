//! Fallback chains: ordered candidate source keys per canonical field.
//!
//! Upstream extraction jobs disagree on field names, so every canonical
//! field carries a priority-ordered list of candidates. Resolution takes the
//! first candidate present with a usable value and ignores the rest. Plain
//! data tables, no reflection.

use serde_json::Value;

use artmeta_model::RawRecord;

pub const IMAGE_URL: &[&str] = &["image_url", "imageUrl", "image"];
pub const PATH: &[&str] = &["path", "file_rel", "file", "input_path"];
pub const SOURCE: &[&str] = &["source", "site"];
pub const ID: &[&str] = &["id", "objectid", "objectNumber"];
pub const ARTIST: &[&str] = &[
    "artist",
    "artist_title",
    "artistDisplayName",
    "artist_name",
    "maker",
];
pub const TITLE: &[&str] = &["title", "objectTitle", "name"];
pub const CATEGORY: &[&str] = &["category", "classification", "objectType"];

/// Walk the chain and return the first usable value, if any.
///
/// Null and empty-string values do not satisfy a candidate; the walk moves
/// on to the next key.
#[must_use]
pub fn resolve<'a>(record: &'a RawRecord, chain: &[&str]) -> Option<&'a Value> {
    chain
        .iter()
        .find_map(|key| record.get(key).filter(|value| is_usable(value)))
}

fn is_usable(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.is_empty(),
        _ => true,
    }
}
