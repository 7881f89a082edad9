//! Schema normalization: one raw record in, one canonical record out.

use serde_json::Value;

use artmeta_model::{CanonicalRecord, RawRecord, SourceFormat};

use crate::chains;
use crate::numeric::parse_number;

/// Normalize one raw record into the canonical shape.
///
/// Delimited sources already carry canonical header names, so each field is
/// a single exact-key lookup. Line-object sources resolve text fields
/// through the fallback chains. Either way the raw record moves into the
/// canonical one unmodified, as the back-reference for detail display.
#[must_use]
pub fn normalize_record(raw: RawRecord, format: SourceFormat) -> CanonicalRecord {
    match format {
        SourceFormat::DelimitedText => normalize_delimited(raw),
        SourceFormat::LineObjects => normalize_line_object(raw),
    }
}

fn normalize_delimited(raw: RawRecord) -> CanonicalRecord {
    CanonicalRecord {
        source: text_field(&raw, "source"),
        id: text_field(&raw, "id"),
        artist: text_field(&raw, "artist"),
        title: text_field(&raw, "title"),
        category: text_field(&raw, "category"),
        image_url: text_field(&raw, "image_url"),
        width: parse_number(raw.get("width")),
        height: parse_number(raw.get("height")),
        path: text_field(&raw, "path"),
        file_rel: text_field(&raw, "file_rel"),
        ts: text_field(&raw, "ts"),
        is_deleted: text_field(&raw, "is_deleted"),
        src_file: text_field(&raw, "_src_file"),
        src_line: text_field(&raw, "_src_line"),
        new_filename: text_field(&raw, "new_filename"),
        raw,
    }
}

fn normalize_line_object(raw: RawRecord) -> CanonicalRecord {
    CanonicalRecord {
        source: chain_field(&raw, chains::SOURCE),
        id: chain_field(&raw, chains::ID),
        artist: chain_field(&raw, chains::ARTIST),
        title: chain_field(&raw, chains::TITLE),
        category: chain_field(&raw, chains::CATEGORY),
        image_url: chain_field(&raw, chains::IMAGE_URL),
        width: parse_number(raw.get("width")),
        height: parse_number(raw.get("height")),
        path: chain_field(&raw, chains::PATH),
        file_rel: text_field(&raw, "file_rel"),
        ts: text_field(&raw, "ts"),
        is_deleted: text_field(&raw, "is_deleted"),
        src_file: text_field(&raw, "_src_file"),
        src_line: text_field(&raw, "_src_line"),
        new_filename: text_field(&raw, "new_filename"),
        raw,
    }
}

fn chain_field(raw: &RawRecord, chain: &[&str]) -> String {
    chains::resolve(raw, chain).map(value_text).unwrap_or_default()
}

fn text_field(raw: &RawRecord, key: &str) -> String {
    raw.get(key).map(value_text).unwrap_or_default()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}
