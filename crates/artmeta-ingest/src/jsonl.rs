//! Newline-delimited JSON decoding.
//!
//! One corrupt line in a large ingested file must not discard the rest, so a
//! line that fails to parse as an object is skipped, reported, and decoding
//! continues.

use serde_json::{Map, Value};
use tracing::warn;

use artmeta_model::RawRecord;

/// A line the decoder had to skip, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub reason: String,
}

/// The outcome of decoding one JSONL source.
#[derive(Debug, Default)]
pub struct JsonlDecode {
    /// Successfully parsed records, in input order.
    pub records: Vec<RawRecord>,
    /// Non-blank lines that failed to parse as an object.
    pub skipped: Vec<SkippedLine>,
}

/// Decode text with one JSON object per line.
///
/// Blank and whitespace-only lines are skipped silently. Malformed lines
/// (including well-formed JSON that is not an object) are counted and
/// reported via the diagnostic channel, never fatal.
#[must_use]
pub fn decode_jsonl(text: &str) -> JsonlDecode {
    let mut decode = JsonlDecode::default();
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match serde_json::from_str::<Map<String, Value>>(trimmed) {
            Ok(fields) => decode.records.push(RawRecord::from(fields)),
            Err(error) => {
                let line = index + 1;
                warn!(line, %error, "skipping malformed line");
                decode.skipped.push(SkippedLine {
                    line,
                    reason: error.to_string(),
                });
            }
        }
    }
    decode
}
