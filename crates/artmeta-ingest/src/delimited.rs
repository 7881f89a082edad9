//! Delimited-text decoding with a two-state quote-aware scanner.
//!
//! The scanner walks the full source text once. A double quote in normal
//! state opens a quoted run; inside it, `""` emits one literal quote and
//! everything else (separators, CR, LF included) is field content. Carriage
//! returns outside quotes are dropped so LF and CRLF sources decode the same
//! way.

use serde_json::Value;

use artmeta_model::RawRecord;

const DEFAULT_SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    Quoted,
}

/// Split the full text into rows of unquoted, untrimmed fields.
///
/// The pending field and row are flushed at end of input even without a
/// trailing line terminator, so the output always carries at least one row
/// (possibly a single empty field).
#[must_use]
pub fn scan_rows(text: &str, separator: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut state = ScanState::Normal;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match state {
            ScanState::Quoted => {
                if ch == '"' {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        state = ScanState::Normal;
                    }
                } else {
                    field.push(ch);
                }
            }
            ScanState::Normal => {
                if ch == '"' {
                    state = ScanState::Quoted;
                } else if ch == separator {
                    row.push(std::mem::take(&mut field));
                } else if ch == '\n' {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                } else if ch != '\r' {
                    field.push(ch);
                }
            }
        }
    }

    row.push(field);
    rows.push(row);
    rows
}

/// Decode comma-separated text into raw records, first row as header.
#[must_use]
pub fn decode_delimited(text: &str) -> Vec<RawRecord> {
    decode_delimited_with_separator(text, DEFAULT_SEPARATOR)
}

/// Decode character-separated text into raw records.
///
/// Header names drop a leading BOM artifact and surrounding whitespace;
/// every data value is whitespace-trimmed. A short row yields empty strings
/// for its missing trailing fields. Rows are never dropped here, not even a
/// trailing blank line; discarding fully-empty records is the caller's call.
#[must_use]
pub fn decode_delimited_with_separator(text: &str, separator: char) -> Vec<RawRecord> {
    let mut rows = scan_rows(text, separator).into_iter();
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_row.iter().map(|name| clean_header(name)).collect();

    rows.map(|columns| {
        let mut record = RawRecord::new();
        for (index, header) in headers.iter().enumerate() {
            let value = columns.get(index).map_or("", |cell| cell.trim());
            record.insert(header.clone(), Value::String(value.to_string()));
        }
        record
    })
    .collect()
}

fn clean_header(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_string()
}
