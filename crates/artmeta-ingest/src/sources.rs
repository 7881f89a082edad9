//! Source-list loading and per-source decoding.
//!
//! The source list is a JSON array of file paths, resolved relative to the
//! list's own directory. Sources load in list order and any single failure
//! aborts the whole load; there are no partial results.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use artmeta_model::{RawRecord, SourceFormat};

use crate::delimited::decode_delimited;
use crate::error::{IngestError, Result};
use crate::jsonl::{SkippedLine, decode_jsonl};

/// The decoded contents of one source file.
#[derive(Debug)]
pub struct SourceBatch {
    pub path: PathBuf,
    pub format: SourceFormat,
    pub records: Vec<RawRecord>,
    /// Skip reports from JSONL decoding; always empty for delimited sources.
    pub skipped: Vec<SkippedLine>,
}

/// Read the source-list document and decode it as an array of file paths.
pub fn load_source_list(path: &Path) -> Result<Vec<PathBuf>> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::SourceListRead {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|_| IngestError::SourceListShape {
        path: path.to_path_buf(),
    })?;
    let Some(entries) = value.as_array() else {
        return Err(IngestError::SourceListShape {
            path: path.to_path_buf(),
        });
    };
    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(PathBuf::from)
                .ok_or_else(|| IngestError::SourceListShape {
                    path: path.to_path_buf(),
                })
        })
        .collect()
}

/// Read and decode one source file, picking the decoder from its extension.
pub fn load_source(path: &Path) -> Result<SourceBatch> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;
    let format = SourceFormat::from_path(path);
    let (records, skipped) = match format {
        SourceFormat::DelimitedText => (decode_delimited(&text), Vec::new()),
        SourceFormat::LineObjects => {
            let decode = decode_jsonl(&text);
            (decode.records, decode.skipped)
        }
    };
    debug!(
        path = %path.display(),
        records = records.len(),
        skipped = skipped.len(),
        "decoded source"
    );
    Ok(SourceBatch {
        path: path.to_path_buf(),
        format,
        records,
        skipped,
    })
}

/// Load every source named by the list, in list order, failing fast.
pub fn load_sources(index_path: &Path) -> Result<Vec<SourceBatch>> {
    let entries = load_source_list(index_path)?;
    let base = index_path.parent().unwrap_or_else(|| Path::new("."));
    entries
        .iter()
        .map(|entry| load_source(&base.join(entry)))
        .collect()
}
