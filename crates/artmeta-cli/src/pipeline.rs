//! The one-shot ingestion pipeline: decode every source named by the list,
//! normalize each record, build the facet index.

use std::path::Path;

use tracing::info;

use artmeta_filter::FacetIndex;
use artmeta_ingest::{Result, load_sources};
use artmeta_map::normalize_record;
use artmeta_model::{CanonicalRecord, SourceFormat};

/// Everything the presentation layer needs after initialization.
#[derive(Debug)]
pub struct LoadedCollection {
    /// Normalized records, concatenated in source-list order.
    pub records: Vec<CanonicalRecord>,
    pub index: FacetIndex,
    pub source_count: usize,
    /// Malformed-line count across all JSONL sources.
    pub skipped_lines: usize,
}

/// Load, normalize, and index the full collection.
///
/// Fatal on a missing or malformed source list or on any single source read
/// failure; there is no partial collection. Malformed lines inside a source
/// were already skipped and reported by the decoder.
pub fn load_collection(index_path: &Path) -> Result<LoadedCollection> {
    let batches = load_sources(index_path)?;
    let source_count = batches.len();
    let mut skipped_lines = 0;
    let mut records = Vec::new();
    for batch in batches {
        skipped_lines += batch.skipped.len();
        let format = batch.format;
        // A delimited source with a trailing line terminator decodes one
        // extra all-empty record; drop those here rather than in the decoder.
        records.extend(
            batch
                .records
                .into_iter()
                .filter(|raw| format != SourceFormat::DelimitedText || !raw.is_all_empty())
                .map(|raw| normalize_record(raw, format)),
        );
    }
    let index = FacetIndex::build(&records);
    info!(
        sources = source_count,
        records = records.len(),
        skipped_lines,
        "collection loaded"
    );
    Ok(LoadedCollection {
        records,
        index,
        source_count,
        skipped_lines,
    })
}
