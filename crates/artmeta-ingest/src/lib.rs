pub mod delimited;
pub mod error;
pub mod jsonl;
pub mod sources;

pub use delimited::{decode_delimited, decode_delimited_with_separator, scan_rows};
pub use error::{IngestError, Result};
pub use jsonl::{JsonlDecode, SkippedLine, decode_jsonl};
pub use sources::{SourceBatch, load_source, load_source_list, load_sources};
