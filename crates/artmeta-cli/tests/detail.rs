//! Snapshot test for the rendered detail view.

use insta::assert_snapshot;

use artmeta_cli::summary::render_detail;
use artmeta_map::normalize_record;
use artmeta_model::{RawRecord, SourceFormat};

#[test]
fn detail_lists_raw_fields_in_source_order() {
    let raw: RawRecord = serde_json::from_str(
        r#"{"site":"MuseumB","objectTitle":"Self Portrait","artist_name":"Rembrandt","width":150,"ts":"","input_path":"rembrandt/self_portrait.jpg"}"#,
    )
    .expect("raw record fixture");
    let record = normalize_record(raw, SourceFormat::LineObjects);

    assert_snapshot!(render_detail(&record), @r"
    Title: Self Portrait
    File:  rembrandt/self_portrait.jpg

      site         MuseumB
      objectTitle  Self Portrait
      artist_name  Rembrandt
      width        150
      input_path   rembrandt/self_portrait.jpg
    ");
}
