//! Human-readable rendering of facet summaries, match lists, and record
//! detail.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use artmeta_filter::FacetIndex;
use artmeta_model::{CanonicalRecord, detail_entries};

pub fn print_stats(index: &FacetIndex, total_records: usize) {
    println!("Records: {total_records}");

    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Facet"),
        header_cell("Distinct"),
        header_cell("Values"),
    ]);
    table.add_row(vec![
        Cell::new("source"),
        Cell::new(index.sources.len()),
        Cell::new(preview(&index.sources)),
    ]);
    table.add_row(vec![
        Cell::new("artist"),
        Cell::new(index.artists.len()),
        Cell::new(preview(&index.artists)),
    ]);
    table.add_row(vec![
        Cell::new("category"),
        Cell::new(index.categories.len()),
        Cell::new(preview(&index.categories)),
    ]);
    println!("{table}");

    let (width_min, width_max) = index.width_range;
    let (height_min, height_max) = index.height_range;
    println!("Width:  {} - {}", format_bound(width_min), format_bound(width_max));
    println!("Height: {} - {}", format_bound(height_min), format_bound(height_max));
}

pub fn print_matches(visible: &[&CanonicalRecord], total_records: usize) {
    println!("Total: {total_records} | Showing: {}", visible.len());
    if visible.is_empty() {
        return;
    }

    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Source"),
        header_cell("ID"),
        header_cell("Artist"),
        header_cell("Title"),
        header_cell("Category"),
        header_cell("Size"),
        header_cell("File"),
    ]);
    align_column(&mut table, 5, CellAlignment::Right);
    for record in visible {
        table.add_row(vec![
            Cell::new(&record.source),
            Cell::new(&record.id),
            Cell::new(&record.artist),
            Cell::new(display_title(record)),
            Cell::new(&record.category),
            Cell::new(format_size(record)),
            Cell::new(record.preferred_file_ref().unwrap_or("")),
        ]);
    }
    println!("{table}");
}

pub fn print_detail(record: &CanonicalRecord) {
    print!("{}", render_detail(record));
}

/// The detail view as text: title, preferred file reference, then the raw
/// record's fields in source order, empties omitted.
#[must_use]
pub fn render_detail(record: &CanonicalRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("Title: {}\n", display_title(record)));
    if let Some(file_ref) = record.preferred_file_ref() {
        out.push_str(&format!("File:  {file_ref}\n"));
    }
    out.push('\n');
    let entries = detail_entries(&record.raw);
    let key_width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in &entries {
        out.push_str(&format!("  {key:<key_width$}  {value}\n"));
    }
    out
}

fn display_title(record: &CanonicalRecord) -> &str {
    if record.title.is_empty() {
        "(Untitled)"
    } else {
        &record.title
    }
}

fn format_size(record: &CanonicalRecord) -> String {
    format!(
        "{} x {}",
        format_dimension(record.width),
        format_dimension(record.height)
    )
}

fn format_dimension(value: Option<f64>) -> String {
    match value {
        Some(number) => format_bound(number),
        None => "-".to_string(),
    }
}

fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn preview(values: &[String]) -> String {
    const MAX_SHOWN: usize = 5;
    if values.len() <= MAX_SHOWN {
        values.join(", ")
    } else {
        let shown = values[..MAX_SHOWN].join(", ");
        format!("{shown}, ... ({} more)", values.len() - MAX_SHOWN)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
