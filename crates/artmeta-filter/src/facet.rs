//! Facet vocabularies and numeric range bounds over a normalized collection.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use artmeta_model::CanonicalRecord;

/// The distinct categorical values and numeric bounds present in a
/// collection. Built once after normalization; a changed collection needs a
/// full rebuild, there is no incremental path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetIndex {
    pub sources: Vec<String>,
    pub artists: Vec<String>,
    pub categories: Vec<String>,
    /// `(min, max)` over records with a present width; `(0.0, 0.0)` when
    /// no record has one.
    pub width_range: (f64, f64),
    pub height_range: (f64, f64),
}

impl FacetIndex {
    #[must_use]
    pub fn build(records: &[CanonicalRecord]) -> Self {
        Self {
            sources: distinct_sorted(records, |record| &record.source),
            artists: distinct_sorted(records, |record| &record.artist),
            categories: distinct_sorted(records, |record| &record.category),
            width_range: value_range(records, |record| record.width),
            height_range: value_range(records, |record| record.height),
        }
    }
}

fn distinct_sorted<'a>(
    records: &'a [CanonicalRecord],
    facet: impl Fn(&'a CanonicalRecord) -> &'a String,
) -> Vec<String> {
    let values: BTreeSet<&str> = records
        .iter()
        .map(|record| facet(record).as_str())
        .filter(|value| !value.is_empty())
        .collect();
    let mut sorted: Vec<String> = values.into_iter().map(str::to_string).collect();
    sorted.sort_by(|a, b| compare_display(a, b));
    sorted
}

// Case-insensitive with a code-point tiebreak; stands in for full locale
// collation.
fn compare_display(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn value_range(
    records: &[CanonicalRecord],
    facet: impl Fn(&CanonicalRecord) -> Option<f64>,
) -> (f64, f64) {
    let mut bounds: Option<(f64, f64)> = None;
    for record in records {
        let Some(value) = facet(record) else {
            continue;
        };
        bounds = Some(match bounds {
            None => (value, value),
            Some((min, max)) => (min.min(value), max.max(value)),
        });
    }
    bounds.unwrap_or((0.0, 0.0))
}
