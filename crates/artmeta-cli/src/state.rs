//! Process-wide application state for one browsing session.

use std::path::Path;

use artmeta_filter::{FacetIndex, filter};
use artmeta_ingest::Result;
use artmeta_model::{CanonicalRecord, Criteria};

use crate::pipeline::load_collection;

/// One browsing session over an immutable collection.
///
/// Single-writer discipline: only [`Session::open`] sets the record
/// collection and facet index, and only [`Session::set_criteria`] replaces
/// the criteria. The filtering path reads and never mutates, so once a
/// session opens, filtering cannot fail.
#[derive(Debug)]
pub struct Session {
    records: Vec<CanonicalRecord>,
    index: FacetIndex,
    criteria: Criteria,
}

impl Session {
    /// Ingest the collection named by the source list and start a session
    /// with unconstrained criteria.
    pub fn open(index_path: &Path) -> Result<Self> {
        let loaded = load_collection(index_path)?;
        Ok(Self {
            records: loaded.records,
            index: loaded.index,
            criteria: Criteria::default(),
        })
    }

    #[must_use]
    pub fn records(&self) -> &[CanonicalRecord] {
        &self.records
    }

    #[must_use]
    pub fn facets(&self) -> &FacetIndex {
        &self.index
    }

    #[must_use]
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Replace the criteria wholesale, as one input event.
    pub fn set_criteria(&mut self, criteria: Criteria) {
        self.criteria = criteria;
    }

    /// Recompute the visible subset under the current criteria. One full
    /// pass per call, references into the owned collection.
    #[must_use]
    pub fn visible(&self) -> Vec<&CanonicalRecord> {
        filter(&self.records, &self.criteria)
    }

    /// Find one record by its upstream identifier.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&CanonicalRecord> {
        self.records.iter().find(|record| record.id == id)
    }
}
