//! Filter criteria: the complete snapshot of all active filter settings at
//! one point in time. Input handling replaces the whole value object on every
//! edit rather than mutating pieces of a live one.

/// A min/max pair for one numeric facet.
///
/// Either bound may be unset, meaning unconstrained on that side. Edits go
/// through [`set_min`](Self::set_min)/[`set_max`](Self::set_max) so the pair
/// stays internally consistent: `min` is lowered to `max` when it would
/// exceed it, `max` is never raised automatically.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundedRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl BoundedRange {
    #[must_use]
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        let mut range = Self { min, max };
        range.repair();
        range
    }

    pub fn set_min(&mut self, min: Option<f64>) {
        self.min = min;
        self.repair();
    }

    pub fn set_max(&mut self, max: Option<f64>) {
        self.max = max;
        self.repair();
    }

    // One-directional repair, not a swap.
    fn repair(&mut self) {
        if let (Some(min), Some(max)) = (self.min, self.max)
            && min > max
        {
            self.min = Some(max);
        }
    }

    /// True when the value satisfies every active bound.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        if let Some(min) = self.min
            && value < min
        {
            return false;
        }
        if let Some(max) = self.max
            && value > max
        {
            return false;
        }
        true
    }

    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// All active filter settings. Empty string or unset bound means
/// unconstrained; everything combines with logical AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    /// Free-text match against artist and title, case-insensitive.
    pub keyword: String,
    /// Exact match on the record's source.
    pub source: String,
    /// Exact match on the record's artist.
    pub artist: String,
    /// Exact match on the record's category.
    pub category: String,
    pub width: BoundedRange,
    pub height: BoundedRange,
}

impl Criteria {
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.keyword.trim().is_empty()
            && self.source.is_empty()
            && self.artist.is_empty()
            && self.category.is_empty()
            && self.width.is_unconstrained()
            && self.height.is_unconstrained()
    }
}
