//! Subcommand implementations.

use anyhow::{Context, Result, bail};
use tracing::warn;

use artmeta_cli::state::Session;
use artmeta_cli::summary::{print_detail, print_matches, print_stats};
use artmeta_model::{Criteria, detail_entries};

use crate::cli::{FilterArgs, ShowArgs, StatsArgs};

pub fn run_stats(args: &StatsArgs) -> Result<()> {
    let session = Session::open(&args.index)
        .with_context(|| format!("failed to load collection from {}", args.index.display()))?;
    print_stats(session.facets(), session.records().len());
    Ok(())
}

pub fn run_filter(args: &FilterArgs) -> Result<()> {
    let mut session = Session::open(&args.index)
        .with_context(|| format!("failed to load collection from {}", args.index.display()))?;
    session.set_criteria(criteria_from_args(args));
    print_matches(&session.visible(), session.records().len());
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let session = Session::open(&args.index)
        .with_context(|| format!("failed to load collection from {}", args.index.display()))?;
    let Some(record) = session.find_by_id(&args.id) else {
        bail!("no record with id {:?}", args.id);
    };
    if record.preferred_file_ref().is_none() {
        warn!(id = %args.id, "record has no file reference");
    }
    if detail_entries(&record.raw).is_empty() {
        warn!(id = %args.id, "record has no displayable fields");
    }
    print_detail(record);
    Ok(())
}

/// Build one criteria value object from the flag set. Bound flags go
/// through the range setters, so an inconsistent min/max pair is repaired
/// the same way an interactive edit would be.
fn criteria_from_args(args: &FilterArgs) -> Criteria {
    let mut criteria = Criteria {
        keyword: args.keyword.clone().unwrap_or_default(),
        source: args.source.clone().unwrap_or_default(),
        artist: args.artist.clone().unwrap_or_default(),
        category: args.category.clone().unwrap_or_default(),
        ..Criteria::default()
    };
    criteria.width.set_max(args.width_max);
    criteria.width.set_min(args.width_min);
    criteria.height.set_max(args.height_max);
    criteria.height.set_min(args.height_min);
    criteria
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn filter_args() -> FilterArgs {
        FilterArgs {
            index: PathBuf::from("index.json"),
            keyword: None,
            source: None,
            artist: None,
            category: None,
            width_min: None,
            width_max: None,
            height_min: None,
            height_max: None,
        }
    }

    #[test]
    fn bound_flags_pass_through_the_clamp() {
        let args = FilterArgs {
            width_min: Some(80.0),
            width_max: Some(50.0),
            ..filter_args()
        };
        let criteria = criteria_from_args(&args);
        assert_eq!(criteria.width.min, Some(50.0));
        assert_eq!(criteria.width.max, Some(50.0));
    }

    #[test]
    fn missing_flags_leave_criteria_unconstrained() {
        let criteria = criteria_from_args(&filter_args());
        assert!(criteria.is_unconstrained());
    }
}
