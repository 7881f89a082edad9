//! Predicate evaluator truth-table tests.

use artmeta_filter::{filter, matches};
use artmeta_model::{BoundedRange, CanonicalRecord, Criteria};

fn monet() -> CanonicalRecord {
    CanonicalRecord {
        source: "MuseumA".to_string(),
        id: "m-1".to_string(),
        artist: "Monet".to_string(),
        title: "Water Lilies".to_string(),
        category: "Painting".to_string(),
        width: Some(200.0),
        height: Some(300.0),
        ..CanonicalRecord::default()
    }
}

#[test]
fn unconstrained_criteria_include_everything_but_soft_deleted() {
    let criteria = Criteria::default();
    assert!(matches(&monet(), &criteria));

    let deleted = CanonicalRecord {
        is_deleted: "1".to_string(),
        ..monet()
    };
    assert!(!matches(&deleted, &criteria));
}

#[test]
fn soft_delete_overrides_otherwise_matching_criteria() {
    let criteria = Criteria {
        keyword: "water".to_string(),
        source: "MuseumA".to_string(),
        artist: "Monet".to_string(),
        category: "Painting".to_string(),
        ..Criteria::default()
    };
    let deleted = CanonicalRecord {
        is_deleted: "1".to_string(),
        ..monet()
    };
    assert!(matches(&monet(), &criteria));
    assert!(!matches(&deleted, &criteria));
}

#[test]
fn keyword_matches_artist_and_title_case_insensitively() {
    let record = monet();

    let by_artist = Criteria {
        keyword: "mon".to_string(),
        ..Criteria::default()
    };
    assert!(matches(&record, &by_artist));

    let by_title = Criteria {
        keyword: "LILIES".to_string(),
        ..Criteria::default()
    };
    assert!(matches(&record, &by_title));

    // The haystack joins artist and title with one space.
    let across_join = Criteria {
        keyword: "monet water".to_string(),
        ..Criteria::default()
    };
    assert!(matches(&record, &across_join));

    let miss = Criteria {
        keyword: "rembrandt".to_string(),
        ..Criteria::default()
    };
    assert!(!matches(&record, &miss));
}

#[test]
fn keyword_is_trimmed_before_matching() {
    let criteria = Criteria {
        keyword: "  mon  ".to_string(),
        ..Criteria::default()
    };
    assert!(matches(&monet(), &criteria));
}

#[test]
fn categorical_filters_compare_exactly_and_case_sensitively() {
    let record = monet();

    let exact = Criteria {
        artist: "Monet".to_string(),
        ..Criteria::default()
    };
    assert!(matches(&record, &exact));

    let wrong_case = Criteria {
        artist: "monet".to_string(),
        ..Criteria::default()
    };
    assert!(!matches(&record, &wrong_case));

    let wrong_source = Criteria {
        source: "MuseumB".to_string(),
        ..Criteria::default()
    };
    assert!(!matches(&record, &wrong_source));
}

#[test]
fn width_bounds_apply_to_the_record_value() {
    let record = monet();

    let inside = Criteria {
        width: BoundedRange::new(Some(150.0), Some(250.0)),
        ..Criteria::default()
    };
    assert!(matches(&record, &inside));

    let below_min = Criteria {
        width: BoundedRange::new(Some(250.0), None),
        ..Criteria::default()
    };
    assert!(!matches(&record, &below_min));

    let above_max = Criteria {
        width: BoundedRange::new(None, Some(150.0)),
        ..Criteria::default()
    };
    assert!(!matches(&record, &above_max));
}

#[test]
fn absent_dimensions_default_to_zero_at_comparison_time() {
    let record = CanonicalRecord {
        artist: "Rembrandt".to_string(),
        width: None,
        ..CanonicalRecord::default()
    };

    let active_min = Criteria {
        width: BoundedRange::new(Some(50.0), None),
        ..Criteria::default()
    };
    assert!(!matches(&record, &active_min));

    // With only a max bound, the defaulted 0 still qualifies.
    let active_max = Criteria {
        width: BoundedRange::new(None, Some(50.0)),
        ..Criteria::default()
    };
    assert!(matches(&record, &active_max));
}

#[test]
fn filter_returns_references_in_collection_order() {
    let records = vec![
        monet(),
        CanonicalRecord {
            artist: "Rembrandt".to_string(),
            title: "Self Portrait".to_string(),
            ..CanonicalRecord::default()
        },
        CanonicalRecord {
            artist: "Claude Monet".to_string(),
            title: "Haystacks".to_string(),
            ..CanonicalRecord::default()
        },
    ];
    let criteria = Criteria {
        keyword: "monet".to_string(),
        ..Criteria::default()
    };
    let visible = filter(&records, &criteria);
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].title, "Water Lilies");
    assert_eq!(visible[1].title, "Haystacks");
}

#[test]
fn identical_inputs_always_evaluate_the_same() {
    let record = monet();
    let criteria = Criteria {
        keyword: "water".to_string(),
        width: BoundedRange::new(Some(100.0), Some(300.0)),
        ..Criteria::default()
    };
    let first = matches(&record, &criteria);
    for _ in 0..10 {
        assert_eq!(matches(&record, &criteria), first);
    }
}
