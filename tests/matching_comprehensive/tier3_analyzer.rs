//! Tier 3: Facade, configuration and export
//!
//! Covers failure ordering, config-driven thresholds and reject lists, and
//! the CSV written by the export command.

use std::io::Write;

use conceptmatch::{
    Analyzer, Error, MatchConfig, MatcherKind, MethodId, Persistence, ProjectId, CSV_HEADER,
};

use crate::test_utils::*;

// ============================================================================
// Failure ordering
// ============================================================================

/// Test: matching before any rebuild is a configuration failure
#[test]
fn test_match_before_rebuild() {
    let analyzer = Analyzer::new(store());
    let err = analyzer
        .compute_matches(PROJECT, MatcherKind::WeightedTfidf, None)
        .unwrap_err();
    assert!(matches!(err, Error::StemTreesMissing { project } if project == PROJECT));
}

/// Test: an out-of-range threshold fails before project data is read
#[test]
fn test_invalid_threshold_before_data() {
    let analyzer = Analyzer::new(store());
    for value in [f64::NAN, -0.5, 1.01] {
        let err = analyzer
            .compute_matches(PROJECT, MatcherKind::Overlap, Some(value))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidThreshold { .. }), "{}", value);
    }
}

/// Test: an unknown project is reported as such
#[test]
fn test_unknown_project() {
    let analyzer = Analyzer::new(store());
    let err = analyzer.rebuild_stem_trees(ProjectId(999)).unwrap_err();
    assert!(matches!(err, Error::ProjectNotFound { .. }));
}

/// Test: a missing reject file fails before any tree is replaced
#[test]
fn test_missing_reject_file_leaves_trees() {
    let store = store();
    Analyzer::new(store.clone())
        .rebuild_stem_trees(PROJECT)
        .unwrap();
    let before = store.method_stems(PROJECT).unwrap().unwrap();

    let config = MatchConfig::from_toml_str(
        "[reject_lists]\nmethods = \"/no/such/dir/rejected-word-list.txt\"\n",
    )
    .unwrap();
    let result = Analyzer::with_config(store.clone(), config);
    assert!(matches!(result, Err(Error::Configuration { .. })));

    let after = store.method_stems(PROJECT).unwrap().unwrap();
    assert!(std::sync::Arc::ptr_eq(&before, &after));
}

// ============================================================================
// Configuration
// ============================================================================

/// Test: config file supplies reject lists and default thresholds
#[test]
fn test_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut words = std::fs::File::create(dir.path().join("rejected-word-list.txt")).unwrap();
    writeln!(words, "get\nset\ncompute").unwrap();
    std::fs::write(
        dir.path().join("conceptmatch.toml"),
        "[reject_lists]\nmethods = \"rejected-word-list.txt\"\n\n[thresholds]\noverlap = 0.3\n",
    )
    .unwrap();

    let config = MatchConfig::from_path(dir.path().join("conceptmatch.toml")).unwrap();
    let store = store();
    let analyzer = Analyzer::with_config(store.clone(), config).unwrap();
    analyzer.rebuild_stem_trees(PROJECT).unwrap();

    let forest = store.method_stems(PROJECT).unwrap().unwrap();
    let root = forest.root_of(MethodId(11)).unwrap();
    assert_eq!(forest.term(root), "total");

    // overlap threshold comes from the file
    let map = analyzer
        .compute_matches(PROJECT, MatcherKind::Overlap, None)
        .unwrap();
    assert!(map.values().flatten().all(|m| m.weight >= 0.3));
}

/// Test: threshold-driven matchers refuse to run without one
#[test]
fn test_threshold_required() {
    let analyzer = analyzer();
    for kind in MatcherKind::ALL {
        let result = analyzer.compute_matches(PROJECT, kind, None);
        if kind.requires_threshold() {
            assert!(matches!(result, Err(Error::ThresholdRequired { .. })), "{}", kind);
        } else {
            assert!(result.is_ok(), "{}", kind);
        }
    }
}

// ============================================================================
// Listing and export
// ============================================================================

/// Test: the matcher listing covers every kind with a version
#[test]
fn test_matcher_listing() {
    let list = analyzer().matchers().unwrap();
    assert_eq!(list.len(), MatcherKind::ALL.len());
    for info in &list {
        assert_eq!(info.name.parse::<MatcherKind>().unwrap(), info.kind);
        assert!(!info.version.is_empty());
    }
}

/// Test: exported rows carry class, signature and concept name
#[test]
fn test_export_csv() {
    let analyzer = analyzer();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overlap.csv");

    let summary = analyzer
        .export_matches(PROJECT, MatcherKind::Overlap, Some(0.0), &path)
        .unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER));

    let rows: Vec<Vec<&str>> = lines.map(|l| l.split(';').collect()).collect();
    assert_eq!(rows.len(), summary.rows);
    assert!(rows.iter().all(|r| r.len() == 6 && r[4] == "false"));

    let battery = rows
        .iter()
        .find(|r| r[1] == "double getVoltage(Battery battery)" && r[2] == "BatteryPack")
        .unwrap();
    assert_eq!(battery[0], "BatteryController");
    assert!(battery[5].split(',').any(|t| t == "voltag"));
}
