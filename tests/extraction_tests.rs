//! Integration tests for tree extraction
//!
//! Exercises the full open-tree / write-CSV path over in-memory trees:
//! - NaN events dropped, others written in tree order
//! - Header and row widths agree
//! - Repeated runs produce identical files
//! - Missing tree or leaf leaves no output file behind

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tree2csv::{
    extract_from, ExtractError, ExtractOptions, MemorySource, MemoryTree, DEFAULT_FIELDS,
    SPECIAL_FIELDS,
};

/// Tree holding every default field, with four sub-values per leaf
///
/// Sub-value `k` of field number `f` in event `e` is `100 * e + 10 * f + k`.
fn synthetic_tree(iminc: &[f64]) -> MemoryTree {
    let mut tree = MemoryTree::new("mdps5").with_scalar_leaf("iminc", iminc.to_vec());
    for (f, field) in DEFAULT_FIELDS.iter().enumerate() {
        let values = (0..iminc.len())
            .map(|e| {
                (0..4)
                    .map(|k| (100 * e + 10 * f + k) as f64)
                    .collect::<Vec<f64>>()
            })
            .collect();
        tree = tree.with_leaf(field, values);
    }
    tree
}

fn with_value(tree: MemoryTree, field: &str, event: usize, index: usize, value: f64) -> MemoryTree {
    let events = 3;
    let f = DEFAULT_FIELDS.iter().position(|name| *name == field).unwrap();
    let values = (0..events)
        .map(|e| {
            (0..4)
                .map(|k| {
                    if e == event && k == index {
                        value
                    } else {
                        (100 * e + 10 * f + k) as f64
                    }
                })
                .collect()
        })
        .collect();
    tree.with_leaf(field, values)
}

fn run(tree: MemoryTree, output: &Path) -> tree2csv::Result<tree2csv::ExtractReport> {
    let mut source = MemorySource::new(Path::new("synthetic.root")).with_tree(tree);
    extract_from(&mut source, output, &ExtractOptions::default())
}

#[test]
fn test_nan_event_is_excluded() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("events.csv");

    let tree = with_value(synthetic_tree(&[1.0, 1.0, 1.0]), "phi", 1, 1, f64::NAN);
    let report = run(tree, &output).expect("extraction should succeed");

    assert_eq!(report.total_events, 3);
    assert_eq!(report.written_rows, 2);
    assert_eq!(report.rejected_events, 1);
    assert_eq!(report.csv_path.as_deref(), Some(output.as_path()));

    let content = fs::read_to_string(&output).expect("Failed to read CSV");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3, "header plus two data rows");
    assert_eq!(lines[0], DEFAULT_FIELDS.join(","));
    assert!(lines[1].starts_with("1.0,11.0,21.0,"));
    assert!(lines[2].starts_with("201.0,211.0,221.0,"));
    assert!(content.ends_with('\n'));
}

#[test]
fn test_row_width_matches_header() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("events.csv");

    run(synthetic_tree(&[0.0, 2.0, 3.0]), &output).expect("extraction should succeed");

    let content = fs::read_to_string(&output).expect("Failed to read CSV");
    let mut lines = content.lines();
    let header_fields = lines.next().expect("header").split(',').count();
    assert_eq!(header_fields, DEFAULT_FIELDS.len());

    for (i, line) in lines.enumerate() {
        let field_count = line.split(',').count();
        assert_eq!(
            field_count,
            header_fields,
            "Row {} has {} fields, but header has {}",
            i + 1,
            field_count,
            header_fields
        );
        assert!(!line.contains("nan"), "Row {} contains NaN: {}", i + 1, line);
    }
}

#[test]
fn test_special_fields_read_first_sub_value() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("events.csv");

    run(synthetic_tree(&[3.0, 3.0, 3.0]), &output).expect("extraction should succeed");

    let content = fs::read_to_string(&output).expect("Failed to read CSV");
    let lines: Vec<&str> = content.lines().collect();
    let header: Vec<&str> = lines[0].split(',').collect();
    let row: Vec<&str> = lines[1].split(',').collect();

    for (f, field) in header.iter().enumerate() {
        let expected_index = if SPECIAL_FIELDS.contains(field) { 0 } else { 3 };
        let expected = format!("{}.0", 10 * f + expected_index);
        assert_eq!(row[f], expected, "field {field}");
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let first = temp_dir.path().join("first.csv");
    let second = temp_dir.path().join("second.csv");

    let tree = with_value(synthetic_tree(&[2.0, 0.0, 1.0]), "en", 2, 1, f64::NAN);
    run(tree.clone(), &first).expect("first run");
    run(tree, &second).expect("second run");

    let first = fs::read(&first).expect("Failed to read first CSV");
    let second = fs::read(&second).expect("Failed to read second CSV");
    assert_eq!(first, second);
}

#[test]
fn test_output_is_truncated() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("events.csv");
    fs::write(&output, "stale content\n".repeat(1000)).expect("Failed to seed output");

    run(synthetic_tree(&[0.0]), &output).expect("extraction should succeed");

    let content = fs::read_to_string(&output).expect("Failed to read CSV");
    assert!(!content.contains("stale"));
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_missing_tree_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("events.csv");

    let mut source = MemorySource::new(Path::new("synthetic.root"))
        .with_tree(MemoryTree::new("mdps4").with_scalar_leaf("iminc", vec![0.0]));
    let result = extract_from(&mut source, &output, &ExtractOptions::default());

    match result {
        Err(err @ ExtractError::TreeNotFound { .. }) => assert!(err.is_reported()),
        other => panic!("expected TreeNotFound, got {other:?}"),
    }
    assert!(!output.exists(), "no CSV should be created");
}

#[test]
fn test_missing_leaf_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("events.csv");

    let tree = MemoryTree::new("mdps5")
        .with_scalar_leaf("iminc", vec![0.0])
        .with_scalar_leaf("xcore", vec![1.0]);
    let result = run(tree, &output);

    assert!(matches!(result, Err(ExtractError::MissingLeaf(name)) if name == "ycore"));
    assert!(!output.exists(), "no CSV should be created");
}

#[test]
fn test_custom_field_list() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("subset.csv");

    let mut source =
        MemorySource::new(Path::new("synthetic.root")).with_tree(synthetic_tree(&[1.0, 2.0]));
    let options = ExtractOptions {
        tree_name: "mdps5".to_string(),
        fields: vec!["mir_nmir".to_string(), "en".to_string()],
    };
    extract_from(&mut source, &output, &options).expect("extraction should succeed");

    let content = fs::read_to_string(&output).expect("Failed to read CSV");
    assert_eq!(content, "mir_nmir,en\n190.0,61.0\n290.0,162.0\n");
}
