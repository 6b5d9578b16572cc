//! Integration tests for the full lint pipeline.
//!
//! These tests run the shipped checks against the testdata fixtures and
//! check the codes and positions reported for each file.

use std::path::PathBuf;

use strictpy::{Config, Runner, UnitReport, ViolationCatalog};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn lint(name: &str) -> UnitReport {
    let catalog = ViolationCatalog::standard().expect("standard catalog should build");
    let runner = Runner::new(&catalog, &Config::default());
    runner.lint_file(&testdata_path().join(name))
}

/// (code, line, column) of each active violation, in emission order.
fn found(report: &UnitReport) -> Vec<(String, usize, usize)> {
    report
        .violations
        .iter()
        .map(|v| (v.display_code(), v.position.line, v.position.column))
        .collect()
}

fn expect(code: &str, line: usize, column: usize) -> (String, usize, usize) {
    (code.to_string(), line, column)
}

#[test]
fn test_json_unit_implicit_elif() {
    let report = lint("units/implicit_elif.json");
    assert_eq!(report.path, "generated.py");
    assert_eq!(found(&report), vec![expect("SP513", 4, 4)]);
    assert_eq!(report.violations[0].message, "Found implicit `elif` condition");
    assert!(report.faults.is_empty());
}

#[test]
fn test_json_unit_is_deterministic() {
    assert_eq!(lint("units/implicit_elif.json"), lint("units/implicit_elif.json"));
}

#[test]
fn test_json_unit_ignored_by_category() {
    let catalog = ViolationCatalog::standard().unwrap();
    let config = Config::parse_str("ignore:\n  - refactoring\n").unwrap();
    config.validate(&catalog).unwrap();

    let runner = Runner::new(&catalog, &config);
    let report = runner.lint_file(&testdata_path().join("units/implicit_elif.json"));
    assert!(report.violations.is_empty());
    assert!(report.suppressed.is_empty());
    assert_eq!(report.ignored, 1);
}

#[cfg(feature = "tree-sitter")]
mod python {
    use super::*;
    use strictpy::collect_files;

    #[test]
    fn test_implicit_elif_fixture() {
        let report = lint("implicit_elif.py");
        assert_eq!(found(&report), vec![expect("SP513", 5, 8)]);
    }

    #[test]
    fn test_complex_fixture() {
        let report = lint("complex.py");
        let codes: Vec<_> = found(&report);
        assert_eq!(codes.len(), 2, "{:?}", codes);

        // the module is visited before the functions it contains
        assert_eq!(codes[0], expect("SP232", 1, 0));
        assert_eq!(codes[1], expect("SP231", 1, 0));
        assert!(report.violations[1]
            .message
            .starts_with("Found function with too high cognitive complexity: "));
    }

    #[test]
    fn test_complex_fixture_within_raised_limits() {
        let catalog = ViolationCatalog::standard().unwrap();
        let config = Config {
            max_cognitive_score: 100,
            max_cognitive_average: 100,
            ..Default::default()
        };
        let runner = Runner::new(&catalog, &config);
        let report = runner.lint_file(&testdata_path().join("complex.py"));
        assert!(report.violations.is_empty(), "{:?}", report.violations);
    }

    #[test]
    fn test_decorators_fixture() {
        let report = lint("decorators.py");
        assert_eq!(
            found(&report),
            vec![expect("SP466", 11, 1), expect("SP466", 16, 2)]
        );
    }

    #[test]
    fn test_annotations_fixture() {
        let report = lint("annotations.py");
        assert_eq!(
            found(&report),
            vec![expect("SP320", 8, 19), expect("SP320", 15, 0)]
        );
    }

    #[test]
    fn test_noqa_fixture() {
        let report = lint("noqa.py");
        assert_eq!(found(&report), vec![expect("SP513", 21, 8)]);

        let suppressed: Vec<_> = report.suppressed.iter().map(|v| v.position.line).collect();
        assert_eq!(suppressed, vec![5, 13]);
    }

    #[test]
    fn test_clean_fixture() {
        let report = lint("clean.py");
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_broken_fixture_reports_syntax_error() {
        let report = lint("broken.py");
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].display_code(), "SP001");
        assert_eq!(report.violations[0].position.line, 1);
    }

    #[test]
    fn test_lint_testdata_directory() {
        let catalog = ViolationCatalog::standard().unwrap();
        let config = Config::default();
        let files = collect_files(&testdata_path(), &config).unwrap();
        // json units are only linted when named directly
        assert_eq!(files.len(), 7);

        let result = Runner::new(&catalog, &config).lint_files(&files);
        assert_eq!(result.files_scanned(), 7);
        assert!(!result.passed());
        assert_eq!(result.suppressed_count(), 2);
        assert_eq!(result.fault_count(), 0);

        let paths: Vec<_> = result.reports.iter().map(|r| r.path.clone()).collect();
        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
    }
}
