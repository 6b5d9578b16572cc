//! Lint runner that ties the frontend, the engine and suppression together.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globset::GlobSet;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::checks::standard_registry;
use crate::config::{is_test_file, Config};
use crate::engine::{CheckRegistry, Engine, UnitReport};
use crate::suppress::{apply_suppressions, drop_ignored};
use crate::syntax::{load_unit, FrontendError, Position, SourceUnit};
use crate::violations::system::{INTERNAL_ERROR, SYNTAX_ERROR};
use crate::violations::{Violation, ViolationCatalog};

/// Extensions picked up when walking a directory.
const SOURCE_EXTENSIONS: &[&str] = &["py", "pyi"];

/// Directories never descended into.
const SKIPPED_DIRS: &[&str] = &[
    "__pycache__",
    "node_modules",
    "venv",
    "site-packages",
    "build",
    "dist",
];

/// Outcome of linting a set of files.
#[derive(Debug, Clone, Default)]
pub struct LintResult {
    /// One report per file, sorted by path.
    pub reports: Vec<UnitReport>,
}

impl LintResult {
    pub fn files_scanned(&self) -> usize {
        self.reports.len()
    }

    pub fn violation_count(&self) -> usize {
        self.reports.iter().map(|r| r.violations.len()).sum()
    }

    pub fn suppressed_count(&self) -> usize {
        self.reports.iter().map(|r| r.suppressed.len()).sum()
    }

    pub fn ignored_count(&self) -> usize {
        self.reports.iter().map(|r| r.ignored).sum()
    }

    pub fn fault_count(&self) -> usize {
        self.reports.iter().map(|r| r.faults.len()).sum()
    }

    pub fn passed(&self) -> bool {
        self.violation_count() == 0
    }
}

/// Lints source units with the shipped checks.
pub struct Runner<'a> {
    catalog: &'a ViolationCatalog,
    registry: CheckRegistry,
    ignored: HashSet<u16>,
}

impl<'a> Runner<'a> {
    /// Create a runner with the standard checks configured from `config`.
    pub fn new(catalog: &'a ViolationCatalog, config: &Config) -> Self {
        Self::with_registry(catalog, standard_registry(config), config)
    }

    /// Create a runner with a custom set of checks.
    pub fn with_registry(
        catalog: &'a ViolationCatalog,
        registry: CheckRegistry,
        config: &Config,
    ) -> Self {
        Self {
            catalog,
            registry,
            ignored: config.ignored_codes(catalog),
        }
    }

    /// Analyze one unit, then fold faults into the report and apply
    /// suppressions and ignores.
    pub fn lint_unit(&self, unit: &SourceUnit) -> UnitReport {
        let mut report = Engine::new(self.catalog, &self.registry).analyze(unit);

        for fault in &report.faults {
            let detail = format!("{}: {}", fault.check, fault.message);
            report.violations.push(Violation::new(
                &INTERNAL_ERROR,
                fault.position,
                Some(detail.as_str()),
            ));
        }

        apply_suppressions(&mut report, &unit.tokens);
        drop_ignored(&mut report, &self.ignored);
        report
    }

    /// Load and lint one file. Files the frontend cannot read produce a
    /// report with a single syntax error.
    pub fn lint_file(&self, path: &Path) -> UnitReport {
        match load_unit(path) {
            Ok(unit) => self.lint_unit(&unit),
            Err(e) => self.frontend_failure(path, &e),
        }
    }

    /// Lint files in parallel. Reports come back sorted by path.
    pub fn lint_files(&self, files: &[PathBuf]) -> LintResult {
        let mut reports: Vec<UnitReport> = files.par_iter().map(|f| self.lint_file(f)).collect();
        reports.sort_by(|a, b| a.path.cmp(&b.path));
        LintResult { reports }
    }

    fn frontend_failure(&self, path: &Path, error: &FrontendError) -> UnitReport {
        log::warn!("{}: {}", path.display(), error);
        let mut report = UnitReport::new(path.to_string_lossy());
        let position = error.position().unwrap_or_else(|| Position::new(1, 0));
        report.violations.push(Violation::new(
            &SYNTAX_ERROR,
            position,
            Some(error.to_string().as_str()),
        ));
        drop_ignored(&mut report, &self.ignored);
        report
    }
}

/// Collect files to lint under `root`.
///
/// A file given directly is always linted; directories are walked for
/// Python sources, honoring exclusions and the test-file setting.
pub fn collect_files(root: &Path, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let excluded = config.exclusion_matcher()?;
    let include_tests = config.should_include_test_files();
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !name.starts_with('.') && !SKIPPED_DIRS.contains(&name.as_ref())
        })
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !SOURCE_EXTENSIONS.contains(&ext) {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        if is_excluded(&excluded, relative) {
            log::debug!("excluded {}", path.display());
            continue;
        }
        if !include_tests && is_test_file(relative) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

fn is_excluded(matcher: &GlobSet, relative: &Path) -> bool {
    !matcher.is_empty() && matcher.is_match(relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Node, NodeKind, Token, TokenKind};
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, content: &str) -> PathBuf {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_collect_files_filters() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "app/models.py", "x = 1\n");
        write(temp.path(), "app/stubs.pyi", "x: int\n");
        write(temp.path(), "app/data.json", "{}");
        write(temp.path(), "app/migrations/0001.py", "x = 1\n");
        write(temp.path(), "tests/test_models.py", "x = 1\n");
        write(temp.path(), ".venv/lib.py", "x = 1\n");
        write(temp.path(), "app/__pycache__/models.py", "x = 1\n");

        let config = Config {
            excluded_paths: vec!["**/migrations/**".to_string()],
            include_test_files: Some(false),
            ..Default::default()
        };
        let files = collect_files(temp.path(), &config).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(temp.path()).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, vec!["app/models.py", "app/stubs.pyi"]);

        let with_tests = collect_files(temp.path(), &Config::default()).unwrap();
        assert_eq!(with_tests.len(), 4);
    }

    #[test]
    fn test_single_file_is_always_collected() {
        let temp = TempDir::new().unwrap();
        let unit = write(temp.path(), "unit.json", "{}");
        assert_eq!(collect_files(&unit, &Config::default()).unwrap(), vec![unit]);
    }

    #[test]
    fn test_unreadable_unit_becomes_syntax_error() {
        let temp = TempDir::new().unwrap();
        let broken = write(temp.path(), "broken.json", "{ not json");
        let catalog = ViolationCatalog::standard().unwrap();
        let runner = Runner::new(&catalog, &Config::default());

        let report = runner.lint_file(&broken);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].code, 1);
        assert!(report.faults.is_empty());
    }

    #[test]
    fn test_noqa_and_ignore_applied() {
        let catalog = ViolationCatalog::standard().unwrap();
        let config = Config {
            max_cognitive_score: 1,
            max_cognitive_average: 1,
            ignore: vec!["SP232".to_string()],
            ..Default::default()
        };
        let runner = Runner::new(&catalog, &config);

        // def f(a):  # noqa: SP231
        //     if a:
        //         if a: pass
        let body = Node::new(NodeKind::Block, Position::new(2, 4)).with_children(vec![Node::new(
            NodeKind::If,
            Position::new(2, 4),
        )
        .with_children(vec![Node::new(NodeKind::Block, Position::new(3, 8))
            .with_children(vec![Node::new(NodeKind::If, Position::new(3, 8))])])]);
        let tree = Node::new(NodeKind::Module, Position::new(1, 0)).with_children(vec![
            Node::named(NodeKind::FunctionDef, "f", Position::new(1, 0)).with_children(vec![body]),
        ]);
        let tokens = vec![Token::new(
            TokenKind::Comment,
            "# noqa: SP231",
            Position::new(1, 12),
        )];
        let unit = SourceUnit::new("m.py", tree, tokens);

        let report = runner.lint_unit(&unit);
        assert!(report.violations.is_empty(), "{:?}", report.violations);
        assert_eq!(report.suppressed.len(), 1);
        assert_eq!(report.suppressed[0].code, 231);
        assert_eq!(report.ignored, 1);
    }

    #[test]
    fn test_non_ascii_noqa_does_not_abort_run() {
        let catalog = ViolationCatalog::standard().unwrap();
        let runner = Runner::new(&catalog, &Config::default());
        let tokens = vec![
            Token::new(TokenKind::Name, "x", Position::new(1, 0)),
            Token::new(TokenKind::Comment, "# noqa: \u{212A}1", Position::new(1, 7)),
        ];
        let tree = Node::new(NodeKind::Module, Position::new(1, 0));
        let unit = SourceUnit::new("kelvin.py", tree, tokens);

        let report = runner.lint_unit(&unit);
        assert!(report.is_clean());
    }

    #[test]
    fn test_lint_result_counts() {
        let mut clean = UnitReport::new("a.py");
        clean.suppressed.push(Violation::new(&SYNTAX_ERROR, Position::new(1, 0), None));
        let mut dirty = UnitReport::new("b.py");
        dirty
            .violations
            .push(Violation::new(&SYNTAX_ERROR, Position::new(1, 0), None));

        let result = LintResult {
            reports: vec![clean, dirty],
        };
        assert_eq!(result.files_scanned(), 2);
        assert_eq!(result.violation_count(), 1);
        assert_eq!(result.suppressed_count(), 1);
        assert_eq!(result.ignored_count(), 0);
        assert!(!result.passed());
    }
}
