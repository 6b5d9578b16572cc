//! Output formatting for lint results and the violation catalog.
//!
//! Two formats:
//! - Pretty: colored terminal output for humans
//! - JSON: structured output for tooling

use colored::*;
use serde::{Deserialize, Serialize};

use crate::engine::CheckFault;
use crate::runner::LintResult;
use crate::violations::{Category, Violation, ViolationCatalog, ViolationDef};

// =============================================================================
// JSON Format
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    pub passed: bool,
    pub files_scanned: usize,
    pub violations: Vec<JsonViolation>,
    pub suppressed_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suppressed: Vec<JsonViolation>,
    /// Violations dropped by the `ignore` setting.
    #[serde(default)]
    pub ignored_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faults: Vec<JsonFault>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonViolation {
    pub code: String,
    pub category: String,
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonFault {
    pub check: String,
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// Catalog entry as listed by `strictpy codes`.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonCode {
    pub code: String,
    pub name: String,
    pub category: String,
    pub message: String,
}

/// Build the JSON report. Violations are ordered by file, then in the
/// order they were emitted.
pub fn json_report(path: &str, result: &LintResult, show_suppressed: bool) -> JsonReport {
    let mut violations = Vec::new();
    let mut suppressed = Vec::new();
    let mut faults = Vec::new();

    for report in &result.reports {
        violations.extend(report.violations.iter().map(|v| violation_to_json(&report.path, v)));
        if show_suppressed {
            suppressed.extend(report.suppressed.iter().map(|v| violation_to_json(&report.path, v)));
        }
        faults.extend(report.faults.iter().map(|f| fault_to_json(&report.path, f)));
    }

    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        passed: result.passed(),
        files_scanned: result.files_scanned(),
        violations,
        suppressed_count: result.suppressed_count(),
        suppressed,
        ignored_count: result.ignored_count(),
        faults,
    }
}

/// Write results in JSON format.
pub fn write_json(path: &str, result: &LintResult, show_suppressed: bool) -> anyhow::Result<()> {
    let report = json_report(path, result, show_suppressed);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

fn violation_to_json(file: &str, v: &Violation) -> JsonViolation {
    JsonViolation {
        code: v.display_code(),
        category: v.category.as_str().to_string(),
        file: file.to_string(),
        line: v.position.line,
        column: v.position.column,
        message: v.message.clone(),
    }
}

fn fault_to_json(file: &str, f: &CheckFault) -> JsonFault {
    JsonFault {
        check: f.check.clone(),
        file: file.to_string(),
        line: f.position.line,
        column: f.position.column,
        message: f.message.clone(),
    }
}

/// Catalog entries, optionally restricted to one category, in code order.
pub fn catalog_entries(catalog: &ViolationCatalog, category: Option<Category>) -> Vec<JsonCode> {
    catalog
        .iter()
        .filter(|def| category.map_or(true, |c| def.category == c))
        .map(code_to_json)
        .collect()
}

fn code_to_json(def: &ViolationDef) -> JsonCode {
    JsonCode {
        code: def.display_code(),
        name: def.name.to_string(),
        category: def.category.as_str().to_string(),
        message: def.template.to_string(),
    }
}

/// Write the catalog listing in JSON format.
pub fn write_codes_json(
    catalog: &ViolationCatalog,
    category: Option<Category>,
) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&catalog_entries(catalog, category))?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(path: &str, result: &LintResult, show_suppressed: bool) {
    println!();
    print!("  ");
    print!("{}", "strictpy".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Scanning: ".dimmed());
    println!("{} ({} files)", path, result.files_scanned());
    println!();

    if result.violation_count() > 0 {
        write_violations(result);
    }

    if result.suppressed_count() > 0 {
        write_suppressed(result, show_suppressed);
        println!();
    }

    write_final_status(result);
    println!();
}

fn write_violations(result: &LintResult) {
    println!("  {} ({}):", "Violations".bold(), result.violation_count());
    println!();

    for report in &result.reports {
        for v in &report.violations {
            print!("    {} ", v.display_code().red());
            print!("{}", report.path.blue());
            println!("{}", format!(":{}:{}", v.position.line, v.position.column).dimmed());
            println!("          {}", v.message);
        }
    }
    println!();
}

fn write_suppressed(result: &LintResult, show_details: bool) {
    println!("  {} ({}):", "Suppressed".dimmed(), result.suppressed_count());

    if !show_details {
        println!("    {}", "(use --show-suppressed to see details)".dimmed());
        return;
    }

    for report in &result.reports {
        for v in &report.suppressed {
            print!("    {:<8}", v.display_code().dimmed());
            print!("{}", report.path.blue());
            println!("{}", format!(":{}:{}", v.position.line, v.position.column).dimmed());
        }
    }
}

fn write_final_status(result: &LintResult) {
    let count = result.violation_count();
    let plural = if count != 1 { "s" } else { "" };
    if result.passed() {
        print!("  {}", "✓ PASS".green());
    } else {
        print!("  {}", "✗ FAIL".red());
    }
    print!("  {} violation{}", count, plural);

    let ignored = result.ignored_count();
    if ignored > 0 {
        print!("  {}", format!("({} ignored by config)", ignored).dimmed());
    }

    let faults = result.fault_count();
    if faults > 0 {
        print!("  {}", format!("({} check faults)", faults).yellow());
    }
    println!();
}

/// Write the catalog listing grouped by category.
pub fn write_codes_pretty(catalog: &ViolationCatalog, category: Option<Category>) {
    for cat in catalog.categories() {
        if category.is_some_and(|c| c != cat) {
            continue;
        }
        println!();
        println!("  {} ({})", cat.as_str().bold(), cat.base_code());
        for def in catalog.definitions(cat) {
            print!("    {} ", def.display_code().cyan());
            println!("{:<32} {}", def.name, def.render(None).dimmed());
        }
    }
    println!();
}
