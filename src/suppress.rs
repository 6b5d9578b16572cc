//! Inline suppression of violations via comments.
//!
//! Supports the usual Python linter comments:
//! - `x = 1  # noqa` silences every violation reported on that line
//! - `x = 1  # noqa: SP513, SP231` silences only the listed codes

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

use crate::engine::UnitReport;
use crate::syntax::{Token, TokenKind};
use crate::violations::{parse_code, Violation};

lazy_static::lazy_static! {
    static ref NOQA: Regex =
        Regex::new(r"#\s*(?i:noqa)\b(?::\s*(?P<codes>[A-Za-z]*[0-9]+(?:[,\s]+[A-Za-z]*[0-9]+)*))?")
            .unwrap();
}

/// An inline `noqa` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suppression {
    pub line: usize,
    /// Codes to silence; `None` silences everything on the line.
    pub codes: Option<HashSet<u16>>,
}

impl Suppression {
    pub fn matches(&self, violation: &Violation) -> bool {
        if violation.position.line != self.line {
            return false;
        }
        match &self.codes {
            Some(codes) => codes.contains(&violation.code),
            None => true,
        }
    }
}

/// Parse a single comment; `None` if it is not a `noqa` directive.
pub fn parse_comment(line: usize, comment: &str) -> Option<Suppression> {
    let caps = NOQA.captures(comment)?;
    let codes = caps.name("codes").map(|m| {
        m.as_str()
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter_map(parse_code)
            .collect()
    });
    Some(Suppression { line, codes })
}

/// Collect directives from the comment tokens of a unit.
pub fn parse_suppressions(tokens: &[Token]) -> Vec<Suppression> {
    tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Comment)
        .filter_map(|t| parse_comment(t.position.line, &t.text))
        .collect()
}

/// Separate violations into active and suppressed.
pub fn filter_suppressed(
    violations: Vec<Violation>,
    suppressions: &[Suppression],
) -> (Vec<Violation>, Vec<Violation>) {
    violations
        .into_iter()
        .partition(|v| !suppressions.iter().any(|s| s.matches(v)))
}

/// Move violations silenced by `noqa` comments in `tokens` to
/// `report.suppressed`.
pub fn apply_suppressions(report: &mut UnitReport, tokens: &[Token]) {
    let suppressions = parse_suppressions(tokens);
    if suppressions.is_empty() {
        return;
    }
    let violations = std::mem::take(&mut report.violations);
    let (active, suppressed) = filter_suppressed(violations, &suppressions);
    report.violations = active;
    report.suppressed.extend(suppressed);
}

/// Drop violations whose code is turned off by configuration, counting
/// them in `report.ignored`.
pub fn drop_ignored(report: &mut UnitReport, ignored: &HashSet<u16>) {
    if ignored.is_empty() {
        return;
    }
    let before = report.violations.len();
    report.violations.retain(|v| !ignored.contains(&v.code));
    report.ignored += before - report.violations.len();
}
