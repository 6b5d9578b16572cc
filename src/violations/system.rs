//! Violations the engine itself reports.
//!
//! These never come from a check: they are how a unit that could not be
//! read, or a check that failed, shows up in a report.

use super::{Category, ViolationDef};

pub const INTERNAL_ERROR: ViolationDef =
    ViolationDef::new(Category::System, 0, "internal_error", "Internal error in check: {0}");
pub const SYNTAX_ERROR: ViolationDef =
    ViolationDef::new(Category::System, 1, "syntax_error", "Found syntax error: {0}");

pub const DEFINITIONS: &[ViolationDef] = &[
    INTERNAL_ERROR,
    SYNTAX_ERROR,
];
