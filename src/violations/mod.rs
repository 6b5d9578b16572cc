//! Violation definitions and the catalog that owns them.
//!
//! Every rule belongs to one of seven categories. Category *i* owns the
//! code block `[i*100, i*100+99]`, so the numbering doubles as a public
//! contract: codes are never reused and new rules are appended to the
//! block of their category.
//!
//! Definitions are `const` values declared per category module; checks
//! emit instances of them through the engine, which verifies that the
//! definition is part of the catalog the pass runs with.

pub mod best_practices;
mod catalog;
pub mod complexity;
pub mod consistency;
pub mod naming;
pub mod oop;
pub mod refactoring;
pub mod system;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::syntax::Position;

pub use catalog::{CatalogError, ViolationCatalog};

/// Prefix used when displaying violation codes.
pub const CODE_PREFIX: &str = "SP";

/// Rule groups, in code-block order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    System,
    Naming,
    Complexity,
    Consistency,
    BestPractices,
    Refactoring,
    Oop,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::System,
        Category::Naming,
        Category::Complexity,
        Category::Consistency,
        Category::BestPractices,
        Category::Refactoring,
        Category::Oop,
    ];

    /// Position of the category in code-block order.
    pub fn index(&self) -> usize {
        match self {
            Category::System => 0,
            Category::Naming => 1,
            Category::Complexity => 2,
            Category::Consistency => 3,
            Category::BestPractices => 4,
            Category::Refactoring => 5,
            Category::Oop => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// First code of the block owned by this category.
    pub fn base_code(&self) -> u16 {
        self.index() as u16 * 100
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::System => "system",
            Category::Naming => "naming",
            Category::Complexity => "complexity",
            Category::Consistency => "consistency",
            Category::BestPractices => "best_practices",
            Category::Refactoring => "refactoring",
            Category::Oop => "oop",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rule definition: code, identifier and message template.
///
/// Templates may contain one `{0}` placeholder filled in at emission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViolationDef {
    pub code: u16,
    pub name: &'static str,
    pub template: &'static str,
    pub category: Category,
    /// Definitions are leaf rules; nothing specializes them further.
    pub is_final: bool,
}

impl ViolationDef {
    pub const fn new(
        category: Category,
        code: u16,
        name: &'static str,
        template: &'static str,
    ) -> Self {
        Self {
            code,
            name,
            template,
            category,
            is_final: true,
        }
    }

    pub fn display_code(&self) -> String {
        format_code(self.code)
    }

    /// Render the message, substituting `{0}` with `arg` when given.
    pub fn render(&self, arg: Option<&str>) -> String {
        match arg {
            Some(arg) => self.template.replace("{0}", arg),
            None => self.template.replace(": {0}", "").replace("{0}", ""),
        }
    }
}

/// Format a numeric code for display (`513` -> `SP513`).
pub fn format_code(code: u16) -> String {
    format!("{}{:03}", CODE_PREFIX, code)
}

/// Parse a displayed or bare code (`SP513`, `513`, `sp513`).
pub fn parse_code(s: &str) -> Option<u16> {
    let s = s.trim();
    let digits = match s.get(..CODE_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(CODE_PREFIX) => &s[CODE_PREFIX.len()..],
        _ => s,
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// A rule firing at a concrete source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub code: u16,
    pub message: String,
    pub category: Category,
    pub is_final: bool,
    pub position: Position,
}

impl Violation {
    pub fn new(def: &ViolationDef, position: Position, arg: Option<&str>) -> Self {
        Self {
            code: def.code,
            message: def.render(arg),
            category: def.category,
            is_final: def.is_final,
            position,
        }
    }

    pub fn display_code(&self) -> String {
        format_code(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_indices_follow_declaration_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
            assert_eq!(Category::from_index(i), Some(*category));
            assert_eq!(Category::parse(category.as_str()), Some(*category));
        }
        assert_eq!(Category::from_index(7), None);
        assert_eq!(Category::Oop.base_code(), 600);
    }

    #[test]
    fn test_render_template() {
        let def = complexity::COGNITIVE_COMPLEXITY;
        assert_eq!(
            def.render(Some("14")),
            "Found function with too high cognitive complexity: 14"
        );
        assert_eq!(
            def.render(None),
            "Found function with too high cognitive complexity"
        );
        assert_eq!(
            refactoring::IMPLICIT_ELIF.render(None),
            refactoring::IMPLICIT_ELIF.template
        );
    }

    #[test]
    fn test_code_formatting_and_parsing() {
        assert_eq!(format_code(0), "SP000");
        assert_eq!(format_code(513), "SP513");
        assert_eq!(parse_code("SP513"), Some(513));
        assert_eq!(parse_code("sp007"), Some(7));
        assert_eq!(parse_code("231"), Some(231));
        assert_eq!(parse_code("SP"), None);
        assert_eq!(parse_code("naming"), None);
        assert_eq!(parse_code("aé1"), None);
        assert_eq!(parse_code("\u{212A}P513"), None);
        assert_eq!(parse_code("é"), None);
    }
}
