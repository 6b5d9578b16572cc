use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::{
    best_practices, complexity, consistency, format_code, naming, oop, refactoring, system,
    Category, ViolationDef,
};

fn sp(code: &u16) -> String {
    format_code(*code)
}

/// Codes inside a category must be adjacent or leave room for at least two
/// future codes; a hole of exactly one code is not allowed.
const FORBIDDEN_GAP: u16 = 2;

/// Structural defects found while building a catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("expected {expected} categories, found {found}")]
    CategoryCount { expected: usize, found: usize },

    #[error("category group #{position} is {found}, expected {expected}")]
    CategoryOrder {
        position: usize,
        expected: Category,
        found: Category,
    },

    #[error("category {0} declares no violations")]
    EmptyCategory(Category),

    #[error("{} is declared as {declared} but listed under {group}", sp(.code))]
    WrongCategory {
        code: u16,
        declared: Category,
        group: Category,
    },

    #[error("duplicate violation code {}", sp(.0))]
    DuplicateCode(u16),

    #[error("duplicate message template {template:?} ({} and {})", sp(.first), sp(.second))]
    DuplicateMessage {
        template: String,
        first: u16,
        second: u16,
    },

    #[error("{} is not final", sp(.0))]
    NotFinal(u16),

    #[error("{} is outside the code block of {category}", sp(.code))]
    OutOfRange { code: u16, category: Category },

    #[error("{category} must start at {}, starts at {}", sp(.expected), sp(.found))]
    WrongStart {
        category: Category,
        expected: u16,
        found: u16,
    },

    #[error("{category}: gap between {} and {} leaves a single free code", sp(.previous), sp(.code))]
    BadGap {
        category: Category,
        previous: u16,
        code: u16,
    },
}

/// The full set of violation definitions a pass runs with.
///
/// Built once, validated on construction and read-only afterwards. Passed
/// to the engine by reference.
#[derive(Debug, Clone)]
pub struct ViolationCatalog {
    groups: Vec<(Category, Vec<ViolationDef>)>,
    by_code: HashMap<u16, ViolationDef>,
}

impl ViolationCatalog {
    /// Catalog of every rule shipped with the crate.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::build(&[
            (Category::System, system::DEFINITIONS),
            (Category::Naming, naming::DEFINITIONS),
            (Category::Complexity, complexity::DEFINITIONS),
            (Category::Consistency, consistency::DEFINITIONS),
            (Category::BestPractices, best_practices::DEFINITIONS),
            (Category::Refactoring, refactoring::DEFINITIONS),
            (Category::Oop, oop::DEFINITIONS),
        ])
    }

    /// Build and validate a catalog from per-category groups given in
    /// category order.
    pub fn build(groups: &[(Category, &[ViolationDef])]) -> Result<Self, CatalogError> {
        if groups.len() != Category::ALL.len() {
            return Err(CatalogError::CategoryCount {
                expected: Category::ALL.len(),
                found: groups.len(),
            });
        }

        let mut by_code: HashMap<u16, ViolationDef> = HashMap::new();
        let mut templates: HashMap<&str, u16> = HashMap::new();
        let mut sorted_groups = Vec::with_capacity(groups.len());

        for (position, (category, defs)) in groups.iter().enumerate() {
            let expected = Category::ALL[position];
            if *category != expected {
                return Err(CatalogError::CategoryOrder {
                    position,
                    expected,
                    found: *category,
                });
            }
            if defs.is_empty() {
                return Err(CatalogError::EmptyCategory(*category));
            }

            for def in defs.iter() {
                if def.category != *category {
                    return Err(CatalogError::WrongCategory {
                        code: def.code,
                        declared: def.category,
                        group: *category,
                    });
                }
                if !def.is_final {
                    return Err(CatalogError::NotFinal(def.code));
                }
                if by_code.insert(def.code, *def).is_some() {
                    return Err(CatalogError::DuplicateCode(def.code));
                }
                if let Some(first) = templates.insert(def.template, def.code) {
                    return Err(CatalogError::DuplicateMessage {
                        template: def.template.to_string(),
                        first,
                        second: def.code,
                    });
                }
            }

            let mut sorted = defs.to_vec();
            sorted.sort_by_key(|d| d.code);
            validate_numbering(*category, &sorted)?;
            sorted_groups.push((*category, sorted));
        }

        Ok(Self {
            groups: sorted_groups,
            by_code,
        })
    }

    /// Categories in code-block order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.groups.iter().map(|(c, _)| *c)
    }

    /// Definitions of one category, ordered by code.
    pub fn definitions(&self, category: Category) -> &[ViolationDef] {
        &self.groups[category.index()].1
    }

    /// All definitions, ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = &ViolationDef> {
        self.groups.iter().flat_map(|(_, defs)| defs.iter())
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    pub fn get(&self, code: u16) -> Option<&ViolationDef> {
        self.by_code.get(&code)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&ViolationDef> {
        self.iter().find(|d| d.name == name)
    }

    /// Definition at `offset` inside the code block of `category`.
    pub fn lookup(&self, category: Category, offset: u16) -> Option<&ViolationDef> {
        if offset > 99 {
            return None;
        }
        self.get(category.base_code() + offset)
    }

    /// Category that owns the block `code` falls in, if any.
    pub fn category_of(&self, code: u16) -> Option<Category> {
        Category::from_index((code / 100) as usize)
    }

    /// Whether exactly this definition is registered.
    pub fn contains(&self, def: &ViolationDef) -> bool {
        self.by_code.get(&def.code) == Some(def)
    }

    /// Codes of every registered definition.
    pub fn codes(&self) -> HashSet<u16> {
        self.by_code.keys().copied().collect()
    }
}

fn validate_numbering(category: Category, sorted: &[ViolationDef]) -> Result<(), CatalogError> {
    let base = category.base_code();
    let last = base + 99;

    for def in sorted {
        if def.code < base || def.code > last {
            return Err(CatalogError::OutOfRange {
                code: def.code,
                category,
            });
        }
    }

    if let Some(first) = sorted.first() {
        if first.code != base {
            return Err(CatalogError::WrongStart {
                category,
                expected: base,
                found: first.code,
            });
        }
    }

    for pair in sorted.windows(2) {
        if pair[1].code - pair[0].code == FORBIDDEN_GAP {
            return Err(CatalogError::BadGap {
                category,
                previous: pair[0].code,
                code: pair[1].code,
            });
        }
    }

    Ok(())
}
