//! Naming rules.

use super::{Category, ViolationDef};

pub const WRONG_MODULE_NAME: ViolationDef =
    ViolationDef::new(Category::Naming, 100, "wrong_module_name", "Found wrong module name");
pub const WRONG_MODULE_MAGIC_NAME: ViolationDef = ViolationDef::new(
    Category::Naming,
    101,
    "wrong_module_magic_name",
    "Found wrong module magic name",
);
pub const WRONG_MODULE_NAME_PATTERN: ViolationDef = ViolationDef::new(
    Category::Naming,
    102,
    "wrong_module_name_pattern",
    "Found wrong module name pattern",
);
pub const WRONG_VARIABLE_NAME: ViolationDef = ViolationDef::new(
    Category::Naming,
    110,
    "wrong_variable_name",
    "Found wrong variable name: {0}",
);
pub const TOO_SHORT_NAME: ViolationDef =
    ViolationDef::new(Category::Naming, 111, "too_short_name", "Found too short name: {0}");
pub const PRIVATE_NAME: ViolationDef =
    ViolationDef::new(Category::Naming, 112, "private_name", "Found private name pattern: {0}");
pub const SAME_ALIAS_IMPORT: ViolationDef =
    ViolationDef::new(Category::Naming, 113, "same_alias_import", "Found same alias import: {0}");
pub const UNDERSCORED_NUMBER_NAME: ViolationDef = ViolationDef::new(
    Category::Naming,
    114,
    "underscored_number_name",
    "Found underscored number name pattern: {0}",
);
pub const UPPER_CASE_ATTRIBUTE: ViolationDef = ViolationDef::new(
    Category::Naming,
    115,
    "upper_case_attribute",
    "Found upper-case constant in a class: {0}",
);
pub const CONSECUTIVE_UNDERSCORES_IN_NAME: ViolationDef = ViolationDef::new(
    Category::Naming,
    116,
    "consecutive_underscores_in_name",
    "Found consecutive underscores name: {0}",
);
pub const RESERVED_ARGUMENT_NAME: ViolationDef = ViolationDef::new(
    Category::Naming,
    117,
    "reserved_argument_name",
    "Found name reserved for first argument: {0}",
);
pub const TOO_LONG_NAME: ViolationDef =
    ViolationDef::new(Category::Naming, 118, "too_long_name", "Found too long name: {0}");

pub const DEFINITIONS: &[ViolationDef] = &[
    WRONG_MODULE_NAME,
    WRONG_MODULE_MAGIC_NAME,
    WRONG_MODULE_NAME_PATTERN,
    WRONG_VARIABLE_NAME,
    TOO_SHORT_NAME,
    PRIVATE_NAME,
    SAME_ALIAS_IMPORT,
    UNDERSCORED_NUMBER_NAME,
    UPPER_CASE_ATTRIBUTE,
    CONSECUTIVE_UNDERSCORES_IN_NAME,
    RESERVED_ARGUMENT_NAME,
    TOO_LONG_NAME,
];
