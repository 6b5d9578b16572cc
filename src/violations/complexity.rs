//! Complexity rules.
//!
//! Module-level metrics live in 200-209, function-level metrics in
//! 210-219, nesting and expression shape in 220-229 and the cognitive
//! family from 230 on.

use super::{Category, ViolationDef};

pub const HIGH_MODULE_COMPLEXITY: ViolationDef = ViolationDef::new(
    Category::Complexity,
    200,
    "high_module_complexity",
    "Found module with high Jones complexity: {0}",
);
pub const TOO_MANY_IMPORTS: ViolationDef = ViolationDef::new(
    Category::Complexity,
    201,
    "too_many_imports",
    "Found module with too many imports: {0}",
);
pub const TOO_MANY_MODULE_MEMBERS: ViolationDef = ViolationDef::new(
    Category::Complexity,
    202,
    "too_many_module_members",
    "Found too many module members: {0}",
);
pub const TOO_MANY_LOCAL_VARIABLES: ViolationDef = ViolationDef::new(
    Category::Complexity,
    210,
    "too_many_local_variables",
    "Found too many local variables: {0}",
);
pub const TOO_MANY_ARGUMENTS: ViolationDef = ViolationDef::new(
    Category::Complexity,
    211,
    "too_many_arguments",
    "Found too many arguments: {0}",
);
pub const TOO_MANY_RETURNS: ViolationDef = ViolationDef::new(
    Category::Complexity,
    212,
    "too_many_returns",
    "Found too many return statements: {0}",
);
pub const TOO_MANY_EXPRESSIONS: ViolationDef = ViolationDef::new(
    Category::Complexity,
    213,
    "too_many_expressions",
    "Found too many expressions: {0}",
);
pub const TOO_MANY_METHODS: ViolationDef =
    ViolationDef::new(Category::Complexity, 214, "too_many_methods", "Found too many methods: {0}");
pub const TOO_MANY_BASE_CLASSES: ViolationDef = ViolationDef::new(
    Category::Complexity,
    215,
    "too_many_base_classes",
    "Too many base classes: {0}",
);
pub const TOO_MANY_DECORATORS: ViolationDef =
    ViolationDef::new(Category::Complexity, 216, "too_many_decorators", "Too many decorators: {0}");
pub const TOO_DEEP_NESTING: ViolationDef =
    ViolationDef::new(Category::Complexity, 220, "too_deep_nesting", "Found too deep nesting: {0}");
pub const LINE_COMPLEXITY: ViolationDef = ViolationDef::new(
    Category::Complexity,
    221,
    "line_complexity",
    "Found line with high Jones complexity: {0}",
);
pub const TOO_MANY_CONDITIONS: ViolationDef = ViolationDef::new(
    Category::Complexity,
    222,
    "too_many_conditions",
    "Found a condition with too much logic: {0}",
);
pub const TOO_MANY_ELIFS: ViolationDef = ViolationDef::new(
    Category::Complexity,
    223,
    "too_many_elifs",
    "Found too many `elif` branches: {0}",
);
pub const TOO_LONG_TRY_BODY: ViolationDef = ViolationDef::new(
    Category::Complexity,
    230,
    "too_long_try_body",
    "Found too long `try` body length: {0}",
);
pub const COGNITIVE_COMPLEXITY: ViolationDef = ViolationDef::new(
    Category::Complexity,
    231,
    "cognitive_complexity",
    "Found function with too high cognitive complexity: {0}",
);
pub const COGNITIVE_MODULE_COMPLEXITY: ViolationDef = ViolationDef::new(
    Category::Complexity,
    232,
    "cognitive_module_complexity",
    "Found module with too high average cognitive complexity: {0}",
);

pub const DEFINITIONS: &[ViolationDef] = &[
    HIGH_MODULE_COMPLEXITY,
    TOO_MANY_IMPORTS,
    TOO_MANY_MODULE_MEMBERS,
    TOO_MANY_LOCAL_VARIABLES,
    TOO_MANY_ARGUMENTS,
    TOO_MANY_RETURNS,
    TOO_MANY_EXPRESSIONS,
    TOO_MANY_METHODS,
    TOO_MANY_BASE_CLASSES,
    TOO_MANY_DECORATORS,
    TOO_DEEP_NESTING,
    LINE_COMPLEXITY,
    TOO_MANY_CONDITIONS,
    TOO_MANY_ELIFS,
    TOO_LONG_TRY_BODY,
    COGNITIVE_COMPLEXITY,
    COGNITIVE_MODULE_COMPLEXITY,
];
