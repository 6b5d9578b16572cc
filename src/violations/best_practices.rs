//! Best-practice rules.

use super::{Category, ViolationDef};

pub const WRONG_MAGIC_COMMENT: ViolationDef = ViolationDef::new(
    Category::BestPractices,
    400,
    "wrong_magic_comment",
    "Found wrong magic comment: {0}",
);
pub const WRONG_DOC_COMMENT: ViolationDef =
    ViolationDef::new(Category::BestPractices, 401, "wrong_doc_comment", "Found wrong doc comment");
pub const OVERUSED_NOQA: ViolationDef = ViolationDef::new(
    Category::BestPractices,
    402,
    "overused_noqa",
    "Found `noqa` comments overuse: {0}",
);
pub const OVERUSED_NO_COVER: ViolationDef = ViolationDef::new(
    Category::BestPractices,
    403,
    "overused_no_cover",
    "Found `no cover` comments overuse: {0}",
);
pub const COMPLEX_DEFAULT_VALUE: ViolationDef = ViolationDef::new(
    Category::BestPractices,
    404,
    "complex_default_value",
    "Found complex default value",
);
pub const LOOP_VARIABLE_DEFINITION: ViolationDef = ViolationDef::new(
    Category::BestPractices,
    405,
    "loop_variable_definition",
    "Found wrong `for` loop variable definition",
);
pub const CONTEXT_MANAGER_VARIABLE_DEFINITION: ViolationDef = ViolationDef::new(
    Category::BestPractices,
    406,
    "context_manager_variable_definition",
    "Found wrong context manager variable definition",
);
pub const MUTABLE_MODULE_CONSTANT: ViolationDef = ViolationDef::new(
    Category::BestPractices,
    407,
    "mutable_module_constant",
    "Found mutable module constant",
);
pub const WRONG_MODULE_METADATA: ViolationDef = ViolationDef::new(
    Category::BestPractices,
    410,
    "wrong_module_metadata",
    "Found wrong metadata variable: {0}",
);
pub const EMPTY_MODULE: ViolationDef =
    ViolationDef::new(Category::BestPractices, 411, "empty_module", "Found empty module");
pub const INIT_MODULE_HAS_LOGIC: ViolationDef = ViolationDef::new(
    Category::BestPractices,
    412,
    "init_module_has_logic",
    "Found `__init__.py` module with logic",
);
pub const WRONG_KEYWORD: ViolationDef =
    ViolationDef::new(Category::BestPractices, 420, "wrong_keyword", "Found wrong keyword: {0}");
pub const WRONG_FUNCTION_CALL: ViolationDef = ViolationDef::new(
    Category::BestPractices,
    421,
    "wrong_function_call",
    "Found wrong function call: {0}",
);
pub const NEW_STYLED_DECORATOR: ViolationDef = ViolationDef::new(
    Category::BestPractices,
    466,
    "new_styled_decorator",
    "Found new-styled decorator",
);

pub const DEFINITIONS: &[ViolationDef] = &[
    WRONG_MAGIC_COMMENT,
    WRONG_DOC_COMMENT,
    OVERUSED_NOQA,
    OVERUSED_NO_COVER,
    COMPLEX_DEFAULT_VALUE,
    LOOP_VARIABLE_DEFINITION,
    CONTEXT_MANAGER_VARIABLE_DEFINITION,
    MUTABLE_MODULE_CONSTANT,
    WRONG_MODULE_METADATA,
    EMPTY_MODULE,
    INIT_MODULE_HAS_LOGIC,
    WRONG_KEYWORD,
    WRONG_FUNCTION_CALL,
    NEW_STYLED_DECORATOR,
];
