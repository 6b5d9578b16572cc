//! Object-oriented design rules.

use super::{Category, ViolationDef};

pub const BUILTIN_SUBCLASS: ViolationDef =
    ViolationDef::new(Category::Oop, 600, "builtin_subclass", "Found subclassing a builtin: {0}");
pub const SHADOWED_CLASS_ATTRIBUTE: ViolationDef = ViolationDef::new(
    Category::Oop,
    601,
    "shadowed_class_attribute",
    "Found shadowed class attribute: {0}",
);
pub const STATIC_METHOD: ViolationDef =
    ViolationDef::new(Category::Oop, 602, "static_method", "Found using `@staticmethod`");
pub const BAD_MAGIC_METHOD: ViolationDef = ViolationDef::new(
    Category::Oop,
    603,
    "bad_magic_method",
    "Found using restricted magic method: {0}",
);
pub const WRONG_CLASS_BODY_CONTENT: ViolationDef = ViolationDef::new(
    Category::Oop,
    604,
    "wrong_class_body_content",
    "Found incorrect node inside `class` body",
);
pub const METHOD_WITHOUT_ARGUMENTS: ViolationDef = ViolationDef::new(
    Category::Oop,
    605,
    "method_without_arguments",
    "Found method without arguments: {0}",
);
pub const WRONG_BASE_CLASS: ViolationDef =
    ViolationDef::new(Category::Oop, 606, "wrong_base_class", "Found incorrect base class");
pub const WRONG_SLOTS: ViolationDef =
    ViolationDef::new(Category::Oop, 607, "wrong_slots", "Found incorrect `__slots__` syntax");
pub const WRONG_SUPER_CALL: ViolationDef = ViolationDef::new(
    Category::Oop,
    608,
    "wrong_super_call",
    "Found incorrect `super()` call: {0}",
);
pub const DIRECT_MAGIC_ATTRIBUTE_ACCESS: ViolationDef = ViolationDef::new(
    Category::Oop,
    609,
    "direct_magic_attribute_access",
    "Found direct magic attribute usage: {0}",
);
pub const ASYNC_MAGIC_METHOD: ViolationDef = ViolationDef::new(
    Category::Oop,
    610,
    "async_magic_method",
    "Found disallowed `async` magic method usage: {0}",
);
pub const YIELD_MAGIC_METHOD: ViolationDef = ViolationDef::new(
    Category::Oop,
    611,
    "yield_magic_method",
    "Found disallowed `yield` magic method usage: {0}",
);

pub const DEFINITIONS: &[ViolationDef] = &[
    BUILTIN_SUBCLASS,
    SHADOWED_CLASS_ATTRIBUTE,
    STATIC_METHOD,
    BAD_MAGIC_METHOD,
    WRONG_CLASS_BODY_CONTENT,
    METHOD_WITHOUT_ARGUMENTS,
    WRONG_BASE_CLASS,
    WRONG_SLOTS,
    WRONG_SUPER_CALL,
    DIRECT_MAGIC_ATTRIBUTE_ACCESS,
    ASYNC_MAGIC_METHOD,
    YIELD_MAGIC_METHOD,
];
