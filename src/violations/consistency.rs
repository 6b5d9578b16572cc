//! Consistency rules: one way to write each construct.

use super::{Category, ViolationDef};

pub const LOCAL_FOLDER_IMPORT: ViolationDef = ViolationDef::new(
    Category::Consistency,
    300,
    "local_folder_import",
    "Found local folder import",
);
pub const DOTTED_RAW_IMPORT: ViolationDef = ViolationDef::new(
    Category::Consistency,
    301,
    "dotted_raw_import",
    "Found dotted raw import: {0}",
);
pub const UNICODE_STRING_PREFIX: ViolationDef = ViolationDef::new(
    Category::Consistency,
    302,
    "unicode_string_prefix",
    "Found unicode string prefix: {0}",
);
pub const UNDERSCORED_NUMBER: ViolationDef = ViolationDef::new(
    Category::Consistency,
    303,
    "underscored_number",
    "Found underscored number: {0}",
);
pub const PARTIAL_FLOAT: ViolationDef =
    ViolationDef::new(Category::Consistency, 304, "partial_float", "Found partial float: {0}");
pub const FORMATTED_STRING: ViolationDef =
    ViolationDef::new(Category::Consistency, 305, "formatted_string", "Found `f` string");
pub const EXPLICIT_OBJECT_BASE_CLASS: ViolationDef = ViolationDef::new(
    Category::Consistency,
    306,
    "explicit_object_base_class",
    "Found explicit `object` base class: {0}",
);
pub const MULTIPLE_IFS_IN_COMPREHENSION: ViolationDef = ViolationDef::new(
    Category::Consistency,
    307,
    "multiple_ifs_in_comprehension",
    "Found list comprehension with multiple `if`s",
);
pub const CONSTANT_COMPARISON: ViolationDef = ViolationDef::new(
    Category::Consistency,
    308,
    "constant_comparison",
    "Found constant comparison",
);
pub const REVERSED_COMPARISON_ORDER: ViolationDef = ViolationDef::new(
    Category::Consistency,
    309,
    "reversed_comparison_order",
    "Found reversed comparison order",
);
pub const BAD_NUMBER_SUFFIX: ViolationDef = ViolationDef::new(
    Category::Consistency,
    310,
    "bad_number_suffix",
    "Found bad number suffix: {0}",
);
pub const MULTILINE_FUNCTION_ANNOTATION: ViolationDef = ViolationDef::new(
    Category::Consistency,
    320,
    "multiline_function_annotation",
    "Found multi-line function type annotation",
);

pub const DEFINITIONS: &[ViolationDef] = &[
    LOCAL_FOLDER_IMPORT,
    DOTTED_RAW_IMPORT,
    UNICODE_STRING_PREFIX,
    UNDERSCORED_NUMBER,
    PARTIAL_FLOAT,
    FORMATTED_STRING,
    EXPLICIT_OBJECT_BASE_CLASS,
    MULTIPLE_IFS_IN_COMPREHENSION,
    CONSTANT_COMPARISON,
    REVERSED_COMPARISON_ORDER,
    BAD_NUMBER_SUFFIX,
    MULTILINE_FUNCTION_ANNOTATION,
];
