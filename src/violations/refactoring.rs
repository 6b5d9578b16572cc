//! Refactoring rules: code that has a simpler equivalent.

use super::{Category, ViolationDef};

pub const USELESS_LOOP_ELSE: ViolationDef = ViolationDef::new(
    Category::Refactoring,
    500,
    "useless_loop_else",
    "Found `else` in a loop without `break`",
);
pub const USELESS_FINALLY: ViolationDef = ViolationDef::new(
    Category::Refactoring,
    501,
    "useless_finally",
    "Found `finally` in `try` block without `except`",
);
pub const SIMPLIFIABLE_IF: ViolationDef = ViolationDef::new(
    Category::Refactoring,
    502,
    "simplifiable_if",
    "Found simplifiable `if` condition",
);
pub const USELESS_RETURNING_ELSE: ViolationDef = ViolationDef::new(
    Category::Refactoring,
    503,
    "useless_returning_else",
    "Found useless returning `else` statement",
);
pub const NEGATED_CONDITION: ViolationDef =
    ViolationDef::new(Category::Refactoring, 504, "negated_condition", "Found negated condition");
pub const NESTED_TRY: ViolationDef =
    ViolationDef::new(Category::Refactoring, 505, "nested_try", "Found nested `try` block");
pub const USELESS_LAMBDA: ViolationDef = ViolationDef::new(
    Category::Refactoring,
    506,
    "useless_lambda",
    "Found useless lambda declaration",
);
pub const USELESS_LEN_COMPARE: ViolationDef = ViolationDef::new(
    Category::Refactoring,
    507,
    "useless_len_compare",
    "Found useless `len()` compare",
);
pub const NOT_OPERATOR_WITH_COMPARE: ViolationDef = ViolationDef::new(
    Category::Refactoring,
    508,
    "not_operator_with_compare",
    "Found incorrect `not` with compare usage",
);
pub const NESTED_TERNARY: ViolationDef =
    ViolationDef::new(Category::Refactoring, 509, "nested_ternary", "Found nested ternary");
pub const WRONG_IN_COMPARE_TYPE: ViolationDef = ViolationDef::new(
    Category::Refactoring,
    510,
    "wrong_in_compare_type",
    "Found `in` used with a non-set container",
);
pub const UNMERGED_ISINSTANCE_CALLS: ViolationDef = ViolationDef::new(
    Category::Refactoring,
    511,
    "unmerged_isinstance_calls",
    "Found separate `isinstance` calls that can be merged for: {0}",
);
pub const WRONG_ISINSTANCE_WITH_TUPLE: ViolationDef = ViolationDef::new(
    Category::Refactoring,
    512,
    "wrong_isinstance_with_tuple",
    "Found `isinstance` call with a single element tuple",
);
pub const IMPLICIT_ELIF: ViolationDef = ViolationDef::new(
    Category::Refactoring,
    513,
    "implicit_elif",
    "Found implicit `elif` condition",
);

pub const DEFINITIONS: &[ViolationDef] = &[
    USELESS_LOOP_ELSE,
    USELESS_FINALLY,
    SIMPLIFIABLE_IF,
    USELESS_RETURNING_ELSE,
    NEGATED_CONDITION,
    NESTED_TRY,
    USELESS_LAMBDA,
    USELESS_LEN_COMPARE,
    NOT_OPERATOR_WITH_COMPARE,
    NESTED_TERNARY,
    WRONG_IN_COMPARE_TYPE,
    UNMERGED_ISINSTANCE_CALLS,
    WRONG_ISINSTANCE_WITH_TUPLE,
    IMPLICIT_ELIF,
];
