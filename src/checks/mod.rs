//! Checks shipped with strictpy.
//!
//! | Check | Code | Visits |
//! |-------|------|--------|
//! | [`CognitiveComplexityCheck`] | SP231 | function definitions |
//! | [`ModuleCognitiveCheck`] | SP232 | the module |
//! | [`MultilineAnnotationCheck`] | SP320 | arguments, return annotations |
//! | [`NewStyledDecoratorCheck`] | SP466 | decorators |
//! | [`ImplicitElifCheck`] | SP513 | name tokens |

mod annotations;
mod complexity;
mod conditions;
mod decorators;

pub use annotations::MultilineAnnotationCheck;
pub use complexity::{CognitiveComplexityCheck, ModuleCognitiveCheck};
pub use conditions::ImplicitElifCheck;
pub use decorators::NewStyledDecoratorCheck;

use crate::config::Config;
use crate::engine::CheckRegistry;

/// Registry with every shipped check, configured from `config`.
pub fn standard_registry(config: &Config) -> CheckRegistry {
    CheckRegistry::new()
        .with_node_check(CognitiveComplexityCheck::new(config.max_cognitive_score))
        .with_node_check(ModuleCognitiveCheck::new(config.max_cognitive_average))
        .with_node_check(MultilineAnnotationCheck)
        .with_node_check(NewStyledDecoratorCheck)
        .with_token_check(ImplicitElifCheck)
}
