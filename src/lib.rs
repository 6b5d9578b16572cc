//! strictpy - a strict Python style checker.
//!
//! Checks run over two views of each source file: the syntax tree and the
//! token stream. Every check reports violations drawn from one validated
//! catalog of numbered codes.
//!
//! # Architecture
//!
//! - `syntax`: source model (`Node`, `Token`, `SourceUnit`) and the Python
//!   frontend (tokenizer, tree-sitter conversion)
//! - `violations`: violation definitions and the `ViolationCatalog`
//! - `engine`: check traits, registry and the single-pass dispatcher
//! - `complexity`: cognitive complexity scoring
//! - `checks`: the shipped checks
//! - `suppress`: inline `# noqa` handling
//! - `config`, `runner`, `report`, `cli`: the command-line host
//!
//! # Adding a Check
//!
//! Implement `NodeCheck` or `TokenCheck`, declare its `ViolationDef` in the
//! matching `violations` module and add it to `checks::standard_registry`.

pub mod checks;
pub mod cli;
pub mod complexity;
pub mod config;
pub mod engine;
pub mod report;
pub mod runner;
pub mod suppress;
pub mod syntax;
pub mod violations;

pub use config::Config;
pub use engine::{CheckError, CheckFault, CheckRegistry, Engine, NodeCheck, TokenCheck, UnitReport};
pub use runner::{collect_files, LintResult, Runner};
pub use syntax::{load_unit, Node, NodeKind, Position, SourceUnit, Token, TokenKind};
pub use violations::{Category, Violation, ViolationCatalog, ViolationDef};
