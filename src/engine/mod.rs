//! Visitor dispatch engine.
//!
//! Checks declare which node or token kinds they care about; the
//! [`CheckRegistry`] turns those declarations into routing tables once,
//! and the [`Engine`] runs one pre-order walk over the syntax tree followed
//! by one left-to-right scan over the token stream, handing each element
//! to every interested check exactly once.
//!
//! Each check call is isolated: an error or a panic inside a check becomes
//! a [`CheckFault`] on the report and the pass continues with the next
//! check. Violations the failing check already emitted are kept.

mod context;
mod registry;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;
use thiserror::Error;

use crate::syntax::{Node, NodeKind, Position, SourceUnit, Token, TokenKind};
use crate::violations::{Violation, ViolationCatalog};

use context::Emitter;
pub use context::{NodeContext, TokenContext};
pub use registry::CheckRegistry;

/// A check that visits syntax-tree nodes.
pub trait NodeCheck: Send + Sync {
    /// Stable identifier used in fault reports and logs.
    fn name(&self) -> &'static str;

    /// Node kinds this check is routed.
    fn node_kinds(&self) -> &'static [NodeKind];

    fn visit_node(&self, node: &Node, ctx: &mut NodeContext<'_>) -> Result<(), CheckError>;
}

/// A check that visits tokens.
///
/// Token checks get the whole token slice and the index of the routed
/// token so they can look around it.
pub trait TokenCheck: Send + Sync {
    fn name(&self) -> &'static str;

    fn token_kinds(&self) -> &'static [TokenKind];

    fn visit_token(
        &self,
        index: usize,
        tokens: &[Token],
        ctx: &mut TokenContext<'_>,
    ) -> Result<(), CheckError>;
}

/// Errors a check can return instead of finishing its visit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("violation {name} ({code}) is not in the catalog")]
    Unregistered { code: u16, name: &'static str },

    #[error("unexpected input at {position}: {reason}")]
    Malformed { position: Position, reason: String },

    #[error("{0}")]
    Failed(String),
}

/// A check that failed on one element, isolated from the rest of the pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckFault {
    pub check: String,
    pub position: Position,
    pub message: String,
}

/// Result of analyzing one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnitReport {
    pub path: String,
    /// Violations in emission order.
    pub violations: Vec<Violation>,
    pub faults: Vec<CheckFault>,
    /// Violations silenced by inline comments after the pass.
    pub suppressed: Vec<Violation>,
    /// Violations dropped because configuration ignores their code.
    pub ignored: usize,
}

impl UnitReport {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.faults.is_empty()
    }
}

/// Runs registered checks over source units.
///
/// Holds only shared references; one engine can analyze many units, also
/// from several threads at once.
#[derive(Clone, Copy)]
pub struct Engine<'a> {
    catalog: &'a ViolationCatalog,
    registry: &'a CheckRegistry,
}

impl<'a> Engine<'a> {
    pub fn new(catalog: &'a ViolationCatalog, registry: &'a CheckRegistry) -> Self {
        Self { catalog, registry }
    }

    pub fn catalog(&self) -> &'a ViolationCatalog {
        self.catalog
    }

    /// Analyze one unit: tree walk first, then token scan.
    pub fn analyze(&self, unit: &SourceUnit) -> UnitReport {
        log::debug!("analyzing {}", unit.path);
        let mut report = UnitReport::new(unit.path.clone());

        self.walk_tree(unit, &mut report);
        self.scan_tokens(unit, &mut report);

        log::debug!(
            "{}: {} violation(s), {} fault(s)",
            unit.path,
            report.violations.len(),
            report.faults.len()
        );
        report
    }

    fn walk_tree(&self, unit: &SourceUnit, report: &mut UnitReport) {
        let mut stack: Vec<(&Node, usize)> = vec![(&unit.tree, 0)];
        let mut parents: Vec<&Node> = Vec::new();

        while let Some((node, depth)) = stack.pop() {
            parents.truncate(depth);

            for check in self.registry.node_checks_for(node.kind) {
                let outcome = {
                    let emitter = Emitter::new(self.catalog, &mut report.violations);
                    let mut ctx = NodeContext::new(&unit.path, &parents, emitter);
                    panic::catch_unwind(AssertUnwindSafe(|| check.visit_node(node, &mut ctx)))
                };
                record_outcome(report, &unit.path, check.name(), node.position, outcome);
            }

            parents.push(node);
            for child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    fn scan_tokens(&self, unit: &SourceUnit, report: &mut UnitReport) {
        for (index, token) in unit.tokens.iter().enumerate() {
            for check in self.registry.token_checks_for(token.kind) {
                let outcome = {
                    let emitter = Emitter::new(self.catalog, &mut report.violations);
                    let mut ctx = TokenContext::new(&unit.path, emitter);
                    panic::catch_unwind(AssertUnwindSafe(|| {
                        check.visit_token(index, &unit.tokens, &mut ctx)
                    }))
                };
                record_outcome(report, &unit.path, check.name(), token.position, outcome);
            }
        }
    }
}

fn record_outcome(
    report: &mut UnitReport,
    path: &str,
    check: &str,
    position: Position,
    outcome: std::thread::Result<Result<(), CheckError>>,
) {
    let message = match outcome {
        Ok(Ok(())) => return,
        Ok(Err(e)) => e.to_string(),
        Err(payload) => format!("panicked: {}", panic_message(payload.as_ref())),
    };
    log::warn!("{}:{}: check {} failed: {}", path, position, check, message);
    report.faults.push(CheckFault {
        check: check.to_string(),
        position,
        message,
    });
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
