use std::collections::HashMap;

use crate::syntax::{NodeKind, TokenKind};

use super::{NodeCheck, TokenCheck};

/// The set of checks a pass runs, with routing tables from element kind
/// to the checks interested in it.
///
/// Routes keep registration order, which is also the order checks see an
/// element in.
#[derive(Default)]
pub struct CheckRegistry {
    node_checks: Vec<Box<dyn NodeCheck>>,
    token_checks: Vec<Box<dyn TokenCheck>>,
    node_routes: HashMap<NodeKind, Vec<usize>>,
    token_routes: HashMap<TokenKind, Vec<usize>>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a check visiting tree nodes.
    pub fn register_node_check(&mut self, check: Box<dyn NodeCheck>) {
        let index = self.node_checks.len();
        for kind in check.node_kinds() {
            let route = self.node_routes.entry(*kind).or_default();
            if !route.contains(&index) {
                route.push(index);
            }
        }
        self.node_checks.push(check);
    }

    /// Register a check visiting tokens.
    pub fn register_token_check(&mut self, check: Box<dyn TokenCheck>) {
        let index = self.token_checks.len();
        for kind in check.token_kinds() {
            let route = self.token_routes.entry(*kind).or_default();
            if !route.contains(&index) {
                route.push(index);
            }
        }
        self.token_checks.push(check);
    }

    pub fn with_node_check(mut self, check: impl NodeCheck + 'static) -> Self {
        self.register_node_check(Box::new(check));
        self
    }

    pub fn with_token_check(mut self, check: impl TokenCheck + 'static) -> Self {
        self.register_token_check(Box::new(check));
        self
    }

    /// Node checks subscribed to `kind`, in registration order.
    pub fn node_checks_for(&self, kind: NodeKind) -> impl Iterator<Item = &dyn NodeCheck> {
        self.node_routes
            .get(&kind)
            .into_iter()
            .flatten()
            .map(|&i| self.node_checks[i].as_ref())
    }

    /// Token checks subscribed to `kind`, in registration order.
    pub fn token_checks_for(&self, kind: TokenKind) -> impl Iterator<Item = &dyn TokenCheck> {
        self.token_routes
            .get(&kind)
            .into_iter()
            .flatten()
            .map(|&i| self.token_checks[i].as_ref())
    }

    /// Names of all registered checks, node checks first.
    pub fn names(&self) -> Vec<&'static str> {
        self.node_checks
            .iter()
            .map(|c| c.name())
            .chain(self.token_checks.iter().map(|c| c.name()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.node_checks.len() + self.token_checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
