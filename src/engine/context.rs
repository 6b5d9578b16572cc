//! Per-visit views handed to checks.

use std::fmt;

use crate::syntax::{Node, Position};
use crate::violations::{Violation, ViolationCatalog, ViolationDef};

use super::CheckError;

/// Pass-local violation sink shared by every check of one unit.
pub(crate) struct Emitter<'a> {
    catalog: &'a ViolationCatalog,
    violations: &'a mut Vec<Violation>,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(catalog: &'a ViolationCatalog, violations: &'a mut Vec<Violation>) -> Self {
        Self {
            catalog,
            violations,
        }
    }

    fn emit(
        &mut self,
        def: &ViolationDef,
        position: Position,
        arg: Option<&str>,
    ) -> Result<(), CheckError> {
        if !self.catalog.contains(def) {
            return Err(CheckError::Unregistered {
                code: def.code,
                name: def.name,
            });
        }
        self.violations.push(Violation::new(def, position, arg));
        Ok(())
    }
}

/// What a node check sees while visiting one node.
pub struct NodeContext<'a> {
    path: &'a str,
    parents: &'a [&'a Node],
    emitter: Emitter<'a>,
}

impl<'a> NodeContext<'a> {
    pub(crate) fn new(path: &'a str, parents: &'a [&'a Node], emitter: Emitter<'a>) -> Self {
        Self {
            path,
            parents,
            emitter,
        }
    }

    /// Path of the unit being analyzed.
    pub fn path(&self) -> &str {
        self.path
    }

    /// Ancestors of the visited node, outermost (the module) first.
    pub fn parents(&self) -> &[&'a Node] {
        self.parents
    }

    /// Direct parent of the visited node.
    pub fn parent(&self) -> Option<&'a Node> {
        self.parents.last().copied()
    }

    /// Grandparent of the visited node.
    pub fn grandparent(&self) -> Option<&'a Node> {
        self.parents.iter().rev().nth(1).copied()
    }

    pub fn add_violation(
        &mut self,
        def: &ViolationDef,
        position: Position,
    ) -> Result<(), CheckError> {
        self.emitter.emit(def, position, None)
    }

    /// Emit with `arg` substituted into the message template.
    pub fn add_violation_with(
        &mut self,
        def: &ViolationDef,
        position: Position,
        arg: impl fmt::Display,
    ) -> Result<(), CheckError> {
        self.emitter.emit(def, position, Some(arg.to_string().as_str()))
    }
}

/// What a token check sees while visiting one token.
pub struct TokenContext<'a> {
    path: &'a str,
    emitter: Emitter<'a>,
}

impl<'a> TokenContext<'a> {
    pub(crate) fn new(path: &'a str, emitter: Emitter<'a>) -> Self {
        Self { path, emitter }
    }

    pub fn path(&self) -> &str {
        self.path
    }

    pub fn add_violation(
        &mut self,
        def: &ViolationDef,
        position: Position,
    ) -> Result<(), CheckError> {
        self.emitter.emit(def, position, None)
    }

    pub fn add_violation_with(
        &mut self,
        def: &ViolationDef,
        position: Position,
        arg: impl fmt::Display,
    ) -> Result<(), CheckError> {
        self.emitter.emit(def, position, Some(arg.to_string().as_str()))
    }
}
