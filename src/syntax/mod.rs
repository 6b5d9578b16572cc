//! Syntax model consumed by the analysis engine.
//!
//! A [`SourceUnit`] bundles the two views of one source file that checks
//! work on:
//! - the syntax tree (`Node`), which knows structure but forgets layout
//! - the token stream (`Token`), which keeps literal keywords, indentation
//!   and comments
//!
//! Both are plain data. The engine borrows them for one pass and never
//! mutates them. Units can come from the bundled Python frontend
//! (`tokenize` + `treesitter`) or be deserialized from JSON produced by an
//! external parser.

mod frontend;
mod tokenize;
#[cfg(feature = "tree-sitter")]
mod treesitter;

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "tree-sitter")]
pub use frontend::parse_source;
pub use frontend::{load_unit, FrontendError};
pub use tokenize::{tokenize, TokenizeError};
#[cfg(feature = "tree-sitter")]
pub use treesitter::parse_python;

/// Source position. Lines are 1-indexed, columns 0-indexed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Closed set of syntax-tree node kinds.
///
/// Statement groups (function bodies, `else` and `finally` bodies) are
/// `Block` nodes. An `elif` is an `If` nested in the `else` block of the
/// parent `If`, exactly like an `if` written inside `else:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Module,
    Block,
    FunctionDef,
    AsyncFunctionDef,
    Lambda,
    ClassDef,
    /// Decorator; its only child is the decorator expression.
    Decorator,
    /// Function or lambda parameter; the child, if any, is its annotation.
    Argument,
    /// Return annotation of a function; the child is the annotation.
    ReturnAnnotation,
    If,
    For,
    AsyncFor,
    While,
    IfExp,
    Try,
    ExceptHandler,
    Break,
    Continue,
    Raise,
    Return,
    /// Chain of one boolean operator; `name` holds `and` or `or`.
    BoolOp,
    /// Call; the first child is the callee, `name` is its dotted path when
    /// the callee is a plain name or attribute chain.
    Call,
    Name,
    /// Attribute access; the child is the value, `name` is the attribute.
    Attribute,
    Subscript,
    /// Anything the checks do not distinguish.
    Generic,
}

impl NodeKind {
    /// Whether this node defines a function scope.
    pub fn is_function(&self) -> bool {
        matches!(self, NodeKind::FunctionDef | NodeKind::AsyncFunctionDef)
    }
}

/// A syntax-tree element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, position: Position) -> Self {
        Self {
            kind,
            name: None,
            position,
            children: Vec::new(),
        }
    }

    pub fn named(kind: NodeKind, name: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            position,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Iterate over this node and all of its descendants in pre-order.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Statements of a function body (the children of its `Block`).
    pub fn body(&self) -> &[Node] {
        self.children
            .iter()
            .rev()
            .find(|c| c.kind == NodeKind::Block)
            .map(|b| b.children.as_slice())
            .unwrap_or(&[])
    }
}

/// Pre-order iterator over a node and its descendants.
pub struct Walk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Lexical token kinds. Keywords are `Name` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Name,
    Number,
    String,
    Op,
    Colon,
    /// End of a logical line.
    Newline,
    /// Blank or comment-only line, or a newline inside brackets.
    BlankLine,
    Indent,
    Dedent,
    Comment,
    EndMarker,
}

/// A lexical unit with its exact source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Whether this is a name token spelling `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Name && self.text == keyword
    }
}

/// One analyzed unit: a syntax tree and the token stream of the same source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    pub path: String,
    pub tree: Node,
    pub tokens: Vec<Token>,
}

impl SourceUnit {
    pub fn new(path: impl Into<String>, tree: Node, tokens: Vec<Token>) -> Self {
        Self {
            path: path.into(),
            tree,
            tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(line: usize) -> Position {
        Position::new(line, 0)
    }

    #[test]
    fn test_walk_is_preorder() {
        let tree = Node::new(NodeKind::Module, pos(1)).with_children(vec![
            Node::new(NodeKind::If, pos(1)).with_children(vec![
                Node::named(NodeKind::Name, "a", pos(1)),
                Node::new(NodeKind::Block, pos(2)),
            ]),
            Node::new(NodeKind::Return, pos(3)),
        ]);

        let kinds: Vec<_> = tree.walk().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Module,
                NodeKind::If,
                NodeKind::Name,
                NodeKind::Block,
                NodeKind::Return
            ]
        );
    }

    #[test]
    fn test_body_returns_block_statements() {
        let func = Node::named(NodeKind::FunctionDef, "f", pos(1)).with_children(vec![
            Node::named(NodeKind::Argument, "a", pos(1)),
            Node::new(NodeKind::Block, pos(2))
                .with_children(vec![Node::new(NodeKind::Generic, pos(2))]),
        ]);
        assert_eq!(func.body().len(), 1);

        let bare = Node::named(NodeKind::FunctionDef, "g", pos(1));
        assert!(bare.body().is_empty());
    }

    #[test]
    fn test_unit_json_roundtrip_keeps_kinds() {
        let json = r#"{
            "path": "m.py",
            "tree": {"kind": "module", "position": {"line": 1, "column": 0}},
            "tokens": [{"kind": "end_marker", "text": "", "position": {"line": 1, "column": 0}}]
        }"#;
        let unit: SourceUnit = serde_json::from_str(json).unwrap();
        assert_eq!(unit.tree.kind, NodeKind::Module);
        assert_eq!(unit.tokens[0].kind, TokenKind::EndMarker);
    }
}
