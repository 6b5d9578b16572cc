//! Cognitive complexity scoring.
//!
//! Structures that break linear flow (branches, loops, jumps) add to the
//! score, and they add more the deeper they are nested. Nested function
//! definitions and lambdas raise the nesting level without scoring
//! themselves. Boolean operator chains score once per chain, weighted by
//! nesting.

use crate::syntax::{Node, NodeKind};

/// Score a sequence of statements at nesting level zero.
pub fn score(body: &[Node]) -> u32 {
    body.iter().map(|node| score_node(node, 0)).sum()
}

/// Cognitive score of a function: its body score plus one if it calls
/// itself.
///
/// `is_method` makes `self.<name>(...)` count as a recursive call.
pub fn cognitive_score(function: &Node, is_method: bool) -> u32 {
    let mut total = score(function.body());
    if is_recursive(function, is_method) {
        total += 1;
    }
    total
}

/// Number of boolean operator chains in the subtree rooted at `node`.
///
/// `a and b and c` is one chain; `a and b or c` is two.
pub fn count_boolops(node: &Node) -> u32 {
    node.walk().filter(|n| n.kind == NodeKind::BoolOp).count() as u32
}

/// Whether `function` contains a call to itself.
pub fn is_recursive(function: &Node, is_method: bool) -> bool {
    let Some(name) = function.name() else {
        return false;
    };
    let method_target = format!("self.{}", name);

    function
        .walk()
        .filter(|n| n.kind == NodeKind::Call)
        .filter_map(|call| call.name())
        .any(|callee| callee == name || (is_method && callee == method_target))
}

fn score_node(node: &Node, increment: u32) -> u32 {
    let (increment, own) = match node.kind {
        NodeKind::Break | NodeKind::Continue | NodeKind::Raise => (increment, increment.max(1)),
        NodeKind::If | NodeKind::For | NodeKind::AsyncFor | NodeKind::While | NodeKind::IfExp => {
            let nested = increment + 1;
            (nested, nested)
        }
        NodeKind::FunctionDef | NodeKind::AsyncFunctionDef | NodeKind::Lambda => {
            (increment + 1, 0)
        }
        // chains below this one are already counted
        NodeKind::BoolOp => return count_boolops(node) * increment.max(1),
        _ => (increment, 0),
    };

    own + score_children(node, increment)
}

fn score_children(node: &Node, increment: u32) -> u32 {
    if node.kind != NodeKind::Try {
        return node
            .children
            .iter()
            .map(|child| score_node(child, increment))
            .sum();
    }

    // everything after the protected body is a handler, `else` or
    // `finally` and sits one level deeper
    let mut total = 0;
    for (i, child) in node.children.iter().enumerate() {
        if i == 0 {
            total += score_node(child, increment);
        } else {
            let nested = increment + 1;
            total += nested.max(1) + score_node(child, nested);
        }
    }
    total
}
