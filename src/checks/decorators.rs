use crate::engine::{CheckError, NodeCheck, NodeContext};
use crate::syntax::{Node, NodeKind};
use crate::violations::best_practices::NEW_STYLED_DECORATOR;

/// Node kinds a decorator expression may be built from.
const ALLOWED_PARTS: &[NodeKind] = &[NodeKind::Name, NodeKind::Attribute, NodeKind::Call];

/// Flags decorators that use the relaxed grammar: anything beyond a
/// dotted name, optionally called.
pub struct NewStyledDecoratorCheck;

impl NodeCheck for NewStyledDecoratorCheck {
    fn name(&self) -> &'static str {
        "new_styled_decorator"
    }

    fn node_kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::Decorator]
    }

    fn visit_node(&self, node: &Node, ctx: &mut NodeContext<'_>) -> Result<(), CheckError> {
        let Some(expr) = node.children.first() else {
            return Ok(());
        };
        if !is_allowed_decorator(expr) {
            ctx.add_violation(&NEW_STYLED_DECORATOR, expr.position)?;
        }
        Ok(())
    }
}

fn is_allowed_decorator(expr: &Node) -> bool {
    if expr.kind == NodeKind::Name {
        return true;
    }
    chain(expr).all(|part| ALLOWED_PARTS.contains(&part.kind))
}

/// `expr`, then what it calls or accesses, down to the innermost value.
fn chain(expr: &Node) -> impl Iterator<Item = &Node> {
    std::iter::successors(Some(expr), |&part| match part.kind {
        NodeKind::Call | NodeKind::Attribute => part.children.first(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Position;

    fn at(column: usize) -> Position {
        Position::new(1, column)
    }

    fn name(id: &str) -> Node {
        Node::named(NodeKind::Name, id, at(1))
    }

    fn attr(value: Node, attribute: &str) -> Node {
        Node::named(NodeKind::Attribute, attribute, at(1)).with_children(vec![value])
    }

    fn call(callee: Node, args: Vec<Node>) -> Node {
        let mut children = vec![callee];
        children.extend(args);
        Node::new(NodeKind::Call, at(1)).with_children(children)
    }

    fn subscript(value: Node) -> Node {
        Node::new(NodeKind::Subscript, at(1))
            .with_children(vec![value, Node::new(NodeKind::Generic, at(5))])
    }

    #[test]
    fn test_classic_decorators_allowed() {
        assert!(is_allowed_decorator(&name("cache")));
        assert!(is_allowed_decorator(&attr(name("functools"), "cache")));
        assert!(is_allowed_decorator(&call(
            attr(name("app"), "route"),
            vec![Node::new(NodeKind::Generic, at(11))]
        )));
        // arguments may be anything
        assert!(is_allowed_decorator(&call(
            name("register"),
            vec![subscript(name("handlers"))]
        )));
        assert!(is_allowed_decorator(&attr(call(name("factory"), vec![]), "wrap")));
    }

    #[test]
    fn test_relaxed_decorators_flagged() {
        assert!(!is_allowed_decorator(&subscript(name("buttons"))));
        assert!(!is_allowed_decorator(&attr(subscript(name("buttons")), "connect")));
        assert!(!is_allowed_decorator(&call(subscript(name("hooks")), vec![])));
        assert!(!is_allowed_decorator(&Node::new(NodeKind::Lambda, at(1))));
        assert!(!is_allowed_decorator(&Node::named(NodeKind::BoolOp, "or", at(1))));
    }
}
