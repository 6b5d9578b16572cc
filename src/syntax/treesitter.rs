//! Tree-sitter frontend: converts the Python concrete syntax tree into
//! the closed [`NodeKind`] model.
//!
//! The conversion reshapes a few constructs so the tree looks like a
//! Python abstract syntax tree:
//! - `elif` clauses become an `If` nested in the `else` block of the parent
//! - chains of one boolean operator collapse into a single `BoolOp`
//! - parentheses disappear
//! - decorators are attached to the definition they decorate

use once_cell::sync::Lazy;
use tree_sitter::{Language, Node as TsNode, Parser};

use super::{FrontendError, Node, NodeKind, Position};

static PYTHON: Lazy<Language> = Lazy::new(|| tree_sitter_python::LANGUAGE.into());

/// Parse Python source into a syntax tree rooted at a `Module` node.
///
/// Sources with syntax errors are rejected: the checks assume a
/// well-formed tree.
pub fn parse_python(source: &str) -> Result<Node, FrontendError> {
    let mut parser = Parser::new();
    parser
        .set_language(&PYTHON)
        .map_err(|e| FrontendError::Language(e.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| FrontendError::Language("parser returned no tree".to_string()))?;

    let root = tree.root_node();
    if root.has_error() {
        let at = first_error(root).unwrap_or(root);
        return Err(FrontendError::Syntax {
            position: position(at),
        });
    }

    let converter = Converter {
        source: source.as_bytes(),
    };
    Ok(Node::new(NodeKind::Module, Position::new(1, 0))
        .with_children(converter.named_children(root)))
}

fn position(node: TsNode) -> Position {
    let point = node.start_position();
    Position::new(point.row + 1, point.column)
}

fn first_error(node: TsNode) -> Option<TsNode> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|c| c.has_error())
        .find_map(first_error)
}

struct Converter<'s> {
    source: &'s [u8],
}

impl<'s> Converter<'s> {
    fn text(&self, node: TsNode) -> &'s str {
        node.utf8_text(self.source).unwrap_or("")
    }

    fn named_children(&self, node: TsNode) -> Vec<Node> {
        let mut cursor = node.walk();
        let children: Vec<_> = node.named_children(&mut cursor).collect();
        children.into_iter().filter_map(|c| self.convert(c)).collect()
    }

    fn field(&self, node: TsNode, name: &str) -> Option<Node> {
        node.child_by_field_name(name).and_then(|c| self.convert(c))
    }

    fn block(&self, node: Option<TsNode>, fallback: Position) -> Node {
        match node {
            Some(n) if n.kind() == "block" => {
                Node::new(NodeKind::Block, position(n)).with_children(self.named_children(n))
            }
            Some(n) => Node::new(NodeKind::Block, position(n))
                .with_children(self.convert(n).into_iter().collect()),
            None => Node::new(NodeKind::Block, fallback),
        }
    }

    fn starts_with_async(&self, node: TsNode) -> bool {
        node.child(0).map(|c| c.kind() == "async").unwrap_or(false)
    }

    fn convert(&self, node: TsNode) -> Option<Node> {
        let at = position(node);
        let converted = match node.kind() {
            "comment" => return None,
            "module" => Node::new(NodeKind::Module, at).with_children(self.named_children(node)),
            "block" => Node::new(NodeKind::Block, at).with_children(self.named_children(node)),
            "parenthesized_expression" | "type" => {
                let mut cursor = node.walk();
                let inner = node
                    .named_children(&mut cursor)
                    .find(|c| c.kind() != "comment");
                return match inner {
                    Some(inner) => self.convert(inner),
                    None => Some(Node::new(NodeKind::Generic, at)),
                };
            }
            "decorated_definition" => return self.decorated(node),
            "function_definition" => self.function(node),
            "class_definition" => {
                let mut children = Vec::new();
                children.extend(self.field(node, "superclasses"));
                children.push(self.block(node.child_by_field_name("body"), at));
                let name = node
                    .child_by_field_name("name")
                    .map(|n| self.text(n))
                    .unwrap_or("");
                Node::named(NodeKind::ClassDef, name, at).with_children(children)
            }
            "lambda" => {
                let (mut children, defaults) =
                    self.parameters(node.child_by_field_name("parameters"));
                children.extend(defaults);
                children.extend(self.field(node, "body"));
                Node::new(NodeKind::Lambda, at).with_children(children)
            }
            "if_statement" => {
                let mut cursor = node.walk();
                let alternatives: Vec<_> = node
                    .children_by_field_name("alternative", &mut cursor)
                    .collect();
                self.if_chain(
                    at,
                    node.child_by_field_name("condition"),
                    node.child_by_field_name("consequence"),
                    &alternatives,
                )
            }
            "for_statement" => {
                let kind = if self.starts_with_async(node) {
                    NodeKind::AsyncFor
                } else {
                    NodeKind::For
                };
                let mut children = Vec::new();
                children.extend(self.field(node, "left"));
                children.extend(self.field(node, "right"));
                children.push(self.block(node.child_by_field_name("body"), at));
                if let Some(alt) = node.child_by_field_name("alternative") {
                    children.push(self.block(alt.child_by_field_name("body"), position(alt)));
                }
                Node::new(kind, at).with_children(children)
            }
            "while_statement" => {
                let mut children = Vec::new();
                children.extend(self.field(node, "condition"));
                children.push(self.block(node.child_by_field_name("body"), at));
                if let Some(alt) = node.child_by_field_name("alternative") {
                    children.push(self.block(alt.child_by_field_name("body"), position(alt)));
                }
                Node::new(NodeKind::While, at).with_children(children)
            }
            "try_statement" => self.try_statement(node),
            "conditional_expression" => {
                Node::new(NodeKind::IfExp, at).with_children(self.named_children(node))
            }
            "boolean_operator" => {
                let op = node
                    .child_by_field_name("operator")
                    .map(|o| self.text(o))
                    .unwrap_or("and");
                let mut operands = Vec::new();
                self.bool_operands(node, op, &mut operands);
                Node::named(NodeKind::BoolOp, op, at).with_children(operands)
            }
            "break_statement" => Node::new(NodeKind::Break, at),
            "continue_statement" => Node::new(NodeKind::Continue, at),
            "raise_statement" => {
                Node::new(NodeKind::Raise, at).with_children(self.named_children(node))
            }
            "return_statement" => {
                Node::new(NodeKind::Return, at).with_children(self.named_children(node))
            }
            "call" => {
                let function = node.child_by_field_name("function");
                let mut children = Vec::new();
                children.extend(function.and_then(|f| self.convert(f)));
                if let Some(args) = node.child_by_field_name("arguments") {
                    children.extend(self.named_children(args));
                }
                let mut call = Node::new(NodeKind::Call, at).with_children(children);
                call.name = function.and_then(|f| self.callee_path(f));
                call
            }
            "identifier" => Node::named(NodeKind::Name, self.text(node), at),
            "attribute" => {
                let attr = node
                    .child_by_field_name("attribute")
                    .map(|a| self.text(a))
                    .unwrap_or("");
                Node::named(NodeKind::Attribute, attr, at)
                    .with_children(self.field(node, "object").into_iter().collect())
            }
            "subscript" => {
                Node::new(NodeKind::Subscript, at).with_children(self.named_children(node))
            }
            _ => Node::new(NodeKind::Generic, at).with_children(self.named_children(node)),
        };
        Some(converted)
    }

    fn decorated(&self, node: TsNode) -> Option<Node> {
        let mut decorators = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() != "decorator" {
                continue;
            }
            let mut inner = child.walk();
            let expr = child
                .named_children(&mut inner)
                .find(|c| c.kind() != "comment");
            if let Some(expr) = expr {
                let converted = self.convert(expr)?;
                decorators.push(
                    Node::new(NodeKind::Decorator, converted.position)
                        .with_children(vec![converted]),
                );
            }
        }

        let mut definition = self.field(node, "definition")?;
        decorators.append(&mut definition.children);
        definition.children = decorators;
        Some(definition)
    }

    fn function(&self, node: TsNode) -> Node {
        let at = position(node);
        let kind = if self.starts_with_async(node) {
            NodeKind::AsyncFunctionDef
        } else {
            NodeKind::FunctionDef
        };
        let name = node
            .child_by_field_name("name")
            .map(|n| self.text(n))
            .unwrap_or("");

        let (mut children, defaults) = self.parameters(node.child_by_field_name("parameters"));
        children.extend(defaults);
        if let Some(returns) = node.child_by_field_name("return_type") {
            if let Some(annotation) = self.convert(returns) {
                children.push(
                    Node::new(NodeKind::ReturnAnnotation, annotation.position)
                        .with_children(vec![annotation]),
                );
            }
        }
        children.push(self.block(node.child_by_field_name("body"), at));

        Node::named(kind, name, at).with_children(children)
    }

    /// Convert a parameter list into `Argument` nodes plus default values.
    fn parameters(&self, params: Option<TsNode>) -> (Vec<Node>, Vec<Node>) {
        let mut arguments = Vec::new();
        let mut defaults = Vec::new();
        let Some(params) = params else {
            return (arguments, defaults);
        };

        let mut cursor = params.walk();
        for param in params.named_children(&mut cursor) {
            let at = position(param);
            match param.kind() {
                "identifier" => arguments.push(Node::named(NodeKind::Argument, self.text(param), at)),
                "list_splat_pattern" | "dictionary_splat_pattern" => {
                    arguments.push(Node::named(NodeKind::Argument, self.param_name(param), at))
                }
                "typed_parameter" | "default_parameter" | "typed_default_parameter" => {
                    let name = param
                        .child_by_field_name("name")
                        .map(|n| self.param_name(n))
                        .unwrap_or_else(|| self.param_name(param));
                    let annotation = self.field(param, "type");
                    arguments.push(
                        Node::named(NodeKind::Argument, name, at)
                            .with_children(annotation.into_iter().collect()),
                    );
                    defaults.extend(self.field(param, "value"));
                }
                _ => {}
            }
        }
        (arguments, defaults)
    }

    /// First identifier inside a parameter pattern (`*args` -> `args`).
    fn param_name(&self, node: TsNode) -> String {
        if node.kind() == "identifier" {
            return self.text(node).to_string();
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.named_children(&mut cursor).collect();
        children
            .into_iter()
            .find(|c| c.kind() == "identifier" || c.kind().ends_with("_pattern"))
            .map(|c| self.param_name(c))
            .unwrap_or_default()
    }

    fn if_chain(
        &self,
        at: Position,
        condition: Option<TsNode>,
        consequence: Option<TsNode>,
        alternatives: &[TsNode],
    ) -> Node {
        let mut children = Vec::new();
        children.extend(condition.and_then(|c| self.convert(c)));
        children.push(self.block(consequence, at));

        if let Some((first, rest)) = alternatives.split_first() {
            let alt_at = position(*first);
            if first.kind() == "elif_clause" {
                let nested = self.if_chain(
                    alt_at,
                    first.child_by_field_name("condition"),
                    first.child_by_field_name("consequence"),
                    rest,
                );
                children.push(Node::new(NodeKind::Block, alt_at).with_children(vec![nested]));
            } else {
                children.push(self.block(first.child_by_field_name("body"), alt_at));
            }
        }

        Node::new(NodeKind::If, at).with_children(children)
    }

    fn try_statement(&self, node: TsNode) -> Node {
        let at = position(node);
        let mut children = vec![self.block(node.child_by_field_name("body"), at)];

        let mut cursor = node.walk();
        let clauses: Vec<_> = node.named_children(&mut cursor).collect();
        for clause in clauses {
            let clause_at = position(clause);
            match clause.kind() {
                "except_clause" | "except_group_clause" => {
                    let mut inner = clause.walk();
                    let parts: Vec<_> = clause.named_children(&mut inner).collect();
                    let handler_children = parts
                        .into_iter()
                        .filter_map(|p| match p.kind() {
                            "block" => Some(self.block(Some(p), clause_at)),
                            _ => self.convert(p),
                        })
                        .collect();
                    children.push(
                        Node::new(NodeKind::ExceptHandler, clause_at)
                            .with_children(handler_children),
                    );
                }
                "else_clause" => {
                    children.push(self.block(clause.child_by_field_name("body"), clause_at));
                }
                "finally_clause" => {
                    let mut inner = clause.walk();
                    let body = clause
                        .named_children(&mut inner)
                        .find(|c| c.kind() == "block");
                    children.push(self.block(body, clause_at));
                }
                _ => {}
            }
        }

        Node::new(NodeKind::Try, at).with_children(children)
    }

    /// Collect the operands of a chain of one boolean operator.
    fn bool_operands(&self, node: TsNode, op: &str, out: &mut Vec<Node>) {
        for side in ["left", "right"] {
            let Some(child) = node.child_by_field_name(side) else {
                continue;
            };
            let same_op = child.kind() == "boolean_operator"
                && child
                    .child_by_field_name("operator")
                    .map(|o| self.text(o) == op)
                    .unwrap_or(false);
            if same_op {
                self.bool_operands(child, op, out);
            } else {
                out.extend(self.convert(child));
            }
        }
    }

    /// Dotted path of a callee made only of names and attributes.
    fn callee_path(&self, node: TsNode) -> Option<String> {
        match node.kind() {
            "identifier" => Some(self.text(node).to_string()),
            "attribute" => {
                let object = self.callee_path(node.child_by_field_name("object")?)?;
                let attr = self.text(node.child_by_field_name("attribute")?);
                Some(format!("{}.{}", object, attr))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Node {
        parse_python(source).unwrap()
    }

    #[test]
    fn test_function_shape() {
        let tree = parse("async def fetch(a: int, b=1) -> str:\n    return a\n");
        let func = &tree.children[0];
        assert_eq!(func.kind, NodeKind::AsyncFunctionDef);
        assert_eq!(func.name(), Some("fetch"));

        let kinds: Vec<_> = func.children.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Argument,
                NodeKind::Argument,
                NodeKind::Generic,
                NodeKind::ReturnAnnotation,
                NodeKind::Block
            ]
        );
        assert_eq!(func.children[0].children[0].kind, NodeKind::Name);
        assert!(func.children[1].children.is_empty());
        assert_eq!(func.body()[0].kind, NodeKind::Return);
    }

    #[test]
    fn test_elif_nests_in_else_block() {
        let tree = parse("if a:\n    x = 1\nelif b:\n    y = 2\nelse:\n    z = 3\n");
        let outer = &tree.children[0];
        assert_eq!(outer.kind, NodeKind::If);
        assert_eq!(outer.children.len(), 3);

        let orelse = &outer.children[2];
        assert_eq!(orelse.kind, NodeKind::Block);
        let inner = &orelse.children[0];
        assert_eq!(inner.kind, NodeKind::If);
        assert_eq!(inner.position.line, 3);
        assert_eq!(inner.children[2].kind, NodeKind::Block);
    }

    #[test]
    fn test_else_if_has_same_shape_as_elif() {
        let elif = parse("if a:\n    pass\nelif b:\n    pass\n");
        let nested = parse("if a:\n    pass\nelse:\n    if b:\n        pass\n");
        let shape = |n: &Node| n.walk().map(|c| c.kind).collect::<Vec<_>>();
        assert_eq!(shape(&elif), shape(&nested));
    }

    #[test]
    fn test_boolean_chains_collapse() {
        let tree = parse("x = a and b and c or d\n");
        let bools: Vec<_> = tree
            .walk()
            .filter(|n| n.kind == NodeKind::BoolOp)
            .collect();
        assert_eq!(bools.len(), 2);
        assert_eq!(bools[0].name(), Some("or"));
        assert_eq!(bools[1].name(), Some("and"));
        assert_eq!(bools[1].children.len(), 3);
    }

    #[test]
    fn test_decorators_and_calls() {
        let tree = parse("@app.route('/')\n@cache\ndef index(self):\n    self.index()\n");
        let func = &tree.children[0];
        assert_eq!(func.children[0].kind, NodeKind::Decorator);
        assert_eq!(func.children[0].children[0].kind, NodeKind::Call);
        assert_eq!(func.children[1].children[0].kind, NodeKind::Name);

        let call = func
            .walk()
            .filter(|n| n.kind == NodeKind::Call)
            .last()
            .unwrap();
        assert_eq!(call.name(), Some("self.index"));
    }

    #[test]
    fn test_try_children_order() {
        let tree = parse(
            "try:\n    a()\nexcept ValueError as e:\n    b()\nelse:\n    c()\nfinally:\n    d()\n",
        );
        let kinds: Vec<_> = tree.children[0].children.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Block,
                NodeKind::ExceptHandler,
                NodeKind::Block,
                NodeKind::Block
            ]
        );
    }

    #[test]
    fn test_syntax_error_is_rejected() {
        let err = parse_python("def broken(:\n    pass\n").unwrap_err();
        assert!(matches!(err, FrontendError::Syntax { .. }));
    }
}
