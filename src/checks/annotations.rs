use crate::engine::{CheckError, NodeCheck, NodeContext};
use crate::syntax::{Node, NodeKind};
use crate::violations::consistency::MULTILINE_FUNCTION_ANNOTATION;

/// Flags argument and return annotations that span several lines.
pub struct MultilineAnnotationCheck;

impl NodeCheck for MultilineAnnotationCheck {
    fn name(&self) -> &'static str {
        "multiline_function_annotation"
    }

    fn node_kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::Argument, NodeKind::ReturnAnnotation]
    }

    fn visit_node(&self, node: &Node, ctx: &mut NodeContext<'_>) -> Result<(), CheckError> {
        if !spans_lines(node) {
            return Ok(());
        }

        // return annotations are reported on their function
        let position = match (node.kind, ctx.parent()) {
            (NodeKind::ReturnAnnotation, Some(function)) if function.kind.is_function() => {
                function.position
            }
            _ => node.position,
        };
        ctx.add_violation(&MULTILINE_FUNCTION_ANNOTATION, position)
    }
}

fn spans_lines(node: &Node) -> bool {
    let line = node.position.line;
    node.walk().any(|part| part.position.line != line)
}
