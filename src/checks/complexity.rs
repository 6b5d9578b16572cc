use crate::complexity::cognitive_score;
use crate::engine::{CheckError, NodeCheck, NodeContext};
use crate::syntax::{Node, NodeKind};
use crate::violations::complexity::{COGNITIVE_COMPLEXITY, COGNITIVE_MODULE_COMPLEXITY};

/// Whether a function defined under `parent` (its enclosing block) and
/// `grandparent` is a method.
fn defined_in_class(parent: Option<&Node>, grandparent: Option<&Node>) -> bool {
    matches!(
        (parent.map(|p| p.kind), grandparent.map(|g| g.kind)),
        (Some(NodeKind::Block), Some(NodeKind::ClassDef))
    )
}

/// Flags functions whose cognitive score exceeds the limit.
pub struct CognitiveComplexityCheck {
    max_score: u32,
}

impl CognitiveComplexityCheck {
    pub fn new(max_score: u32) -> Self {
        Self { max_score }
    }
}

impl NodeCheck for CognitiveComplexityCheck {
    fn name(&self) -> &'static str {
        "cognitive_complexity"
    }

    fn node_kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::FunctionDef, NodeKind::AsyncFunctionDef]
    }

    fn visit_node(&self, node: &Node, ctx: &mut NodeContext<'_>) -> Result<(), CheckError> {
        let is_method = defined_in_class(ctx.parent(), ctx.grandparent());
        let score = cognitive_score(node, is_method);
        if score > self.max_score {
            ctx.add_violation_with(&COGNITIVE_COMPLEXITY, node.position, score)?;
        }
        Ok(())
    }
}

/// Flags modules whose functions are too complex on average.
///
/// Runs once per module and walks the tree itself.
pub struct ModuleCognitiveCheck {
    max_average: u32,
}

impl ModuleCognitiveCheck {
    pub fn new(max_average: u32) -> Self {
        Self { max_average }
    }
}

impl NodeCheck for ModuleCognitiveCheck {
    fn name(&self) -> &'static str {
        "cognitive_module_complexity"
    }

    fn node_kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::Module]
    }

    fn visit_node(&self, node: &Node, ctx: &mut NodeContext<'_>) -> Result<(), CheckError> {
        let mut scores = Vec::new();
        collect_scores(node, None, None, &mut scores);
        if scores.is_empty() {
            return Ok(());
        }

        let average = scores.iter().sum::<u32>() as f64 / scores.len() as f64;
        let rounded = (average * 10.0).round() / 10.0;
        if rounded > self.max_average as f64 {
            ctx.add_violation_with(&COGNITIVE_MODULE_COMPLEXITY, node.position, rounded)?;
        }
        Ok(())
    }
}

fn collect_scores<'n>(
    node: &'n Node,
    parent: Option<&'n Node>,
    grandparent: Option<&'n Node>,
    scores: &mut Vec<u32>,
) {
    if node.kind.is_function() {
        scores.push(cognitive_score(node, defined_in_class(parent, grandparent)));
    }
    for child in &node.children {
        collect_scores(child, Some(node), parent, scores);
    }
}
