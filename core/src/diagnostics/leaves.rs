use crate::parser::{Form, Operator, SyntaxNode};

/// Count the leaves of a syntax tree.
///
/// Numbers and operators are one leaf each. A form adds its operator leaf to
/// the leaves of its operands, and the program root adds one more slot for
/// the start marker, so `+ 1 2` has 4 leaves and `+ 1 (* 2 3)` has 6.
pub fn count_leaves(node: &SyntaxNode<'_>) -> u64 {
    match node {
        SyntaxNode::Number(_) => 1,
        SyntaxNode::Expression(form) => form_leaves(form),
        SyntaxNode::Program(form) => 1 + form_leaves(form),
    }
}

impl Operator<'_> {
    pub fn count_leaves(&self) -> u64 {
        1
    }
}

fn form_leaves(form: &Form<'_>) -> u64 {
    form.operator.count_leaves() + form.operands().iter().map(count_leaves).sum::<u64>()
}
