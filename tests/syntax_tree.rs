use lispy::{
    Category, Form, Operator, SyntaxNode, Value, apply_operator, count_leaves, evaluate,
};

// Trees built by hand reach operators the grammar never produces.

#[test]
fn test_invalid_operator_propagates() {
    let inner_operands = [SyntaxNode::Number("2"), SyntaxNode::Number("3")];
    let inner = SyntaxNode::Expression(Form::new(Operator("&"), &inner_operands).unwrap());
    let operands = [SyntaxNode::Number("1"), inner];
    let program = SyntaxNode::Program(Form::new(Operator("+"), &operands).unwrap());

    assert_eq!(program.to_string(), "+ 1 (& 2 3)");
    assert_eq!(evaluate(&program).to_string(), "Error: Invalid operator.");
    assert_eq!(count_leaves(&program), 6);
}

#[test]
fn test_categories() {
    let operands = [SyntaxNode::Number("1")];
    let form = Form::new(Operator("^"), &operands).unwrap();
    assert_eq!(SyntaxNode::Program(form).category(), Category::Program);
    assert_eq!(form.operator.category(), Category::Operator);
    assert_eq!(Category::Program.to_string(), "lispy");
}

#[test]
fn test_apply_operator_directly() {
    assert_eq!(
        apply_operator(Value::Number(7), "%", Value::Number(4)),
        Value::Number(3)
    );
}
