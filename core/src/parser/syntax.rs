// Syntax tree produced by the parser and consumed by the evaluator and the
// leaf counter.

use core::{fmt, ops::Range};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.0.start..self.0.end]
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(s: pest::Span<'_>) -> Self {
        Self(s.start()..s.end())
    }
}

/// The structural role of a node, named after the grammar production that
/// produced it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    Number,
    Operator,
    Expression,
    Program,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Number => write!(f, "number"),
            Category::Operator => write!(f, "operator"),
            Category::Expression => write!(f, "expr"),
            Category::Program => write!(f, "lispy"),
        }
    }
}

/// An operator symbol exactly as written in the source.
///
/// The grammar only produces `+ - * / % ^`, but trees can be built by hand
/// with any symbol; unknown symbols are rejected at evaluation time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Operator<'a>(pub &'a str);

impl<'a> Operator<'a> {
    pub fn symbol(&self) -> &'a str {
        self.0
    }

    pub fn category(&self) -> Category {
        Category::Operator
    }
}

/// Operator plus operand list, shared by parenthesized expressions and the
/// top-level program.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Form<'a> {
    pub operator: Operator<'a>,
    operands: &'a [SyntaxNode<'a>],
}

impl<'a> Form<'a> {
    /// Returns `None` for an empty operand list; every form folds over at
    /// least one operand.
    pub fn new(operator: Operator<'a>, operands: &'a [SyntaxNode<'a>]) -> Option<Self> {
        if operands.is_empty() {
            return None;
        }
        Some(Self { operator, operands })
    }

    pub fn operands(&self) -> &'a [SyntaxNode<'a>] {
        self.operands
    }

    /// The first operand (the fold's starting accumulator) and the rest.
    pub fn split_first(&self) -> (&'a SyntaxNode<'a>, &'a [SyntaxNode<'a>]) {
        match self.operands.split_first() {
            Some(split) => split,
            None => unreachable!("Form::new rejects empty operand lists"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SyntaxNode<'a> {
    /// Raw literal text, e.g. `-42` or `12.`.
    Number(&'a str),
    /// `( operator operand+ )`
    Expression(Form<'a>),
    /// `operator operand+` spanning the whole input.
    Program(Form<'a>),
}

impl<'a> SyntaxNode<'a> {
    pub fn category(&self) -> Category {
        match self {
            SyntaxNode::Number(_) => Category::Number,
            SyntaxNode::Expression(_) => Category::Expression,
            SyntaxNode::Program(_) => Category::Program,
        }
    }

    pub fn form(&self) -> Option<&Form<'a>> {
        match self {
            SyntaxNode::Number(_) => None,
            SyntaxNode::Expression(form) | SyntaxNode::Program(form) => Some(form),
        }
    }
}

impl fmt::Display for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxNode::Number(text) => write!(f, "{}", text),
            SyntaxNode::Expression(form) => write!(f, "({})", form),
            SyntaxNode::Program(form) => write!(f, "{}", form),
        }
    }
}

impl fmt::Display for Form<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operator.symbol())?;
        for operand in self.operands {
            write!(f, " {}", operand)?;
        }
        Ok(())
    }
}
