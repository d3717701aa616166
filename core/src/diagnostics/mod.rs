//! Observational walks over the syntax tree.

mod leaves;

pub use leaves::count_leaves;
