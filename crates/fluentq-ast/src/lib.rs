//! Expression AST for the fluentq query engine
//!
//! This crate defines the nodes of the small expression language used by
//! `where` clauses: literals, identifiers, property/index access, function
//! calls, and the operator set with precedence metadata. Parsing lives in
//! `fluentq-parser`, evaluation in `fluentq-eval`.

mod expression;
mod literal;
mod operator;

pub use expression::*;
pub use literal::*;
pub use operator::*;

/// Type alias for boxed expressions
pub type BoxExpr = Box<Expr>;
