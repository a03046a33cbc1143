//! Expression AST nodes

use crate::{BinaryOp, BoxExpr, Literal, UnaryOp};
use serde::{Deserialize, Serialize};

/// All expression types of the where language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Literal value
    Literal(Literal),
    /// Identifier reference, resolved against the evaluation environment
    Identifier(String),
    /// Property access (expr.name)
    Property(PropertyExpr),
    /// Indexer access (expr[index])
    Index(IndexExpr),
    /// List literal ([a, b, c])
    List(Vec<Expr>),
    /// Unary operation
    Unary(UnaryExpr),
    /// Binary operation
    Binary(BinaryExpr),
    /// Function invocation
    FunctionCall(FunctionCallExpr),
}

/// Property access on an object-valued expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyExpr {
    /// Source expression
    pub object: BoxExpr,
    /// Property name
    pub name: String,
}

/// Indexer access on a list-valued expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexExpr {
    /// Source expression
    pub object: BoxExpr,
    /// Index expression, must evaluate to an integer
    pub index: BoxExpr,
}

/// Unary operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    /// The operator
    pub op: UnaryOp,
    /// The operand
    pub operand: BoxExpr,
}

/// Binary operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    /// Left operand
    pub left: BoxExpr,
    /// The operator
    pub op: BinaryOp,
    /// Right operand
    pub right: BoxExpr,
}

/// Function invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCallExpr {
    /// Function name, resolved against the registry
    pub name: String,
    /// Argument expressions
    pub args: Vec<Expr>,
}

impl Expr {
    /// Build a binary expression
    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Self::Binary(BinaryExpr {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    /// Build a unary expression
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::Unary(UnaryExpr {
            op,
            operand: Box::new(operand),
        })
    }

    /// Build a property access expression
    pub fn property(object: Expr, name: impl Into<String>) -> Self {
        Self::Property(PropertyExpr {
            object: Box::new(object),
            name: name.into(),
        })
    }

    /// Build an identifier reference
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }
}
