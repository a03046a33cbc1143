//! Expression operators with precedence information

use serde::{Deserialize, Serialize};

/// Binary operators with their precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Precedence 1 (lowest)
    /// Logical or
    Or,

    // Precedence 2
    /// Logical and
    And,

    // Precedence 3
    /// Equality
    Equal,
    /// Inequality
    NotEqual,

    // Precedence 4
    /// Less than
    Less,
    /// Less than or equal
    LessOrEqual,
    /// Greater than
    Greater,
    /// Greater than or equal
    GreaterOrEqual,
    /// Membership test (element in collection, substring in string)
    In,
    /// Negated membership test
    NotIn,
    /// Containment test (collection contains element)
    Contains,
    /// String prefix test
    StartsWith,
    /// String suffix test
    EndsWith,
    /// Regular expression test
    Matches,

    // Precedence 5
    /// Addition
    Add,
    /// Subtraction
    Subtract,
    /// String concatenation
    Concatenate,

    // Precedence 6
    /// Multiplication
    Multiply,
    /// Division
    Divide,
    /// Modulo
    Modulo,

    // Precedence 7 (highest for binary) - right-associative
    /// Power/exponentiation
    Power,
}

impl BinaryOp {
    /// Get the precedence level (1-7, higher binds tighter)
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Equal | Self::NotEqual => 3,
            Self::Less
            | Self::LessOrEqual
            | Self::Greater
            | Self::GreaterOrEqual
            | Self::In
            | Self::NotIn
            | Self::Contains
            | Self::StartsWith
            | Self::EndsWith
            | Self::Matches => 4,
            Self::Add | Self::Subtract | Self::Concatenate => 5,
            Self::Multiply | Self::Divide | Self::Modulo => 6,
            Self::Power => 7,
        }
    }

    /// Check if operator is right-associative
    pub const fn is_right_associative(&self) -> bool {
        matches!(self, Self::Power)
    }

    /// Check if this is a comparison operator
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Equal
                | Self::NotEqual
                | Self::Less
                | Self::LessOrEqual
                | Self::Greater
                | Self::GreaterOrEqual
        )
    }

    /// Check if this is a logical operator
    pub const fn is_logical(&self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// The operator's surface syntax, used in error messages
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Or => "or",
            Self::And => "and",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::In => "in",
            Self::NotIn => "not in",
            Self::Contains => "contains",
            Self::StartsWith => "starts with",
            Self::EndsWith => "ends with",
            Self::Matches => "matches",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Concatenate => "~",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "**",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Logical negation (not / !)
    Not,
    /// Arithmetic negation
    Negate,
}

impl UnaryOp {
    /// The operator's surface syntax, used in error messages
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Not => "not",
            Self::Negate => "-",
        }
    }
}
