//! Evaluation errors

use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur while evaluating a where expression or resolving
/// a property path
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Identifier not present in the evaluation environment
    #[error("undefined identifier \"{name}\"")]
    UndefinedIdentifier { name: String },

    /// Function not present in the registry
    #[error("undefined function \"{name}\"")]
    UndefinedFunction { name: String },

    /// Property not present on the object
    #[error("unknown property \"{property}\"")]
    UnknownProperty { property: String },

    /// Malformed property path
    #[error("malformed property path \"{path}\"")]
    InvalidPath { path: String },

    /// Type mismatch error
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Invalid operand error
    #[error("invalid operand for \"{operator}\": {message}")]
    InvalidOperand { operator: String, message: String },

    /// Division or modulo by zero
    #[error("division by zero")]
    DivisionByZero,

    /// Index out of bounds
    #[error("index {index} out of bounds for list of length {length}")]
    IndexOutOfBounds { index: i64, length: usize },

    /// Invalid regex pattern
    #[error("invalid regex pattern: {pattern}")]
    InvalidRegex { pattern: String },

    /// Custom function rejected its arguments
    #[error("invalid argument for function \"{function}\": {message}")]
    InvalidArgument { function: String, message: String },
}

impl EvalError {
    /// Create an undefined identifier error
    pub fn undefined_identifier(name: impl Into<String>) -> Self {
        Self::UndefinedIdentifier { name: name.into() }
    }

    /// Create an undefined function error
    pub fn undefined_function(name: impl Into<String>) -> Self {
        Self::UndefinedFunction { name: name.into() }
    }

    /// Create an unknown property error
    pub fn unknown_property(property: impl Into<String>) -> Self {
        Self::UnknownProperty {
            property: property.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an invalid operand error
    pub fn invalid_operand(operator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOperand {
            operator: operator.into(),
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            function: function.into(),
            message: message.into(),
        }
    }
}
