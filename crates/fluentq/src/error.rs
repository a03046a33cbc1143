//! Query engine errors
//!
//! Every variant is an immediately-surfaced usage error: a failure aborts
//! the whole terminal call, nothing is retried, and no partial result is
//! produced. Parser and evaluator errors pass through transparently.

use fluentq_eval::EvalError;
use fluentq_parser::ParseError;
use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while building or executing a query
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QueryError {
    /// Alias reused within one query-context lineage
    #[error(
        "Alias \"{0}\" is already taken in the query. You should choose another name for your alias."
    )]
    AliasAlreadyTaken(String),

    /// Source collection or projected values unusable by the operation
    #[error(
        "The given collection is incompatible with \"{operation}\" because of the following reason: {message}."
    )]
    IncompatibleCollection { operation: String, message: String },

    /// Field value unusable by the operation
    #[error(
        "The given field is incompatible with \"{operation}\" because of the following reason: {message}."
    )]
    IncompatibleField { operation: String, message: String },

    /// A modifier was configured with invalid values
    #[error("The modifier \"{modifier}\" is wrongly configured: {message}.")]
    InvalidModifierConfiguration { modifier: String, message: String },

    /// `select_one` matched more than one item
    #[error("The query returned {0} result(s). You may use \"select\" instead of \"selectOne\".")]
    NonUniqueResult(usize),

    /// Duplicate name in the process-wide where-function registry
    #[error(
        "Function \"{0}\" has already been globally registered to be used in the \"where\" clause of Query."
    )]
    AlreadyRegisteredWhereFunction(String),

    /// Where expression failed to parse
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Expression evaluation or property access failed
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl QueryError {
    pub(crate) fn incompatible_collection(
        operation: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::IncompatibleCollection {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub(crate) fn incompatible_field(
        operation: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::IncompatibleField {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_modifier(
        modifier: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidModifierConfiguration {
            modifier: modifier.into(),
            message: message.into(),
        }
    }
}
