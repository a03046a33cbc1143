//! Where-expression parser for the fluentq query engine
//!
//! Parses the small expression language used by `where` clauses into the
//! `fluentq-ast` tree. The grammar covers literals, identifiers, property
//! chains, list literals, indexing, function calls, arithmetic, string
//! concatenation, comparisons, containment (`in`, `not in`, `contains`,
//! `starts with`, `ends with`, `matches`), and boolean connectives.
//!
//! # Example
//!
//! ```
//! use fluentq_parser::parse_expression;
//!
//! let expr = parse_expression(r#"person.height > 180 and city.name contains "Lyon""#)?;
//! # Ok::<(), fluentq_parser::ParseError>(())
//! ```

pub mod combinators;
mod expression;

use combinators::{Input, ws};
use fluentq_ast::Expr;
use thiserror::Error;
use winnow::prelude::*;

/// Errors produced while parsing a where expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input is not a valid expression
    #[error("syntax error at offset {offset}: {message}")]
    Syntax {
        /// Byte offset of the failure in the original input
        offset: usize,
        /// What the parser expected or found
        message: String,
    },
}

impl ParseError {
    fn at(source: &str, rest: &str, message: impl Into<String>) -> Self {
        Self::Syntax {
            offset: source.len() - rest.len(),
            message: message.into(),
        }
    }
}

/// Parse a complete where expression; the whole input must be consumed
pub fn parse_expression(source: &str) -> Result<Expr, ParseError> {
    let mut input: Input<'_> = source;

    let expr = expression::expression(&mut input)
        .map_err(|_| ParseError::at(source, input, "expected an expression"))?;

    let _ = ws.parse_next(&mut input);
    if !input.is_empty() {
        let found: String = input.chars().take(20).collect();
        return Err(ParseError::at(
            source,
            input,
            format!("unexpected input near \"{found}\""),
        ));
    }

    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluentq_ast::{BinaryExpr, BinaryOp};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn parses_complete_input() {
        let expr = parse_expression("child.age > city.minimalAge").unwrap();
        assert!(matches!(
            expr,
            Expr::Binary(BinaryExpr {
                op: BinaryOp::Greater,
                ..
            })
        ));
    }

    #[test]
    fn rejects_trailing_garbage() {
        let err = parse_expression("a == 1 garbage").unwrap_err();
        let ParseError::Syntax { offset, message } = err;
        assert_eq!(offset, 7);
        assert!(message.contains("garbage"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("a ==")]
    #[case("(a")]
    #[case("a b")]
    #[case("== 1")]
    fn rejects_malformed_input(#[case] source: &str) {
        assert!(parse_expression(source).is_err());
    }
}
