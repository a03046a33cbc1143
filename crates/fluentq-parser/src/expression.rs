//! Expression parser using recursive descent with precedence climbing
//!
//! One function per precedence level, from `or` (loosest) down to primary
//! expressions. Multi-word operators (`not in`, `starts with`, `ends with`)
//! are handled with checkpoint/restore on the raw input.

use crate::combinators::{
    Input, PResult, identifier, keyword, keyword_literal, lit, number, padded_keyword, padded_lit,
    string_literal, ws,
};
use fluentq_ast::{BinaryOp, Expr, FunctionCallExpr, IndexExpr, Literal, UnaryOp};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;

/// Parse a complete expression (entry point)
pub fn expression(input: &mut Input<'_>) -> PResult<Expr> {
    ws.parse_next(input)?;
    or_expression(input)
}

/// Parse an or expression (lowest precedence)
fn or_expression(input: &mut Input<'_>) -> PResult<Expr> {
    let mut left = and_expression(input)?;

    loop {
        if padded_keyword("or").parse_next(input).is_ok()
            || padded_lit("||").parse_next(input).is_ok()
        {
            let right = and_expression(input)?;
            left = Expr::binary(left, BinaryOp::Or, right);
        } else {
            break;
        }
    }

    Ok(left)
}

/// Parse an and expression
fn and_expression(input: &mut Input<'_>) -> PResult<Expr> {
    let mut left = equality_expression(input)?;

    loop {
        if padded_keyword("and").parse_next(input).is_ok()
            || padded_lit("&&").parse_next(input).is_ok()
        {
            let right = equality_expression(input)?;
            left = Expr::binary(left, BinaryOp::And, right);
        } else {
            break;
        }
    }

    Ok(left)
}

/// Parse an equality expression (==, !=)
fn equality_expression(input: &mut Input<'_>) -> PResult<Expr> {
    let mut left = comparison_expression(input)?;

    loop {
        let op = if padded_lit("==").parse_next(input).is_ok() {
            Some(BinaryOp::Equal)
        } else if padded_lit("!=").parse_next(input).is_ok() {
            Some(BinaryOp::NotEqual)
        } else {
            None
        };

        if let Some(op) = op {
            let right = comparison_expression(input)?;
            left = Expr::binary(left, op, right);
        } else {
            break;
        }
    }

    Ok(left)
}

/// Parse a comparison expression (<, >, <=, >=, in, not in, contains,
/// starts with, ends with, matches)
fn comparison_expression(input: &mut Input<'_>) -> PResult<Expr> {
    let mut left = additive_expression(input)?;

    loop {
        let checkpoint = *input;

        // Two-character tokens must be tried before their one-character prefixes
        let op = if padded_lit("<=").parse_next(input).is_ok() {
            Some(BinaryOp::LessOrEqual)
        } else if padded_lit(">=").parse_next(input).is_ok() {
            Some(BinaryOp::GreaterOrEqual)
        } else if padded_lit("<").parse_next(input).is_ok() {
            Some(BinaryOp::Less)
        } else if padded_lit(">").parse_next(input).is_ok() {
            Some(BinaryOp::Greater)
        } else if padded_keyword("not").parse_next(input).is_ok() {
            if keyword("in").parse_next(input).is_ok() {
                Some(BinaryOp::NotIn)
            } else {
                *input = checkpoint;
                None
            }
        } else if padded_keyword("in").parse_next(input).is_ok() {
            Some(BinaryOp::In)
        } else if padded_keyword("contains").parse_next(input).is_ok() {
            Some(BinaryOp::Contains)
        } else if padded_keyword("starts").parse_next(input).is_ok() {
            if keyword("with").parse_next(input).is_ok() {
                Some(BinaryOp::StartsWith)
            } else {
                *input = checkpoint;
                None
            }
        } else if padded_keyword("ends").parse_next(input).is_ok() {
            if keyword("with").parse_next(input).is_ok() {
                Some(BinaryOp::EndsWith)
            } else {
                *input = checkpoint;
                None
            }
        } else if padded_keyword("matches").parse_next(input).is_ok() {
            Some(BinaryOp::Matches)
        } else {
            None
        };

        if let Some(op) = op {
            let right = additive_expression(input)?;
            left = Expr::binary(left, op, right);
        } else {
            break;
        }
    }

    Ok(left)
}

/// Parse an additive expression (+, -, ~)
fn additive_expression(input: &mut Input<'_>) -> PResult<Expr> {
    let mut left = multiplicative_expression(input)?;

    loop {
        let op = if padded_lit("+").parse_next(input).is_ok() {
            Some(BinaryOp::Add)
        } else if padded_lit("-").parse_next(input).is_ok() {
            Some(BinaryOp::Subtract)
        } else if padded_lit("~").parse_next(input).is_ok() {
            Some(BinaryOp::Concatenate)
        } else {
            None
        };

        if let Some(op) = op {
            let right = multiplicative_expression(input)?;
            left = Expr::binary(left, op, right);
        } else {
            break;
        }
    }

    Ok(left)
}

/// Parse a multiplicative expression (*, /, %)
fn multiplicative_expression(input: &mut Input<'_>) -> PResult<Expr> {
    let mut left = power_expression(input)?;

    loop {
        let checkpoint = *input;

        let op = if padded_lit("*").parse_next(input).is_ok() {
            // A second star belongs to the power level below
            if input.starts_with('*') {
                *input = checkpoint;
                None
            } else {
                Some(BinaryOp::Multiply)
            }
        } else if padded_lit("/").parse_next(input).is_ok() {
            Some(BinaryOp::Divide)
        } else if padded_lit("%").parse_next(input).is_ok() {
            Some(BinaryOp::Modulo)
        } else {
            None
        };

        if let Some(op) = op {
            let right = power_expression(input)?;
            left = Expr::binary(left, op, right);
        } else {
            break;
        }
    }

    Ok(left)
}

/// Parse a power expression (**, right-associative)
fn power_expression(input: &mut Input<'_>) -> PResult<Expr> {
    let left = unary_expression(input)?;

    if padded_lit("**").parse_next(input).is_ok() {
        let right = power_expression(input)?;
        return Ok(Expr::binary(left, BinaryOp::Power, right));
    }

    Ok(left)
}

/// Parse a unary expression (not, !, unary -)
fn unary_expression(input: &mut Input<'_>) -> PResult<Expr> {
    ws.parse_next(input)?;

    if padded_keyword("not").parse_next(input).is_ok() || lit("!").parse_next(input).is_ok() {
        let operand = unary_expression(input)?;
        return Ok(Expr::unary(UnaryOp::Not, operand));
    }

    if lit("-").parse_next(input).is_ok() {
        let operand = unary_expression(input)?;
        return Ok(Expr::unary(UnaryOp::Negate, operand));
    }

    postfix_expression(input)
}

/// Parse a postfix expression: property access (.name) and indexing ([i])
fn postfix_expression(input: &mut Input<'_>) -> PResult<Expr> {
    let mut expr = primary_expression(input)?;

    loop {
        let checkpoint = *input;
        ws.parse_next(input)?;

        if lit(".").parse_next(input).is_ok() {
            ws.parse_next(input)?;
            match identifier(input) {
                Ok(name) => {
                    expr = Expr::property(expr, name);
                    continue;
                }
                Err(_) => {
                    *input = checkpoint;
                    break;
                }
            }
        }

        if lit("[").parse_next(input).is_ok() {
            let index = expression(input)?;
            ws.parse_next(input)?;
            lit("]").void().parse_next(input)?;
            expr = Expr::Index(IndexExpr {
                object: Box::new(expr),
                index: Box::new(index),
            });
            continue;
        }

        *input = checkpoint;
        break;
    }

    Ok(expr)
}

/// Parse a primary expression: parens, list literal, literal, identifier,
/// or function call
fn primary_expression(input: &mut Input<'_>) -> PResult<Expr> {
    ws.parse_next(input)?;

    if lit("(").parse_next(input).is_ok() {
        let expr = expression(input)?;
        ws.parse_next(input)?;
        lit(")").void().parse_next(input)?;
        return Ok(expr);
    }

    if lit("[").parse_next(input).is_ok() {
        let elements = argument_list(input, "]")?;
        return Ok(Expr::List(elements));
    }

    if let Ok(text) = string_literal(input) {
        return Ok(Expr::Literal(Literal::String(text)));
    }

    if let Ok(literal) = number(input) {
        return Ok(Expr::Literal(literal));
    }

    if let Ok(literal) = keyword_literal(input) {
        return Ok(Expr::Literal(literal));
    }

    let name = identifier(input)?;

    let checkpoint = *input;
    ws.parse_next(input)?;
    if lit("(").parse_next(input).is_ok() {
        let args = argument_list(input, ")")?;
        return Ok(Expr::FunctionCall(FunctionCallExpr { name, args }));
    }
    *input = checkpoint;

    Ok(Expr::Identifier(name))
}

/// Parse a comma-separated expression list up to the given closing token
fn argument_list(input: &mut Input<'_>, closing: &'static str) -> PResult<Vec<Expr>> {
    let mut elements = Vec::new();

    ws.parse_next(input)?;
    if lit(closing).parse_next(input).is_ok() {
        return Ok(elements);
    }

    loop {
        elements.push(expression(input)?);
        ws.parse_next(input)?;
        if lit(",").parse_next(input).is_ok() {
            continue;
        }
        if lit(closing).parse_next(input).is_ok() {
            return Ok(elements);
        }
        return Err(ErrMode::Backtrack(ContextError::new()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluentq_ast::BinaryExpr;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> Expr {
        let mut input: Input<'_> = source;
        let expr = expression(&mut input).expect("expression should parse");
        assert_eq!(input.trim(), "", "parser left trailing input");
        expr
    }

    #[test]
    fn parses_comparison_with_property_chain() {
        let expr = parse("person.height > 180");
        let Expr::Binary(BinaryExpr { left, op, right }) = expr else {
            panic!("expected binary expression");
        };
        assert_eq!(op, BinaryOp::Greater);
        assert_eq!(*left, Expr::property(Expr::identifier("person"), "height"));
        assert_eq!(*right, Expr::Literal(Literal::Int(180)));
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let expr = parse("a or b and c");
        let Expr::Binary(BinaryExpr { op, right, .. }) = expr else {
            panic!("expected binary expression");
        };
        assert_eq!(op, BinaryOp::Or);
        let Expr::Binary(BinaryExpr { op: inner, .. }) = *right else {
            panic!("expected nested and");
        };
        assert_eq!(inner, BinaryOp::And);
    }

    #[test]
    fn multi_word_operators() {
        let expr = parse(r#"name starts with "Hu" and name not in ["Bob"]"#);
        let Expr::Binary(BinaryExpr { left, op, right }) = expr else {
            panic!("expected binary expression");
        };
        assert_eq!(op, BinaryOp::And);
        assert!(matches!(
            *left,
            Expr::Binary(BinaryExpr {
                op: BinaryOp::StartsWith,
                ..
            })
        ));
        assert!(matches!(
            *right,
            Expr::Binary(BinaryExpr {
                op: BinaryOp::NotIn,
                ..
            })
        ));
    }

    #[test]
    fn contains_operator_with_double_quoted_string() {
        let expr = parse(r#"city.name contains "Lyon""#);
        assert!(matches!(
            expr,
            Expr::Binary(BinaryExpr {
                op: BinaryOp::Contains,
                ..
            })
        ));
    }

    #[test]
    fn power_is_right_associative() {
        let expr = parse("2 ** 3 ** 2");
        let Expr::Binary(BinaryExpr { left, op, right }) = expr else {
            panic!("expected binary expression");
        };
        assert_eq!(op, BinaryOp::Power);
        assert_eq!(*left, Expr::Literal(Literal::Int(2)));
        assert!(matches!(
            *right,
            Expr::Binary(BinaryExpr {
                op: BinaryOp::Power,
                ..
            })
        ));
    }

    #[test]
    fn function_call_with_arguments() {
        let expr = parse("clamp(age, 0, 100)");
        let Expr::FunctionCall(call) = expr else {
            panic!("expected function call");
        };
        assert_eq!(call.name, "clamp");
        assert_eq!(call.args.len(), 3);
    }

    #[test]
    fn float_and_int_literals() {
        assert_eq!(parse("30.75"), Expr::Literal(Literal::Float(30.75)));
        assert_eq!(parse("123"), Expr::Literal(Literal::Int(123)));
    }

    #[test]
    fn indexing_binds_to_postfix_position() {
        let expr = parse("scores[0] >= 10");
        let Expr::Binary(BinaryExpr { left, .. }) = expr else {
            panic!("expected binary expression");
        };
        assert!(matches!(*left, Expr::Index(_)));
    }
}
