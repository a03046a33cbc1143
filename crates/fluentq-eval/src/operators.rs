//! Value-level operator implementations
//!
//! Free helpers over [`Value`] used by the evaluator dispatch. Logical
//! operators are not here: `and`/`or` short-circuit and are handled by the
//! evaluator itself.

use crate::error::{EvalError, EvalResult};
use crate::value::Value;
use fluentq_ast::BinaryOp;
use std::cmp::Ordering;

/// Apply a non-logical binary operator to two evaluated operands
pub fn apply_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult<Value> {
    match op {
        BinaryOp::Equal => Ok(Value::Bool(left.loose_eq(right))),
        BinaryOp::NotEqual => Ok(Value::Bool(!left.loose_eq(right))),
        BinaryOp::Less | BinaryOp::LessOrEqual | BinaryOp::Greater | BinaryOp::GreaterOrEqual => {
            relational(op, left, right)
        }
        BinaryOp::In => membership(left, right).map(Value::Bool),
        BinaryOp::NotIn => membership(left, right).map(|found| Value::Bool(!found)),
        BinaryOp::Contains => membership(right, left).map(Value::Bool),
        BinaryOp::StartsWith => {
            let (subject, prefix) = string_operands(op, left, right)?;
            Ok(Value::Bool(subject.starts_with(prefix)))
        }
        BinaryOp::EndsWith => {
            let (subject, suffix) = string_operands(op, left, right)?;
            Ok(Value::Bool(subject.ends_with(suffix)))
        }
        BinaryOp::Matches => {
            let (subject, pattern) = string_operands(op, left, right)?;
            let regex = regex::Regex::new(pattern).map_err(|_| EvalError::InvalidRegex {
                pattern: pattern.to_string(),
            })?;
            Ok(Value::Bool(regex.is_match(subject)))
        }
        BinaryOp::Concatenate => Ok(Value::String(format!("{left}{right}"))),
        BinaryOp::Add
        | BinaryOp::Subtract
        | BinaryOp::Multiply
        | BinaryOp::Divide
        | BinaryOp::Modulo
        | BinaryOp::Power => arithmetic(op, left, right),
        BinaryOp::And | BinaryOp::Or => {
            unreachable!("logical operators are dispatched by the evaluator")
        }
    }
}

/// Arithmetic negation
pub fn negate(value: &Value) -> EvalResult<Value> {
    match value {
        Value::Int(i) => Ok(Value::Int(-i)),
        Value::Float(f) => Ok(Value::Float(-f)),
        other => Err(EvalError::type_mismatch("number", other.kind())),
    }
}

/// Ordering comparisons: numbers with numbers, strings with strings
fn relational(op: BinaryOp, left: &Value, right: &Value) -> EvalResult<Value> {
    let ordering = match (left, right) {
        (Value::String(a), Value::String(b)) => a.cmp(b),
        _ => {
            let (a, b) = numeric_operands(op, left, right)?;
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
    };

    let result = match op {
        BinaryOp::Less => ordering == Ordering::Less,
        BinaryOp::LessOrEqual => ordering != Ordering::Greater,
        BinaryOp::Greater => ordering == Ordering::Greater,
        BinaryOp::GreaterOrEqual => ordering != Ordering::Less,
        _ => unreachable!("not a relational operator"),
    };

    Ok(Value::Bool(result))
}

/// Membership: element in list, or substring in string
fn membership(needle: &Value, haystack: &Value) -> EvalResult<bool> {
    match haystack {
        Value::List(items) => Ok(items.iter().any(|item| item.loose_eq(needle))),
        Value::String(subject) => match needle {
            Value::String(part) => Ok(subject.contains(part.as_str())),
            other => Err(EvalError::type_mismatch("string", other.kind())),
        },
        other => Err(EvalError::type_mismatch("list or string", other.kind())),
    }
}

/// Numeric arithmetic with integer/float promotion
fn arithmetic(op: BinaryOp, left: &Value, right: &Value) -> EvalResult<Value> {
    if let (Value::Int(a), Value::Int(b)) = (left, right) {
        return integer_arithmetic(op, *a, *b);
    }

    let (a, b) = numeric_operands(op, left, right)?;
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Subtract => a - b,
        BinaryOp::Multiply => a * b,
        BinaryOp::Divide => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            a / b
        }
        BinaryOp::Modulo => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            a % b
        }
        BinaryOp::Power => a.powf(b),
        _ => unreachable!("not an arithmetic operator"),
    };

    Ok(Value::Float(result))
}

/// Integer arithmetic; division yields an integer only when exact
fn integer_arithmetic(op: BinaryOp, a: i64, b: i64) -> EvalResult<Value> {
    let overflow = || EvalError::invalid_operand(op.symbol(), "integer overflow");

    match op {
        BinaryOp::Add => a.checked_add(b).map(Value::Int).ok_or_else(overflow),
        BinaryOp::Subtract => a.checked_sub(b).map(Value::Int).ok_or_else(overflow),
        BinaryOp::Multiply => a.checked_mul(b).map(Value::Int).ok_or_else(overflow),
        BinaryOp::Divide => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            if a % b == 0 {
                Ok(Value::Int(a / b))
            } else {
                Ok(Value::Float(a as f64 / b as f64))
            }
        }
        BinaryOp::Modulo => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(Value::Int(a % b))
        }
        BinaryOp::Power => {
            let exponent = u32::try_from(b).ok();
            match exponent.and_then(|e| a.checked_pow(e)) {
                Some(result) => Ok(Value::Int(result)),
                None => Ok(Value::Float((a as f64).powf(b as f64))),
            }
        }
        _ => unreachable!("not an arithmetic operator"),
    }
}

/// Both operands as floats, or a type mismatch naming the operator
fn numeric_operands(op: BinaryOp, left: &Value, right: &Value) -> EvalResult<(f64, f64)> {
    match (left.as_number(), right.as_number()) {
        (Some(a), Some(b)) => Ok((a, b)),
        (None, _) => Err(EvalError::invalid_operand(
            op.symbol(),
            format!("expected a number, found {}", left.kind()),
        )),
        (_, None) => Err(EvalError::invalid_operand(
            op.symbol(),
            format!("expected a number, found {}", right.kind()),
        )),
    }
}

/// Both operands as strings, or a type mismatch naming the operator
fn string_operands<'a>(
    op: BinaryOp,
    left: &'a Value,
    right: &'a Value,
) -> EvalResult<(&'a str, &'a str)> {
    match (left.as_str(), right.as_str()) {
        (Some(a), Some(b)) => Ok((a, b)),
        (None, _) => Err(EvalError::invalid_operand(
            op.symbol(),
            format!("expected a string, found {}", left.kind()),
        )),
        (_, None) => Err(EvalError::invalid_operand(
            op.symbol(),
            format!("expected a string, found {}", right.kind()),
        )),
    }
}
