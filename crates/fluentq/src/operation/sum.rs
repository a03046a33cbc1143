//! The sum operation

use crate::context::QueryContext;
use crate::error::{QueryError, QueryResult};
use crate::operation::{Fields, Operation, apply_select};
use crate::query::Query;
use fluentq_eval::Value;

/// Sums the projected values; stays integral until a float appears
pub(crate) struct Sum<'q> {
    query: &'q Query,
    fields: Fields,
}

impl<'q> Sum<'q> {
    pub(crate) fn new(query: &'q Query, fields: Fields) -> Self {
        Self { query, fields }
    }
}

impl Operation for Sum<'_> {
    type Output = Value;

    fn apply(self, source: &[Value], context: &QueryContext) -> QueryResult<Self::Output> {
        let values = apply_select(self.query, source, context, &self.fields)?;
        sum_values("sum", &values)
    }
}

/// Sum a numeric sequence, promoting to float on the first float addend
/// or on integer overflow
pub(crate) fn sum_values(operation: &str, values: &[Value]) -> QueryResult<Value> {
    let mut int_total: i64 = 0;
    let mut float_total: f64 = 0.0;
    let mut is_float = false;

    for value in values {
        match value {
            Value::Int(i) if !is_float => match int_total.checked_add(*i) {
                Some(total) => int_total = total,
                None => {
                    is_float = true;
                    float_total = int_total as f64 + *i as f64;
                }
            },
            Value::Int(i) => float_total += *i as f64,
            Value::Float(f) => {
                if !is_float {
                    is_float = true;
                    float_total = int_total as f64 + f;
                } else {
                    float_total += f;
                }
            }
            _ => {
                return Err(QueryError::incompatible_collection(
                    operation,
                    "Operation can only be applied to a collection of numerics",
                ));
            }
        }
    }

    if is_float {
        Ok(Value::Float(float_total))
    } else {
        Ok(Value::Int(int_total))
    }
}
