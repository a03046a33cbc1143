//! The average operation

use crate::context::QueryContext;
use crate::error::{QueryError, QueryResult};
use crate::operation::sum::sum_values;
use crate::operation::{Fields, Operation, apply_select};
use crate::query::Query;
use fluentq_eval::Value;

/// Averages the projected values as a float
///
/// An empty post-pipeline sequence is rejected rather than averaged to NaN.
pub(crate) struct Average<'q> {
    query: &'q Query,
    fields: Fields,
}

impl<'q> Average<'q> {
    pub(crate) fn new(query: &'q Query, fields: Fields) -> Self {
        Self { query, fields }
    }
}

impl Operation for Average<'_> {
    type Output = f64;

    fn apply(self, source: &[Value], context: &QueryContext) -> QueryResult<Self::Output> {
        let values = apply_select(self.query, source, context, &self.fields)?;

        if values.is_empty() {
            return Err(QueryError::incompatible_collection(
                "average",
                "Operation cannot be applied on an empty collection",
            ));
        }

        let total = match sum_values("average", &values)? {
            Value::Int(i) => i as f64,
            Value::Float(f) => f,
            _ => unreachable!("sum of numerics is numeric"),
        };

        Ok(total / values.len() as f64)
    }
}
