//! The min operation

use crate::context::QueryContext;
use crate::error::QueryResult;
use crate::operation::{Fields, Operation, apply_select};
use crate::query::Query;
use fluentq_eval::Value;

/// Minimum of the projected values by natural ordering, `None` when empty
pub(crate) struct Min<'q> {
    query: &'q Query,
    fields: Fields,
}

impl<'q> Min<'q> {
    pub(crate) fn new(query: &'q Query, fields: Fields) -> Self {
        Self { query, fields }
    }
}

impl Operation for Min<'_> {
    type Output = Option<Value>;

    fn apply(self, source: &[Value], context: &QueryContext) -> QueryResult<Self::Output> {
        let values = apply_select(self.query, source, context, &self.fields)?;
        Ok(values.into_iter().min_by(|a, b| a.compare(b)))
    }
}
