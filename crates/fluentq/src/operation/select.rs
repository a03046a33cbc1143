//! The select operation: return the post-pipeline sequence

use crate::context::QueryContext;
use crate::error::QueryResult;
use crate::operation::{Fields, Operation, apply_select};
use crate::query::Query;
use fluentq_eval::Value;

/// Returns the surviving items, projected if fields were given
pub(crate) struct Select<'q> {
    query: &'q Query,
    fields: Fields,
}

impl<'q> Select<'q> {
    pub(crate) fn new(query: &'q Query, fields: Fields) -> Self {
        Self { query, fields }
    }
}

impl Operation for Select<'_> {
    type Output = Vec<Value>;

    fn apply(self, source: &[Value], context: &QueryContext) -> QueryResult<Self::Output> {
        apply_select(self.query, source, context, &self.fields)
    }
}
