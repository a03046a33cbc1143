//! The count operation

use crate::context::QueryContext;
use crate::error::QueryResult;
use crate::operation::{Fields, Operation, apply_select};
use crate::query::Query;
use fluentq_eval::Value;

/// Counts the surviving items
pub(crate) struct Count<'q> {
    query: &'q Query,
}

impl<'q> Count<'q> {
    pub(crate) fn new(query: &'q Query) -> Self {
        Self { query }
    }
}

impl Operation for Count<'_> {
    type Output = usize;

    fn apply(self, source: &[Value], context: &QueryContext) -> QueryResult<Self::Output> {
        Ok(apply_select(self.query, source, context, &Fields::All)?.len())
    }
}
