//! The each operation

use crate::context::QueryContext;
use crate::error::QueryResult;
use crate::operation::{Fields, Operation, apply_select};
use crate::query::Query;
use fluentq_eval::Value;

/// Maps a callback over the surviving whole items, keeping input order
pub(crate) struct Each<'q, F> {
    query: &'q Query,
    callback: F,
}

impl<'q, F> Each<'q, F>
where
    F: FnMut(&Value) -> Value,
{
    pub(crate) fn new(query: &'q Query, callback: F) -> Self {
        Self { query, callback }
    }
}

impl<F> Operation for Each<'_, F>
where
    F: FnMut(&Value) -> Value,
{
    type Output = Vec<Value>;

    fn apply(mut self, source: &[Value], context: &QueryContext) -> QueryResult<Self::Output> {
        let items = apply_select(self.query, source, context, &Fields::All)?;
        Ok(items.iter().map(|item| (self.callback)(item)).collect())
    }
}
