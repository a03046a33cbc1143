//! The select-one operation: at most a single result

use crate::context::QueryContext;
use crate::error::{QueryError, QueryResult};
use crate::operation::{Fields, Operation, apply_select};
use crate::query::Query;
use fluentq_eval::Value;

/// Returns the single surviving item, or `None` when nothing survives
pub(crate) struct SelectOne<'q> {
    query: &'q Query,
    fields: Fields,
}

impl<'q> SelectOne<'q> {
    pub(crate) fn new(query: &'q Query, fields: Fields) -> Self {
        Self { query, fields }
    }
}

impl Operation for SelectOne<'_> {
    type Output = Option<Value>;

    fn apply(self, source: &[Value], context: &QueryContext) -> QueryResult<Self::Output> {
        let result = apply_select(self.query, source, context, &self.fields)?;

        if result.len() > 1 {
            return Err(QueryError::NonUniqueResult(result.len()));
        }

        Ok(result.into_iter().next())
    }
}
