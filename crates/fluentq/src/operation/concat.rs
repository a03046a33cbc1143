//! The concat operation

use crate::context::QueryContext;
use crate::error::QueryResult;
use crate::operation::{Fields, Operation, apply_select};
use crate::query::Query;
use fluentq_eval::Value;

/// Joins the projected values into one string, no trailing separator
pub(crate) struct Concat<'q> {
    query: &'q Query,
    fields: Fields,
    separator: String,
}

impl<'q> Concat<'q> {
    pub(crate) fn new(query: &'q Query, fields: Fields, separator: String) -> Self {
        Self {
            query,
            fields,
            separator,
        }
    }
}

impl Operation for Concat<'_> {
    type Output = String;

    fn apply(self, source: &[Value], context: &QueryContext) -> QueryResult<Self::Output> {
        let values = apply_select(self.query, source, context, &self.fields)?;

        let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
        Ok(rendered.join(&self.separator))
    }
}
