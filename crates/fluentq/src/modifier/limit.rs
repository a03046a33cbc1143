//! The limit modifier: keep the leading elements

use crate::context::QueryContext;
use crate::error::{QueryError, QueryResult};
use crate::modifier::Modifier;
use fluentq_eval::Value;

/// Keeps at most the first `limit` elements
#[derive(Debug)]
pub(crate) struct Limit {
    limit: Option<i64>,
}

impl Limit {
    pub(crate) fn new(limit: Option<i64>) -> Self {
        Self { limit }
    }
}

impl Modifier for Limit {
    fn apply(&self, mut source: Vec<Value>, _context: &QueryContext) -> QueryResult<Vec<Value>> {
        let Some(limit) = self.limit else {
            return Ok(source);
        };

        if limit <= 0 {
            return Err(QueryError::invalid_modifier(
                "limit",
                "The limit must be a positive integer or null to set no limit",
            ));
        }

        source.truncate(limit as usize);
        Ok(source)
    }
}
