//! The offset modifier: skip the leading elements

use crate::context::QueryContext;
use crate::error::{QueryError, QueryResult};
use crate::modifier::Modifier;
use fluentq_eval::Value;

/// Skips the first `offset` elements
///
/// Zero is rejected: a caller wanting no offset passes `None`.
#[derive(Debug)]
pub(crate) struct Offset {
    offset: Option<i64>,
}

impl Offset {
    pub(crate) fn new(offset: Option<i64>) -> Self {
        Self { offset }
    }
}

impl Modifier for Offset {
    fn apply(&self, source: Vec<Value>, _context: &QueryContext) -> QueryResult<Vec<Value>> {
        let Some(offset) = self.offset else {
            return Ok(source);
        };

        if offset <= 0 {
            return Err(QueryError::invalid_modifier(
                "offset",
                "The offset must be a positive integer or null to set no offset",
            ));
        }

        Ok(source.into_iter().skip(offset as usize).collect())
    }
}
