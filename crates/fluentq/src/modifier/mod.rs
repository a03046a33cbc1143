//! Modifiers: configured transforms applied to a materialized sequence
//! before a terminal operation runs
//!
//! At most one of each kind is installed on a query frame. They are
//! applied in a fixed order (where → order by → offset → limit) by the
//! operation pipeline, and validate their configuration lazily, when
//! [`Modifier::apply`] runs.

mod limit;
mod offset;
mod order_by;
mod where_clause;

pub(crate) use limit::Limit;
pub(crate) use offset::Offset;
pub(crate) use order_by::OrderBy;
pub(crate) use where_clause::Where;

use crate::context::QueryContext;
use crate::error::QueryResult;
use fluentq_eval::Value;

/// A transform over a materialized sequence
pub(crate) trait Modifier {
    /// Apply the transform, preserving element identity
    fn apply(&self, source: Vec<Value>, context: &QueryContext) -> QueryResult<Vec<Value>>;
}
