//! Operations: terminal (or flattening) consumers of a query
//!
//! Every operation funnels its input through the shared pipeline
//! [`apply_select`]: where → order by → offset → limit, in that fixed
//! order, then an optional field projection. The operation then performs
//! its own reduction on the survivors.

mod average;
mod concat;
mod count;
mod each;
mod max;
mod min;
mod select;
mod select_many;
mod select_one;
mod sum;

pub(crate) use average::Average;
pub(crate) use concat::Concat;
pub(crate) use count::Count;
pub(crate) use each::Each;
pub(crate) use max::Max;
pub(crate) use min::Min;
pub(crate) use select::Select;
pub(crate) use select_many::SelectMany;
pub(crate) use select_one::SelectOne;
pub(crate) use sum::Sum;

use crate::context::QueryContext;
use crate::error::QueryResult;
use crate::modifier::Modifier;
use crate::query::Query;
use fluentq_eval::{Object, PropertyAccessor, Value};

/// Field projection applied at the end of the modifier pipeline
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Fields {
    /// No projection: whole items pass through
    #[default]
    All,
    /// Project each item to the value of a single field
    One(String),
    /// Project each item to an object mapping the named fields to their
    /// values, in the given order
    Many(Vec<String>),
}

impl From<&str> for Fields {
    fn from(field: &str) -> Self {
        Self::One(field.to_string())
    }
}

impl From<String> for Fields {
    fn from(field: String) -> Self {
        Self::One(field)
    }
}

impl From<Option<&str>> for Fields {
    fn from(field: Option<&str>) -> Self {
        match field {
            Some(field) => Self::One(field.to_string()),
            None => Self::All,
        }
    }
}

impl From<Vec<String>> for Fields {
    fn from(fields: Vec<String>) -> Self {
        Self::Many(fields)
    }
}

impl From<Vec<&str>> for Fields {
    fn from(fields: Vec<&str>) -> Self {
        Self::Many(fields.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Fields {
    fn from(fields: [&str; N]) -> Self {
        Self::Many(fields.into_iter().map(str::to_string).collect())
    }
}

/// A terminal or flattening consumer bound to its parent query frame
pub(crate) trait Operation {
    /// What the operation produces
    type Output;

    /// Run the modifier pipeline and reduce the survivors
    fn apply(self, source: &[Value], context: &QueryContext) -> QueryResult<Self::Output>;
}

/// The shared pipeline: filter, order, skip, take, then project
pub(crate) fn apply_select(
    query: &Query,
    source: &[Value],
    context: &QueryContext,
    fields: &Fields,
) -> QueryResult<Vec<Value>> {
    let mut source = source.to_vec();

    if let Some(where_clause) = query.where_modifier() {
        source = where_clause.apply(source, context)?;
    }
    if let Some(order_by) = query.order_by_modifier() {
        source = order_by.apply(source, context)?;
    }
    if let Some(offset) = query.offset_modifier() {
        source = offset.apply(source, context)?;
    }
    if let Some(limit) = query.limit_modifier() {
        source = limit.apply(source, context)?;
    }

    match fields {
        Fields::All => Ok(source),
        Fields::One(field) => {
            let accessor = PropertyAccessor::new();
            source
                .iter()
                .map(|item| accessor.get(item, field).map_err(Into::into))
                .collect()
        }
        Fields::Many(names) => {
            let accessor = PropertyAccessor::new();
            source
                .iter()
                .map(|item| {
                    let mut projected = Object::new();
                    for name in names {
                        projected.insert(name.clone(), accessor.get(item, name)?);
                    }
                    Ok(projected.into_value())
                })
                .collect()
        }
    }
}
