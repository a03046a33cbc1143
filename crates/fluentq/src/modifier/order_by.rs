//! The order-by modifier: field ordering and shuffling

use crate::context::QueryContext;
use crate::error::{QueryError, QueryResult};
use crate::modifier::Modifier;
use crate::query::QueryOrder;
use fluentq_eval::{PropertyAccessor, Value};
use rand::seq::SliceRandom;

/// Reorders a sequence by a field, or randomizes it
#[derive(Debug)]
pub(crate) struct OrderBy {
    order: QueryOrder,
    field: Option<String>,
    accessor: PropertyAccessor,
}

impl OrderBy {
    pub(crate) fn new(order: QueryOrder, field: Option<String>) -> Self {
        Self {
            order,
            field,
            accessor: PropertyAccessor::new(),
        }
    }
}

impl Modifier for OrderBy {
    fn apply(&self, mut source: Vec<Value>, _context: &QueryContext) -> QueryResult<Vec<Value>> {
        if self.field.is_some() && self.order == QueryOrder::Shuffle {
            return Err(QueryError::invalid_modifier(
                "orderBy",
                "An order field must not be provided when shuffling a collection",
            ));
        }

        if self.order == QueryOrder::Shuffle {
            source.shuffle(&mut rand::thread_rng());
            return Ok(source);
        }

        if self.order != QueryOrder::None {
            let Some(field) = &self.field else {
                return Err(QueryError::invalid_modifier(
                    "orderBy",
                    "An order field must be provided",
                ));
            };

            // Keys are read up front; the comparator itself cannot fail
            let mut keyed = Vec::with_capacity(source.len());
            for item in source {
                let key = self.accessor.get(&item, field)?;
                keyed.push((key, item));
            }
            keyed.sort_by(|a, b| a.0.compare(&b.0));

            // Descending reverses the ascending result, equal-key runs
            // included
            if self.order == QueryOrder::Descending {
                keyed.reverse();
            }

            return Ok(keyed.into_iter().map(|(_, item)| item).collect());
        }

        Ok(source)
    }
}
