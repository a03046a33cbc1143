//! The select-many operation: flatten a collection field into a nested query

use crate::context::QueryContext;
use crate::error::{QueryError, QueryResult};
use crate::operation::{Fields, Operation, apply_select};
use crate::query::Query;
use fluentq_eval::{Environment, PropertyAccessor, Value};

/// Flattens each surviving item's collection field into a new query
///
/// The flattened elements keep the parent visible: each element's context
/// entry binds the parent alias to the parent item and carries forward
/// everything already recorded for the parent, so a grandchild still sees
/// grandparent bindings.
pub(crate) struct SelectMany<'q> {
    query: &'q Query,
    field: String,
    alias: String,
    accessor: PropertyAccessor,
}

impl<'q> SelectMany<'q> {
    pub(crate) fn new(query: &'q Query, field: String, alias: String) -> Self {
        Self {
            query,
            field,
            alias,
            accessor: PropertyAccessor::new(),
        }
    }
}

impl Operation for SelectMany<'_> {
    type Output = Query;

    fn apply(self, source: &[Value], context: &QueryContext) -> QueryResult<Self::Output> {
        let source = apply_select(self.query, source, context, &Fields::All)?;

        let mut flattened = Vec::new();
        let mut context = self.query.context().clone();
        for item in &source {
            let subfields = self.accessor.get(item, &self.field)?;

            let children = subfields.as_list().filter(|children| {
                children.iter().filter(|child| child.is_object()).count() == children.len()
            });
            let Some(children) = children else {
                return Err(QueryError::incompatible_field(
                    "selectMany",
                    "You can only selectMany on fields that are collections of objects",
                ));
            };

            for child in children {
                flattened.push(child.clone());

                let binding =
                    Environment::from([(self.query.source_alias().to_string(), item.clone())]);
                context = context.with_environment(child, binding);

                // Transmit the parent's own bindings to the descendant
                context = context.with_environment(child, context.environment(item));
            }
        }

        Query::from_with_context(flattened, self.alias, context)
    }
}
