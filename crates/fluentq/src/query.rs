//! The query builder and orchestrator

use crate::context::QueryContext;
use crate::error::{QueryError, QueryResult};
use crate::modifier::{Limit, Offset, OrderBy, Where};
use crate::operation::{
    Average, Concat, Count, Each, Fields, Max, Min, Operation, Select, SelectMany, SelectOne, Sum,
};
use fluentq_eval::{Environment, FunctionRegistry, Value, WhereFunction};
use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Sort directions accepted by [`Query::order_by`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryOrder {
    /// Keep the source order
    #[default]
    None,
    /// Sort ascending by the order field
    Ascending,
    /// Sort descending by the order field
    Descending,
    /// Randomize the order
    Shuffle,
}

/// Alias used when none is given to [`Query::from_source`]
pub const DEFAULT_ALIAS: &str = "_";

/// Process-wide functions available to every where expression; append-only,
/// duplicate-rejecting. Each `Where` snapshots it at construction.
static REGISTERED_WHERE_FUNCTIONS: Lazy<RwLock<FunctionRegistry>> =
    Lazy::new(|| RwLock::new(FunctionRegistry::new()));

/// A fluent query over an in-memory collection of objects
///
/// A query is built by chaining configuration calls and consumed by a
/// terminal operation. Each terminal call materializes the result by
/// running where → order by → offset → limit, then the operation's own
/// projection or reduction.
///
/// [`select_many`](Self::select_many) flattens a collection field into a
/// nested query; from then on every builder and terminal call acts on the
/// deepest nesting level, and ancestor aliases stay visible to where
/// expressions across the flattening boundary.
///
/// # Example
///
/// ```
/// use fluentq::{Query, Value};
///
/// let cities = match Value::from_json(serde_json::json!([
///     {"name": "Lyon", "minimalAge": 21, "persons": [
///         {"height": 181, "children": [
///             {"name": "Hubert", "age": 30},
///             {"name": "Alex", "age": 26},
///         ]},
///     ]},
///     {"name": "Paris", "minimalAge": 10, "persons": []},
/// ])) {
///     Value::List(cities) => cities,
///     _ => unreachable!(),
/// };
///
/// let names = Query::from(cities, "city")?
///     .where_(r#"city.name contains "Lyon""#)
///     .select_many("persons", "person")?
///     .where_("person.height > 180")
///     .select_many("children", "child")?
///     .where_("child.age > city.minimalAge")
///     .select("name")?;
///
/// assert_eq!(names, vec![Value::from("Hubert"), Value::from("Alex")]);
/// # Ok::<(), fluentq::QueryError>(())
/// ```
#[derive(Debug)]
pub struct Query {
    source: Vec<Value>,
    source_alias: String,

    where_clause: Option<Where>,
    order_by: Option<OrderBy>,
    limit: Option<Limit>,
    offset: Option<Offset>,

    context: QueryContext,

    sub_query: Option<Box<Query>>,
}

impl Query {
    /// Create a query over `source`, binding its items to `alias`
    ///
    /// Fails with [`QueryError::AliasAlreadyTaken`] when the alias is
    /// already bound in the context lineage, and with
    /// [`QueryError::IncompatibleCollection`] when any element of the
    /// source is not an object.
    pub fn from(source: Vec<Value>, alias: impl Into<String>) -> QueryResult<Self> {
        Self::from_with_context(source, alias, QueryContext::new())
    }

    /// Create a query over `source` with the default `_` alias
    pub fn from_source(source: Vec<Value>) -> QueryResult<Self> {
        Self::from(source, DEFAULT_ALIAS)
    }

    pub(crate) fn from_with_context(
        source: Vec<Value>,
        alias: impl Into<String>,
        context: QueryContext,
    ) -> QueryResult<Self> {
        let alias = alias.into();

        if context.is_used_alias(&alias) {
            return Err(QueryError::AliasAlreadyTaken(alias));
        }

        let object_count = source.iter().filter(|item| item.is_object()).count();
        if object_count != source.len() {
            return Err(QueryError::incompatible_collection(
                "from",
                "Mixed and scalar collections are not supported. Collection must only contain objects to be used by Query",
            ));
        }

        let context = context.with_used_alias(&alias);

        Ok(Self {
            source,
            source_alias: alias,
            where_clause: None,
            order_by: None,
            limit: None,
            offset: None,
            context,
            sub_query: None,
        })
    }

    /// Filter items with a where expression
    ///
    /// The expression sees the current alias bound to each item, plus any
    /// ancestor aliases propagated by `select_many`. Validation is lazy:
    /// a malformed expression surfaces when a terminal operation runs.
    pub fn where_(self, expression: impl Into<String>) -> Self {
        self.where_with(expression, Environment::new())
    }

    /// Filter with a where expression and extra named variables
    ///
    /// The alias binding wins over `environment`, which wins over
    /// ancestor bindings.
    pub fn where_with(mut self, expression: impl Into<String>, environment: Environment) -> Self {
        let target = self.deepest_mut();
        target.where_clause = Some(Where::new(
            target.source_alias.clone(),
            expression.into(),
            environment,
            where_functions_snapshot(),
        ));
        self
    }

    /// Order items by a field, or shuffle them
    ///
    /// `Shuffle` must not be combined with a field; `Ascending` and
    /// `Descending` require one. Both misuses surface when a terminal
    /// operation runs.
    pub fn order_by(mut self, order: QueryOrder, field: Option<&str>) -> Self {
        let target = self.deepest_mut();
        target.order_by = Some(OrderBy::new(order, field.map(str::to_string)));
        self
    }

    /// Keep at most the first `limit` items; `None` removes no items
    pub fn limit(mut self, limit: Option<i64>) -> Self {
        let target = self.deepest_mut();
        target.limit = Some(Limit::new(limit));
        self
    }

    /// Skip the first `offset` items; `None` skips nothing
    ///
    /// Zero is rejected at apply time: pass `None` for no offset.
    pub fn offset(mut self, offset: Option<i64>) -> Self {
        let target = self.deepest_mut();
        target.offset = Some(Offset::new(offset));
        self
    }

    /// Flatten a collection field into a nested query
    ///
    /// The current pipeline runs immediately; each surviving item's
    /// `field` value must be a list of objects, which are concatenated in
    /// order into the nested query's source. Ancestor alias bindings are
    /// recorded so deeper where expressions can still reference them.
    pub fn select_many(
        mut self,
        field: impl Into<String>,
        alias: impl Into<String>,
    ) -> QueryResult<Self> {
        let target = self.deepest_mut();

        let sub_query = SelectMany::new(&*target, field.into(), alias.into())
            .apply(&target.source, &target.context)?;
        target.sub_query = Some(Box::new(sub_query));

        Ok(self)
    }

    /// Materialize the surviving items, optionally projected
    ///
    /// Pass [`Fields::All`] (or build one with `From`) for whole items, a
    /// field name for scalars, or a list of names for per-item mappings.
    pub fn select(&self, fields: impl Into<Fields>) -> QueryResult<Vec<Value>> {
        let target = self.deepest();
        Select::new(target, fields.into()).apply(&target.source, &target.context)
    }

    /// Like [`select`](Self::select), but requires at most one survivor
    ///
    /// Returns `None` when nothing survives and fails with
    /// [`QueryError::NonUniqueResult`] when more than one item does.
    pub fn select_one(&self, fields: impl Into<Fields>) -> QueryResult<Option<Value>> {
        let target = self.deepest();
        SelectOne::new(target, fields.into()).apply(&target.source, &target.context)
    }

    /// Count the surviving items
    pub fn count(&self) -> QueryResult<usize> {
        let target = self.deepest();
        Count::new(target).apply(&target.source, &target.context)
    }

    /// Join the projected values into one string
    pub fn concat(&self, separator: impl Into<String>, field: Option<&str>) -> QueryResult<String> {
        let target = self.deepest();
        Concat::new(target, field.into(), separator.into()).apply(&target.source, &target.context)
    }

    /// Apply a callback to every surviving item, collecting the results
    pub fn each<F>(&self, callback: F) -> QueryResult<Vec<Value>>
    where
        F: FnMut(&Value) -> Value,
    {
        let target = self.deepest();
        Each::new(target, callback).apply(&target.source, &target.context)
    }

    /// Maximum of the projected values, `None` when nothing survives
    pub fn max(&self, field: Option<&str>) -> QueryResult<Option<Value>> {
        let target = self.deepest();
        Max::new(target, field.into()).apply(&target.source, &target.context)
    }

    /// Minimum of the projected values, `None` when nothing survives
    pub fn min(&self, field: Option<&str>) -> QueryResult<Option<Value>> {
        let target = self.deepest();
        Min::new(target, field.into()).apply(&target.source, &target.context)
    }

    /// Average of the projected values as a float
    ///
    /// Fails with [`QueryError::IncompatibleCollection`] on non-numeric
    /// values and on an empty surviving sequence.
    pub fn average(&self, field: Option<&str>) -> QueryResult<f64> {
        let target = self.deepest();
        Average::new(target, field.into()).apply(&target.source, &target.context)
    }

    /// Sum of the projected values
    ///
    /// Stays [`Value::Int`] while every addend is an integer and the sum
    /// fits; promotes to [`Value::Float`] otherwise.
    pub fn sum(&self, field: Option<&str>) -> QueryResult<Value> {
        let target = self.deepest();
        Sum::new(target, field.into()).apply(&target.source, &target.context)
    }

    /// The alias binding this level's items in where expressions
    pub fn source_alias(&self) -> &str {
        &self.source_alias
    }

    /// The context threaded through this query chain
    pub fn context(&self) -> &QueryContext {
        &self.context
    }

    pub(crate) fn where_modifier(&self) -> Option<&Where> {
        self.where_clause.as_ref()
    }

    pub(crate) fn order_by_modifier(&self) -> Option<&OrderBy> {
        self.order_by.as_ref()
    }

    pub(crate) fn limit_modifier(&self) -> Option<&Limit> {
        self.limit.as_ref()
    }

    pub(crate) fn offset_modifier(&self) -> Option<&Offset> {
        self.offset.as_ref()
    }

    /// Register a function usable in every where expression built from
    /// now on
    ///
    /// Names are unique for the lifetime of the process; registering a
    /// taken name fails with
    /// [`QueryError::AlreadyRegisteredWhereFunction`]. Already-configured
    /// where clauses keep the snapshot they were built with.
    pub fn register_where_function(function: WhereFunction) -> QueryResult<()> {
        let mut registry = REGISTERED_WHERE_FUNCTIONS.write();

        if registry.contains(function.name()) {
            return Err(QueryError::AlreadyRegisteredWhereFunction(
                function.name().to_string(),
            ));
        }

        registry.register(function);
        Ok(())
    }

    /// Snapshot of the functions registered so far
    pub fn registered_where_functions() -> Vec<WhereFunction> {
        REGISTERED_WHERE_FUNCTIONS
            .read()
            .functions()
            .cloned()
            .collect()
    }

    /// The deepest active frame: the nested query all calls act on
    fn deepest(&self) -> &Query {
        match &self.sub_query {
            Some(sub_query) => sub_query.deepest(),
            None => self,
        }
    }

    fn deepest_mut(&mut self) -> &mut Query {
        match self.sub_query {
            Some(ref mut sub_query) => sub_query.deepest_mut(),
            None => self,
        }
    }
}

fn where_functions_snapshot() -> FunctionRegistry {
    REGISTERED_WHERE_FUNCTIONS.read().clone()
}
