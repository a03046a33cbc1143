//! Fluent in-memory query engine over collections of objects
//!
//! fluentq runs chainable queries against already-materialized
//! collections: expression-based filtering, field ordering and shuffling,
//! pagination, projection, aggregation, and nested sub-queries whose
//! alias bindings stay visible across flattening boundaries.
//!
//! - [`Query`]: the builder and orchestrator
//! - [`QueryContext`]: immutable per-chain context (alias bookkeeping and
//!   ancestor bindings, keyed by object identity)
//! - [`Value`] / [`Object`]: the runtime data model
//! - [`Fields`]: projection selector for `select`/`select_one`
//!
//! # Example
//!
//! ```
//! use fluentq::{Query, QueryOrder, Value};
//!
//! let cities = match Value::from_json(serde_json::json!([
//!     {"name": "Lyon", "minimalAge": 21},
//!     {"name": "Paris", "minimalAge": 10},
//! ])) {
//!     Value::List(cities) => cities,
//!     _ => unreachable!(),
//! };
//!
//! let query = Query::from(cities, "city")?
//!     .where_("city.minimalAge > 15")
//!     .order_by(QueryOrder::Ascending, Some("name"));
//!
//! assert_eq!(query.select_one("name")?, Some(Value::from("Lyon")));
//! # Ok::<(), fluentq::QueryError>(())
//! ```
//!
//! Custom functions can be registered process-wide with
//! [`Query::register_where_function`] and used in any where expression
//! configured afterwards.

mod context;
mod error;
mod modifier;
mod operation;
mod query;

pub use context::QueryContext;
pub use error::{QueryError, QueryResult};
pub use operation::Fields;
pub use query::{DEFAULT_ALIAS, Query, QueryOrder};

// Re-export the collaborating crates
pub use fluentq_ast as ast;
pub use fluentq_eval as eval;
pub use fluentq_parser as parser;

// Convenience re-exports
pub use fluentq_eval::{
    Environment, EvalError, Evaluator, FunctionRegistry, Object, ObjectId, ObjectRef,
    PropertyAccessor, Value, WhereFunction,
};
pub use fluentq_parser::{ParseError, parse_expression};
