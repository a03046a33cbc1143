//! Runtime values and where-expression evaluation for fluentq
//!
//! This crate provides the pieces the query engine evaluates with:
//!
//! - [`Value`]: the tagged runtime value (null, boolean, integer, float,
//!   string, list, object); objects carry reference identity through
//!   [`ObjectId`], so structurally equal but distinct instances stay
//!   distinguishable
//! - [`Evaluator`]: evaluates parsed expressions against an
//!   [`Environment`] of named values
//! - [`FunctionRegistry`] / [`WhereFunction`]: named custom functions
//!   callable from expressions
//! - [`PropertyAccessor`]: dotted-path property resolution
//!   (`address.city`, `children[0].name`)
//!
//! # Example
//!
//! ```
//! use fluentq_eval::{Environment, Evaluator, Object, Value};
//! use fluentq_parser::parse_expression;
//!
//! let person = Object::new().with_field("height", 181).into_value();
//! let env = Environment::from([("person".to_string(), person)]);
//!
//! let expr = parse_expression("person.height > 180")?;
//! let result = Evaluator::new().evaluate(&expr, &env)?;
//! assert_eq!(result, Value::Bool(true));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod accessor;
mod environment;
mod error;
mod evaluator;
mod operators;
mod registry;
mod value;

pub use accessor::PropertyAccessor;
pub use environment::Environment;
pub use error::{EvalError, EvalResult};
pub use evaluator::Evaluator;
pub use registry::{FunctionFn, FunctionRegistry, WhereFunction};
pub use value::{Object, ObjectId, ObjectRef, Value};
