//! Variable environments for expression evaluation

use crate::Value;
use std::collections::HashMap;

/// A variable environment: names visible to an expression, mapped to their
/// values. Composed per item by the query engine from the item's own alias
/// binding, explicit extra variables, and ancestor bindings propagated
/// through flattening.
pub type Environment = HashMap<String, Value>;
