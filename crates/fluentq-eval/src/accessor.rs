//! Dotted-path property access on runtime values

use crate::error::{EvalError, EvalResult};
use crate::value::Value;

/// Reads named, possibly nested properties off values
///
/// Paths are dot-separated segments, each a field name optionally followed
/// by list indices: `name`, `address.city`, `children[0].name`, `scores[2]`.
/// Missing fields, out-of-range indices, and traversal through non-container
/// values are errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyAccessor;

impl PropertyAccessor {
    /// Create a new accessor
    pub fn new() -> Self {
        Self
    }

    /// Resolve `path` against `value`
    pub fn get(&self, value: &Value, path: &str) -> EvalResult<Value> {
        if path.is_empty() {
            return Err(EvalError::InvalidPath {
                path: path.to_string(),
            });
        }

        let mut current = value.clone();
        for segment in path.split('.') {
            let (name, indices) = split_segment(segment, path)?;
            if !name.is_empty() {
                current = get_field(&current, name)?;
            }
            for index in indices {
                current = get_index(&current, index)?;
            }
        }

        Ok(current)
    }
}

/// Split one path segment into its field name and trailing indices
fn split_segment<'a>(segment: &'a str, path: &str) -> EvalResult<(&'a str, Vec<i64>)> {
    let malformed = || EvalError::InvalidPath {
        path: path.to_string(),
    };

    let Some(bracket) = segment.find('[') else {
        if segment.is_empty() {
            return Err(malformed());
        }
        return Ok((segment, Vec::new()));
    };

    let name = &segment[..bracket];
    let mut indices = Vec::new();
    let mut rest = &segment[bracket..];
    while !rest.is_empty() {
        let inner = rest
            .strip_prefix('[')
            .and_then(|r| r.split_once(']'))
            .ok_or_else(malformed)?;
        let index = inner.0.parse::<i64>().map_err(|_| malformed())?;
        indices.push(index);
        rest = inner.1;
    }

    Ok((name, indices))
}

/// Read a field off an object value
pub(crate) fn get_field(value: &Value, name: &str) -> EvalResult<Value> {
    match value {
        Value::Object(object) => object
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::unknown_property(name)),
        other => Err(EvalError::type_mismatch("object", other.kind())),
    }
}

/// Read an element off a list value
pub(crate) fn get_index(value: &Value, index: i64) -> EvalResult<Value> {
    match value {
        Value::List(items) => {
            let slot = usize::try_from(index).ok().and_then(|i| items.get(i));
            slot.cloned().ok_or(EvalError::IndexOutOfBounds {
                index,
                length: items.len(),
            })
        }
        other => Err(EvalError::type_mismatch("list", other.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Object;
    use pretty_assertions::assert_eq;

    fn person() -> Value {
        Object::new()
            .with_field("height", 181)
            .with_field(
                "address",
                Object::new().with_field("city", "Lyon").into_value(),
            )
            .with_field(
                "children",
                Value::List(vec![
                    Object::new().with_field("name", "Hubert").into_value(),
                    Object::new().with_field("name", "Alex").into_value(),
                ]),
            )
            .into_value()
    }

    #[test]
    fn resolves_simple_and_nested_paths() {
        let accessor = PropertyAccessor::new();
        assert_eq!(accessor.get(&person(), "height").unwrap(), Value::Int(181));
        assert_eq!(
            accessor.get(&person(), "address.city").unwrap(),
            Value::from("Lyon")
        );
    }

    #[test]
    fn resolves_indexed_paths() {
        let accessor = PropertyAccessor::new();
        assert_eq!(
            accessor.get(&person(), "children[1].name").unwrap(),
            Value::from("Alex")
        );
    }

    #[test]
    fn missing_property_is_an_error() {
        let accessor = PropertyAccessor::new();
        assert_eq!(
            accessor.get(&person(), "weight"),
            Err(EvalError::unknown_property("weight"))
        );
    }

    #[test]
    fn out_of_bounds_index_is_an_error() {
        let accessor = PropertyAccessor::new();
        assert_eq!(
            accessor.get(&person(), "children[5]"),
            Err(EvalError::IndexOutOfBounds {
                index: 5,
                length: 2
            })
        );
    }

    #[test]
    fn traversal_through_scalar_is_an_error() {
        let accessor = PropertyAccessor::new();
        assert!(matches!(
            accessor.get(&person(), "height.meters"),
            Err(EvalError::TypeMismatch { .. })
        ));
    }
}
