//! Shared fixtures for the integration suites
#![allow(dead_code)]

use fluentq::Value;

pub const NUMBERS: [i64; 10] = [5, 4, 1, 3, 9, 8, 6, 7, 2, 0];

/// Two cities: Lyon with two persons and seven children between them,
/// Paris with nobody
pub fn cities() -> Vec<Value> {
    as_list(Value::from_json(serde_json::json!([
        {
            "name": "Lyon",
            "minimalAge": 21,
            "persons": [
                {
                    "height": 181,
                    "children": [
                        {"name": "Hubert", "age": 30},
                        {"name": "Alex", "age": 26},
                        {"name": "Will", "age": 22},
                    ],
                },
                {
                    "height": 176,
                    "children": [
                        {"name": "Fabien", "age": 10},
                        {"name": "Nicolas", "age": 8},
                        {"name": "Salah", "age": 11},
                        {"name": "Bob", "age": 45},
                    ],
                },
            ],
        },
        {"name": "Paris", "minimalAge": 10, "persons": []},
    ])))
}

/// A plain scalar collection, unusable as a query source
pub fn numbers() -> Vec<Value> {
    NUMBERS.iter().copied().map(Value::Int).collect()
}

/// Unwrap a JSON-built list fixture
pub fn as_list(value: Value) -> Vec<Value> {
    match value {
        Value::List(items) => items,
        other => panic!("fixture should be a list, got {}", other.kind()),
    }
}

/// Collect string values, panicking on anything else
pub fn strings(values: &[Value]) -> Vec<&str> {
    values
        .iter()
        .map(|value| value.as_str().expect("expected a string value"))
        .collect()
}
