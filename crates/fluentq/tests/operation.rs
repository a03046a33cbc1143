//! Operation behavior: select, select_one, select_many, count, sum,
//! average, max, min, concat, each

mod common;

use common::{as_list, cities, strings};
use fluentq::{Fields, Object, Query, QueryError, Value};
use pretty_assertions::assert_eq;

// === Select ===

#[test]
fn select_whole_items() {
    let result = Query::from_source(cities())
        .unwrap()
        .select(Fields::All)
        .unwrap();

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(Value::is_object));
}

#[test]
fn select_a_single_field_projects_to_scalars() {
    let names = Query::from_source(cities())
        .unwrap()
        .select("name")
        .unwrap();

    assert_eq!(strings(&names), vec!["Lyon", "Paris"]);
}

#[test]
fn select_a_field_list_projects_to_mappings() {
    let result = Query::from_source(cities())
        .unwrap()
        .select(["name", "minimalAge"])
        .unwrap();

    let first = result[0].as_object().expect("projection should be an object");
    assert_eq!(first.get("name"), Some(&Value::from("Lyon")));
    assert_eq!(first.get("minimalAge"), Some(&Value::Int(21)));
    assert_eq!(first.len(), 2);
}

#[test]
fn select_resolves_nested_paths() {
    let heights = Query::from(cities(), "city")
        .unwrap()
        .where_(r#"city.name == "Lyon""#)
        .select("persons[0].height")
        .unwrap();

    assert_eq!(heights, vec![Value::Int(181)]);
}

#[test]
fn select_a_missing_field_is_an_accessor_error() {
    let result = Query::from_source(cities()).unwrap().select("population");
    assert!(matches!(result, Err(QueryError::Eval(_))));
}

// === SelectOne ===

#[test]
fn select_one_returns_none_when_nothing_survives() {
    let result = Query::from(cities(), "city")
        .unwrap()
        .where_(r#"city.name == "Marseille""#)
        .select_one("name")
        .unwrap();

    assert_eq!(result, None);
}

#[test]
fn select_one_rejects_multiple_survivors() {
    let err = Query::from_source(cities())
        .unwrap()
        .select_one("name")
        .unwrap_err();

    assert_eq!(err, QueryError::NonUniqueResult(2));
    assert_eq!(
        err.to_string(),
        "The query returned 2 result(s). You may use \"select\" instead of \"selectOne\"."
    );
}

// === SelectMany ===

#[test]
fn select_many_flattens_in_order() {
    let names = Query::from_source(cities())
        .unwrap()
        .select_many("persons", "person")
        .unwrap()
        .select_many("children", "child")
        .unwrap()
        .select("name")
        .unwrap();

    assert_eq!(
        strings(&names),
        vec!["Hubert", "Alex", "Will", "Fabien", "Nicolas", "Salah", "Bob"]
    );
}

#[test]
fn select_many_on_a_scalar_field_is_rejected() {
    let err = Query::from_source(cities())
        .unwrap()
        .select_many("name", "n")
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "The given field is incompatible with \"selectMany\" because of the following reason: \
         You can only selectMany on fields that are collections of objects."
    );
}

#[test]
fn select_many_on_a_scalar_list_field_is_rejected() {
    let items = as_list(Value::from_json(serde_json::json!([
        {"tags": ["a", "b"]},
    ])));

    let err = Query::from_source(items)
        .unwrap()
        .select_many("tags", "tag")
        .unwrap_err();

    assert!(matches!(err, QueryError::IncompatibleField { .. }));
}

// === Count ===

#[test]
fn count_survivors() {
    assert_eq!(Query::from_source(cities()).unwrap().count().unwrap(), 2);

    let filtered = Query::from(cities(), "city")
        .unwrap()
        .where_("city.minimalAge > 15");
    assert_eq!(filtered.count().unwrap(), 1);
}

#[test]
fn count_of_nothing_is_zero() {
    let query = Query::from_source(cities()).unwrap().where_("false");
    assert_eq!(query.count().unwrap(), 0);
}

// === Sum ===

fn all_children() -> Query {
    Query::from_source(cities())
        .unwrap()
        .select_many("persons", "person")
        .unwrap()
        .select_many("children", "child")
        .unwrap()
}

#[test]
fn sum_of_integer_field_stays_integral() {
    assert_eq!(all_children().sum(Some("age")).unwrap(), Value::Int(152));
}

#[test]
fn sum_promotes_on_float_values() {
    let items = as_list(Value::from_json(serde_json::json!([
        {"price": 1},
        {"price": 2.5},
    ])));

    let total = Query::from_source(items).unwrap().sum(Some("price")).unwrap();
    assert_eq!(total, Value::Float(3.5));
}

#[test]
fn sum_of_an_empty_sequence_is_integer_zero() {
    let query = Query::from_source(cities()).unwrap().where_("false");
    assert_eq!(query.sum(Some("minimalAge")).unwrap(), Value::Int(0));
}

#[test]
fn sum_rejects_non_numeric_values() {
    let err = Query::from_source(cities())
        .unwrap()
        .sum(Some("name"))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "The given collection is incompatible with \"sum\" because of the following reason: \
         Operation can only be applied to a collection of numerics."
    );
}

// === Average ===

#[test]
fn average_is_a_float() {
    let heights = Query::from_source(cities())
        .unwrap()
        .select_many("persons", "person")
        .unwrap();

    assert_eq!(heights.average(Some("height")).unwrap(), 178.5);
}

#[test]
fn average_rejects_an_empty_sequence() {
    let err = Query::from_source(cities())
        .unwrap()
        .where_("false")
        .average(Some("minimalAge"))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "The given collection is incompatible with \"average\" because of the following reason: \
         Operation cannot be applied on an empty collection."
    );
}

#[test]
fn average_rejects_non_numeric_values() {
    let err = Query::from_source(cities())
        .unwrap()
        .average(Some("name"))
        .unwrap_err();

    assert!(matches!(err, QueryError::IncompatibleCollection { .. }));
}

// === Max / Min ===

#[test]
fn max_and_min_by_natural_ordering() {
    assert_eq!(all_children().max(Some("age")).unwrap(), Some(Value::Int(45)));
    assert_eq!(all_children().min(Some("age")).unwrap(), Some(Value::Int(8)));
}

#[test]
fn max_and_min_over_strings() {
    let query = Query::from_source(cities()).unwrap();
    assert_eq!(query.max(Some("name")).unwrap(), Some(Value::from("Paris")));
    assert_eq!(query.min(Some("name")).unwrap(), Some(Value::from("Lyon")));
}

#[test]
fn max_and_min_of_nothing_are_none() {
    let query = Query::from_source(cities()).unwrap().where_("false");
    assert_eq!(query.max(Some("minimalAge")).unwrap(), None);
    assert_eq!(query.min(Some("minimalAge")).unwrap(), None);
}

// === Concat ===

#[test]
fn concat_joins_with_the_separator() {
    let query = Query::from_source(cities()).unwrap();
    assert_eq!(query.concat(", ", Some("name")).unwrap(), "Lyon, Paris");
    assert_eq!(query.concat(" ", Some("name")).unwrap(), "Lyon Paris");
}

#[test]
fn concat_renders_numbers() {
    let query = Query::from_source(cities()).unwrap();
    assert_eq!(query.concat("-", Some("minimalAge")).unwrap(), "21-10");
}

#[test]
fn concat_of_nothing_is_empty() {
    let query = Query::from_source(cities()).unwrap().where_("false");
    assert_eq!(query.concat(", ", Some("name")).unwrap(), "");
}

// === Each ===

#[test]
fn each_maps_whole_items_in_order() {
    let doubled = Query::from_source(cities())
        .unwrap()
        .each(|city| {
            let age = city
                .as_object()
                .and_then(|object| object.get("minimalAge"))
                .and_then(Value::as_int)
                .unwrap_or(0);
            Value::Int(age * 2)
        })
        .unwrap();

    assert_eq!(doubled, vec![Value::Int(42), Value::Int(20)]);
}

#[test]
fn each_runs_after_the_pipeline() {
    let result = Query::from(cities(), "city")
        .unwrap()
        .where_("city.minimalAge > 15")
        .each(|city| {
            let name = city
                .as_object()
                .and_then(|object| object.get("name"))
                .and_then(Value::as_str)
                .unwrap_or("");
            Object::new()
                .with_field("shout", name.to_uppercase())
                .into_value()
        })
        .unwrap();

    assert_eq!(result.len(), 1);
    let shout = result[0].as_object().and_then(|object| object.get("shout"));
    assert_eq!(shout, Some(&Value::from("LYON")));
}
