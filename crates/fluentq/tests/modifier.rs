//! Modifier behavior: where, order by, limit, offset

mod common;

use common::{as_list, cities, strings};
use fluentq::{Fields, Object, Query, QueryOrder, Value};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// === Where ===

#[test]
fn where_preserves_source_order() {
    let names = Query::from_source(cities())
        .unwrap()
        .select_many("persons", "person")
        .unwrap()
        .select_many("children", "child")
        .unwrap()
        .where_("child.age > 20")
        .select("name")
        .unwrap();

    assert_eq!(strings(&names), vec!["Hubert", "Alex", "Will", "Bob"]);
}

#[test]
fn where_filters_on_arbitrary_expressions() {
    let names = Query::from(cities(), "city")
        .unwrap()
        .where_(r#"city.minimalAge > 15 and city.name starts with "Ly""#)
        .select("name")
        .unwrap();

    assert_eq!(names, vec![Value::from("Lyon")]);
}

#[test]
fn where_rejecting_everything_yields_an_empty_result() {
    let result = Query::from_source(cities())
        .unwrap()
        .where_("false")
        .select(Fields::All)
        .unwrap();

    assert_eq!(result, Vec::<Value>::new());
}

// === OrderBy ===

#[test]
fn ascending_orders_by_field() {
    let names = Query::from_source(cities())
        .unwrap()
        .order_by(QueryOrder::Ascending, Some("name"))
        .select("name")
        .unwrap();

    assert_eq!(strings(&names), vec!["Lyon", "Paris"]);
}

#[test]
fn descending_orders_by_field() {
    let names = Query::from_source(cities())
        .unwrap()
        .order_by(QueryOrder::Descending, Some("name"))
        .select("name")
        .unwrap();

    assert_eq!(strings(&names), vec!["Paris", "Lyon"]);
}

#[test]
fn descending_reverses_equal_key_runs() {
    let items = as_list(Value::from_json(serde_json::json!([
        {"k": 1, "tag": "a"},
        {"k": 1, "tag": "b"},
        {"k": 0, "tag": "c"},
    ])));

    let tags = Query::from_source(items)
        .unwrap()
        .order_by(QueryOrder::Descending, Some("k"))
        .select("tag")
        .unwrap();

    // Ascending is stable (c, a, b); descending is its reversal
    assert_eq!(strings(&tags), vec!["b", "a", "c"]);
}

#[test]
fn order_none_is_identity() {
    let names = Query::from_source(cities())
        .unwrap()
        .order_by(QueryOrder::None, None)
        .select("name")
        .unwrap();

    assert_eq!(strings(&names), vec!["Lyon", "Paris"]);
}

#[test]
fn shuffle_is_a_permutation() {
    let names = Query::from_source(cities())
        .unwrap()
        .order_by(QueryOrder::Shuffle, None)
        .select("name")
        .unwrap();

    let mut names = strings(&names);
    names.sort_unstable();
    assert_eq!(names, vec!["Lyon", "Paris"]);
}

#[test]
fn shuffle_with_a_field_is_rejected() {
    let err = Query::from_source(cities())
        .unwrap()
        .order_by(QueryOrder::Shuffle, Some("name"))
        .select(Fields::All)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "The modifier \"orderBy\" is wrongly configured: An order field must not be provided \
         when shuffling a collection."
    );
}

#[rstest]
#[case(QueryOrder::Ascending)]
#[case(QueryOrder::Descending)]
fn ordering_without_a_field_is_rejected(#[case] order: QueryOrder) {
    let err = Query::from_source(cities())
        .unwrap()
        .order_by(order, None)
        .select(Fields::All)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "The modifier \"orderBy\" is wrongly configured: An order field must be provided."
    );
}

// === Limit ===

#[test]
fn limit_keeps_the_leading_items() {
    let names = Query::from_source(cities())
        .unwrap()
        .limit(Some(1))
        .select("name")
        .unwrap();

    assert_eq!(names, vec![Value::from("Lyon")]);
}

#[test]
fn limit_null_is_identity() {
    let query = Query::from_source(cities()).unwrap().limit(None);
    assert_eq!(query.count().unwrap(), 2);
}

#[test]
fn limit_larger_than_the_source_keeps_everything() {
    let query = Query::from_source(cities()).unwrap().limit(Some(10));
    assert_eq!(query.count().unwrap(), 2);
}

#[rstest]
#[case(0)]
#[case(-3)]
fn non_positive_limit_is_rejected(#[case] limit: i64) {
    let err = Query::from_source(cities())
        .unwrap()
        .limit(Some(limit))
        .select(Fields::All)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "The modifier \"limit\" is wrongly configured: The limit must be a positive integer \
         or null to set no limit."
    );
}

// === Offset ===

#[test]
fn offset_skips_the_leading_items() {
    let names = Query::from_source(cities())
        .unwrap()
        .offset(Some(1))
        .select("name")
        .unwrap();

    assert_eq!(names, vec![Value::from("Paris")]);
}

#[test]
fn offset_null_is_identity() {
    let query = Query::from_source(cities()).unwrap().offset(None);
    assert_eq!(query.count().unwrap(), 2);
}

#[test]
fn offset_past_the_end_yields_an_empty_result() {
    let result = Query::from_source(cities())
        .unwrap()
        .offset(Some(5))
        .select(Fields::All)
        .unwrap();

    assert_eq!(result, Vec::<Value>::new());
}

#[rstest]
#[case(0)]
#[case(-1)]
fn non_positive_offset_is_rejected(#[case] offset: i64) {
    let err = Query::from_source(cities())
        .unwrap()
        .offset(Some(offset))
        .select(Fields::All)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "The modifier \"offset\" is wrongly configured: The offset must be a positive integer \
         or null to set no offset."
    );
}

// === Pipeline order: filter, order, skip, take ===

#[test]
fn modifiers_compose_in_the_fixed_order() {
    let names = Query::from_source(cities())
        .unwrap()
        .select_many("persons", "person")
        .unwrap()
        .select_many("children", "child")
        .unwrap()
        .where_("child.age > 10")
        .order_by(QueryOrder::Ascending, Some("age"))
        .offset(Some(1))
        .limit(Some(2))
        .select("name")
        .unwrap();

    // Survivors by age: Salah 11, Will 22, Alex 26, Hubert 30, Bob 45
    assert_eq!(strings(&names), vec!["Will", "Alex"]);
}

// === Slice laws ===

fn indexed_items(len: usize) -> Vec<Value> {
    (0..len)
        .map(|i| Object::new().with_field("i", i as i64).into_value())
        .collect()
}

proptest! {
    #[test]
    fn limit_keeps_min_of_limit_and_length(len in 0usize..30, limit in 1i64..40) {
        let result = Query::from_source(indexed_items(len))
            .unwrap()
            .limit(Some(limit))
            .select(Fields::All)
            .unwrap();

        prop_assert_eq!(result.len(), len.min(limit as usize));
    }

    #[test]
    fn offset_drops_exactly_the_prefix(len in 0usize..30, offset in 1i64..40) {
        let items = indexed_items(len);
        let result = Query::from_source(items.clone())
            .unwrap()
            .offset(Some(offset))
            .select(Fields::All)
            .unwrap();

        let skip = (offset as usize).min(len);
        prop_assert_eq!(result, items[skip..].to_vec());
    }
}
