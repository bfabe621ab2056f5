//! Unit tests for MapBuilder and the maps it builds.

use mapbuilder::{ImmutableMap, MapBuilder, OrderKind};
use rstest::rstest;
use std::cmp::Ordering;

fn entries(map: &ImmutableMap<&'static str, i32>) -> Vec<(&'static str, i32)> {
    map.iter().map(|(key, value)| (*key, *value)).collect()
}

fn reverse_order(left: &&str, right: &&str) -> Ordering {
    right.cmp(left)
}

// =============================================================================
// Put Tests
// =============================================================================

#[rstest]
fn test_put_adds_entry_to_map() {
    let map = MapBuilder::new().put("one", 1).build();

    assert_eq!(map.len(), 1);
    assert_eq!(map.get("one"), Some(&1));
}

#[rstest]
fn test_put_same_key_keeps_last_value_at_first_position() {
    let map = MapBuilder::new()
        .put("one", 1)
        .put("two", 2)
        .put("one", 100)
        .insertion_order()
        .build();

    assert_eq!(entries(&map), vec![("one", 100), ("two", 2)]);
}

#[rstest]
fn test_put_all_stages_pairs_in_order() {
    let map = MapBuilder::new()
        .put("zero", 0)
        .put_all([("one", 1), ("two", 2)])
        .insertion_order()
        .build();

    assert_eq!(entries(&map), vec![("zero", 0), ("one", 1), ("two", 2)]);
}

#[rstest]
fn test_option_keys_are_ordinary_keys() {
    let map = MapBuilder::new()
        .put(Some("a"), 1)
        .put(None, 0)
        .natural_order()
        .build();

    assert_eq!(map.get(&None::<&str>), Some(&0));
    assert_eq!(map.first(), Some((&None, &0)));
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[rstest]
fn test_insertion_order_sets_insertion_order() {
    let map = MapBuilder::new()
        .insertion_order()
        .put("three", 3)
        .put("one", 1)
        .put("two", 2)
        .put("four", 4)
        .build();

    assert_eq!(
        entries(&map),
        vec![("three", 3), ("one", 1), ("two", 2), ("four", 4)]
    );
    assert_eq!(map.order_kind(), OrderKind::Insertion);
}

#[rstest]
fn test_sorted_order_sets_sorted_order_with_comparator() {
    let map = MapBuilder::new()
        .sorted_order(reverse_order)
        .put("one", 1)
        .put("two", 2)
        .put("three", 3)
        .build();

    assert_eq!(entries(&map), vec![("two", 2), ("three", 3), ("one", 1)]);
    assert_eq!(map.order_kind(), OrderKind::Comparator);
}

#[rstest]
fn test_natural_order_sets_natural_order() {
    let map = MapBuilder::new()
        .natural_order()
        .put("one", 1)
        .put("two", 2)
        .put("three", 3)
        .build();

    assert_eq!(entries(&map), vec![("one", 1), ("three", 3), ("two", 2)]);
    assert_eq!(map.order_kind(), OrderKind::Natural);
}

#[rstest]
fn test_default_order_contains_exactly_put_entries() {
    let map = MapBuilder::new().put("one", 1).put("two", 2).build();

    let mut collected = entries(&map);
    collected.sort_unstable();
    assert_eq!(collected, vec![("one", 1), ("two", 2)]);
    assert_eq!(map.order_kind(), OrderKind::Unordered);
}

#[rstest]
#[case(OrderKind::Unordered)]
#[case(OrderKind::Natural)]
#[case(OrderKind::Comparator)]
#[case(OrderKind::Insertion)]
fn test_every_ordering_keeps_all_entries(#[case] kind: OrderKind) {
    let mut builder = MapBuilder::new();
    builder.put("b", 2).put("c", 3).put("a", 1);
    match kind {
        OrderKind::Unordered => builder.unordered(),
        OrderKind::Natural => builder.natural_order(),
        OrderKind::Comparator => builder.sorted_order(reverse_order),
        OrderKind::Insertion => builder.insertion_order(),
    };

    let map = builder.build();
    assert_eq!(map.order_kind(), kind);
    assert_eq!(map.len(), 3);
    assert_eq!(map["a"], 1);
    assert_eq!(map["b"], 2);
    assert_eq!(map["c"], 3);
}

#[rstest]
fn test_sorted_order_then_natural_order_uses_natural_order() {
    let map = MapBuilder::new()
        .put("one", 1)
        .put("two", 2)
        .put("three", 3)
        .sorted_order(reverse_order)
        .natural_order()
        .build();

    assert_eq!(entries(&map), vec![("one", 1), ("three", 3), ("two", 2)]);
}

#[rstest]
fn test_natural_order_then_sorted_order_uses_comparator() {
    let map = MapBuilder::new()
        .put("one", 1)
        .put("two", 2)
        .put("three", 3)
        .natural_order()
        .sorted_order(reverse_order)
        .build();

    assert_eq!(entries(&map), vec![("two", 2), ("three", 3), ("one", 1)]);
}

#[rstest]
fn test_comparator_equal_keys_collapse() {
    let map = MapBuilder::new()
        .put("Alpha".to_string(), 1)
        .put("beta".to_string(), 2)
        .put("ALPHA".to_string(), 3)
        .sorted_order(|left: &String, right: &String| {
            left.to_lowercase().cmp(&right.to_lowercase())
        })
        .build();

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("Alpha"), Some(&3));
    assert!(!map.contains_key("ALPHA"));
}

#[rstest]
fn test_comparator_by_length_then_reverse() {
    let map = MapBuilder::new()
        .put("ccc", 3)
        .put("a", 1)
        .put("bb", 2)
        .put("dd", 4)
        .sorted_order(|left: &&str, right: &&str| {
            left.len().cmp(&right.len()).then_with(|| right.cmp(left))
        })
        .build();

    assert_eq!(
        entries(&map),
        vec![("a", 1), ("dd", 4), ("bb", 2), ("ccc", 3)]
    );
}

// =============================================================================
// Build Tests
// =============================================================================

#[rstest]
fn test_build_on_empty_builder_returns_empty_map() {
    let builder: MapBuilder<String, i32> = MapBuilder::new();
    let map = builder.build();

    assert!(map.is_empty());
    assert_eq!(map.iter().next(), None);
}

#[rstest]
fn test_build_twice_yields_same_contents_and_order() {
    let mut builder = MapBuilder::new();
    builder.put("c", 3).put("a", 1).put("b", 2).natural_order();

    let first = builder.build();
    let second = builder.build();

    assert_eq!(first, second);
    assert!(first.iter().eq(second.iter()));
}

#[rstest]
fn test_build_does_not_reset_builder() {
    let mut builder = MapBuilder::new();
    builder.put("one", 1).insertion_order();
    let first = builder.build();

    builder.put("two", 2);
    let second = builder.build();

    assert_eq!(entries(&first), vec![("one", 1)]);
    assert_eq!(entries(&second), vec![("one", 1), ("two", 2)]);
    assert_eq!(builder.len(), 2);
    assert_eq!(builder.order_kind(), OrderKind::Insertion);
}

#[rstest]
fn test_built_map_is_independent_of_later_overwrites() {
    let mut builder = MapBuilder::new();
    builder.put("key", 1);
    let before = builder.build();

    builder.put("key", 2);
    let after = builder.build();

    assert_eq!(before.get("key"), Some(&1));
    assert_eq!(after.get("key"), Some(&2));
}

#[rstest]
fn test_into_map_consumes_builder() {
    let mut builder = MapBuilder::new();
    builder.put(String::from("b"), vec![2]).put(String::from("a"), vec![1]);
    builder.natural_order();

    let map = builder.into_map();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b"]);
}
