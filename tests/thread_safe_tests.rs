//! Integration tests for sharing built maps across threads.
//!
//! A built ImmutableMap holds no comparator and is read-only, so it can be
//! published once and read from many threads.

use mapbuilder::{ImmutableMap, MapBuilder};
use rstest::rstest;
use std::sync::Arc;
use std::thread;

#[rstest]
fn test_built_map_shared_across_reader_threads() {
    let map: Arc<ImmutableMap<i32, String>> = Arc::new(
        MapBuilder::new()
            .put(3, "three".to_string())
            .put(1, "one".to_string())
            .put(2, "two".to_string())
            .sorted_order(|left: &i32, right: &i32| right.cmp(left))
            .build(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let map_clone = Arc::clone(&map);
            thread::spawn(move || {
                let keys: Vec<i32> = map_clone.keys().copied().collect();
                assert_eq!(keys, vec![3, 2, 1]);
                map_clone.get(&2).cloned()
            })
        })
        .collect();

    for handle in handles {
        let value = handle.join().expect("Thread panicked");
        assert_eq!(value.as_deref(), Some("two"));
    }
}

#[rstest]
fn test_built_map_moved_to_another_thread() {
    let map = MapBuilder::new()
        .put("b".to_string(), 2)
        .put("a".to_string(), 1)
        .natural_order()
        .build();

    let handle = thread::spawn(move || map.iter().map(|(key, _)| key.clone()).collect::<Vec<_>>());
    let keys = handle.join().expect("Thread panicked");
    assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
}

#[cfg(feature = "arc")]
#[rstest]
fn test_builder_moved_to_another_thread_with_arc() {
    let mut builder = MapBuilder::new();
    builder
        .put(1, "one")
        .put(2, "two")
        .sorted_order(|left: &i32, right: &i32| right.cmp(left));

    let handle = thread::spawn(move || builder.build());
    let map = handle.join().expect("Thread panicked");
    assert_eq!(map.first(), Some((&2, &"two")));
}
