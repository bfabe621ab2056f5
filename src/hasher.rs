//! Hasher selection for staging and built maps.
//!
//! The hasher used by [`MapBuilder`](crate::MapBuilder) and
//! [`ImmutableMap`](crate::ImmutableMap) is chosen at compile time through
//! feature flags:
//!
//! | Feature   | Hasher                                   |
//! |-----------|------------------------------------------|
//! | (none)    | `std::collections::hash_map::RandomState` |
//! | `fxhash`  | `rustc_hash::FxBuildHasher`              |
//! | `ahash`   | `ahash::RandomState`                     |
//!
//! When both `fxhash` and `ahash` are enabled, `fxhash` takes precedence.
//!
//! The hasher also determines the iteration order of maps built in
//! [`OrderKind::Unordered`](crate::OrderKind::Unordered) mode.

/// The [`BuildHasher`](std::hash::BuildHasher) used by every map in this crate.
#[cfg(feature = "fxhash")]
pub type DefaultBuildHasher = rustc_hash::FxBuildHasher;

/// The [`BuildHasher`](std::hash::BuildHasher) used by every map in this crate.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultBuildHasher = ahash::RandomState;

/// The [`BuildHasher`](std::hash::BuildHasher) used by every map in this crate.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultBuildHasher = std::collections::hash_map::RandomState;

/// Insertion-ordered hash map used for staging and for built maps.
pub(crate) type OrderedHashMap<K, V> = indexmap::IndexMap<K, V, DefaultBuildHasher>;

/// Creates an empty [`OrderedHashMap`] with room for `capacity` entries.
pub(crate) fn ordered_hash_map<K, V>(capacity: usize) -> OrderedHashMap<K, V> {
    indexmap::IndexMap::with_capacity_and_hasher(capacity, DefaultBuildHasher::default())
}
