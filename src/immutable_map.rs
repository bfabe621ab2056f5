//! Read-only maps produced by [`MapBuilder`](crate::MapBuilder).
//!
//! This module provides [`ImmutableMap`], an associative container whose
//! iteration order is fixed when it is built.
//!
//! # Overview
//!
//! An `ImmutableMap` exposes lookups, positional access and iteration, but no
//! operation that adds, replaces, or removes an entry. Attempting to mutate one
//! is a compile-time error:
//!
//! ```compile_fail
//! use mapbuilder::MapBuilder;
//!
//! let mut map = MapBuilder::new().put("one", 1).insertion_order().build();
//! map.insert("two", 2);
//! ```
//!
//! ```compile_fail
//! use mapbuilder::MapBuilder;
//!
//! let mut map = MapBuilder::new().put("one", 1).natural_order().build();
//! map.remove("one");
//! ```
//!
//! ```compile_fail
//! use mapbuilder::MapBuilder;
//!
//! let mut map = MapBuilder::new()
//!     .put("one", 1)
//!     .sorted_order(|left: &&str, right: &&str| right.cmp(left))
//!     .build();
//! map["one"] = 100;
//! ```
//!
//! ```compile_fail
//! use mapbuilder::MapBuilder;
//!
//! let mut map = MapBuilder::new().put("one", 1).build();
//! map.extend([("two", 2)]);
//! ```
//!
//! - O(1) `get`, `contains_key`, `get_index_of` (hashed lookup)
//! - O(1) `get_index`, `first`, `last`
//! - O(1) `len` and `is_empty`
//!
//! # Examples
//!
//! ```rust
//! use mapbuilder::{MapBuilder, OrderKind};
//!
//! let map = MapBuilder::new()
//!     .put("three", 3)
//!     .put("one", 1)
//!     .put("two", 2)
//!     .natural_order()
//!     .build();
//!
//! assert_eq!(map.order_kind(), OrderKind::Natural);
//! assert_eq!(map.get("two"), Some(&2));
//!
//! let keys: Vec<&&str> = map.keys().collect();
//! assert_eq!(keys, vec![&"one", &"three", &"two"]);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::iter::{FromIterator, FusedIterator};
use std::ops::Index;

use crate::builder::MapBuilder;
use crate::hasher::{OrderedHashMap, ordered_hash_map};
use crate::order::OrderKind;

// =============================================================================
// ImmutableMap Definition
// =============================================================================

/// An immutable map with a fixed iteration order.
///
/// Instances are normally produced by [`MapBuilder::build`] or
/// [`MapBuilder::into_map`]; the [`OrderKind`] of the builder at that moment
/// decides the order in which [`iter`](Self::iter) visits the entries.
///
/// Equality is map equality: two maps are equal when they hold the same
/// key-value pairs, whatever their order. Compare iterators to check order.
///
/// An `ImmutableMap` is `Send` and `Sync` whenever its keys and values are, so
/// a built map can be shared with any number of reader threads.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `get`          | O(1)       |
/// | `contains_key` | O(1)       |
/// | `get_index`    | O(1)       |
/// | `get_index_of` | O(1)       |
/// | `len`          | O(1)       |
/// | `iter`         | O(1) + O(n)|
///
/// # Examples
///
/// ```rust
/// use mapbuilder::MapBuilder;
///
/// let map = MapBuilder::new()
///     .put("b", 2)
///     .put("a", 1)
///     .insertion_order()
///     .build();
///
/// assert_eq!(map.get_index(0), Some((&"b", &2)));
/// assert_eq!(map["a"], 1);
/// ```
#[derive(Clone)]
pub struct ImmutableMap<K, V> {
    /// Entries in iteration order
    entries: OrderedHashMap<K, V>,
    /// Ordering the entries were arranged by
    order: OrderKind,
}

impl<K, V> ImmutableMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapbuilder::ImmutableMap;
    ///
    /// let map: ImmutableMap<String, i32> = ImmutableMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::from_entries(ordered_hash_map(0), OrderKind::Insertion)
    }

    pub(crate) fn from_entries(entries: OrderedHashMap<K, V>, order: OrderKind) -> Self {
        Self { entries, order }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the ordering this map was built with.
    #[inline]
    pub const fn order_kind(&self) -> OrderKind {
        self.order
    }

    /// Returns the entry at `index` in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapbuilder::MapBuilder;
    ///
    /// let map = MapBuilder::new().put(2, "two").put(1, "one").natural_order().build();
    /// assert_eq!(map.get_index(0), Some((&1, &"one")));
    /// assert_eq!(map.get_index(2), None);
    /// ```
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.entries.get_index(index)
    }

    /// Returns the first entry in iteration order.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.first()
    }

    /// Returns the last entry in iteration order.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.entries.last()
    }

    /// Returns an iterator over the entries in iteration order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over the keys in iteration order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.entries.keys()
    }

    /// Returns an iterator over the values in iteration order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.entries.values()
    }
}

impl<K: Hash + Eq, V> ImmutableMap<K, V> {
    /// Returns a reference to the value for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapbuilder::MapBuilder;
    ///
    /// let map = MapBuilder::new().put("one".to_string(), 1).build();
    /// assert_eq!(map.get("one"), Some(&1));
    /// assert_eq!(map.get("two"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns the stored key and its value for `key`.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_key_value(key)
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Returns the position of `key` in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapbuilder::MapBuilder;
    ///
    /// let map = MapBuilder::new()
    ///     .put("one", 1)
    ///     .put("two", 2)
    ///     .put("three", 3)
    ///     .natural_order()
    ///     .build();
    /// assert_eq!(map.get_index_of("three"), Some(1));
    /// ```
    pub fn get_index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_index_of(key)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of an [`ImmutableMap`].
pub struct Iter<'a, K, V> {
    inner: indexmap::map::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An owning iterator over the entries of an [`ImmutableMap`].
pub struct IntoIter<K, V> {
    inner: indexmap::map::IntoIter<K, V>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for ImmutableMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Collects pairs into a map in [`OrderKind::Insertion`] order.
///
/// A repeated key keeps its first position and takes its last value.
impl<K: Hash + Eq, V> FromIterator<(K, V)> for ImmutableMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut builder: MapBuilder<K, V> = iter.into_iter().collect();
        builder.insertion_order();
        builder.into_map()
    }
}

impl<K, V> IntoIterator for ImmutableMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a ImmutableMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// # Panics
///
/// Panics if `key` is not present in the map.
impl<K, V, Q> Index<&Q> for ImmutableMap<K, V>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in ImmutableMap"),
        }
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for ImmutableMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|other_value| value == other_value))
    }
}

impl<K: Hash + Eq, V: Eq> Eq for ImmutableMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ImmutableMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for ImmutableMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(ImmutableMap<String, i32>: Send, Sync, Clone);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for ImmutableMap<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct ImmutableMapVisitor<K, V> {
    key_marker: std::marker::PhantomData<K>,
    value_marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<K, V> ImmutableMapVisitor<K, V> {
    const fn new() -> Self {
        Self {
            key_marker: std::marker::PhantomData,
            value_marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for ImmutableMapVisitor<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
{
    type Value = ImmutableMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut builder = MapBuilder::new();
        builder.insertion_order();
        while let Some((key, value)) = access.next_entry()? {
            builder.put(key, value);
        }
        Ok(builder.into_map())
    }
}

/// Deserializes a map in document order as an [`OrderKind::Insertion`] map.
#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for ImmutableMap<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(ImmutableMapVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
