//! Builder for [`ImmutableMap`].
//!
//! This module provides [`MapBuilder`], which stages key-value pairs in
//! insertion order and finalizes them into an [`ImmutableMap`] arranged by
//! one of four orderings:
//!
//! | Selector             | Iteration order of the built map            |
//! |----------------------|---------------------------------------------|
//! | (default)            | hash order, fixed for each built map        |
//! | `insertion_order()`  | order in which keys were first put          |
//! | `natural_order()`    | ascending by the key type's [`Ord`]         |
//! | `sorted_order(f)`    | ascending by the comparator `f`             |
//!
//! Selectors and `put` may be called in any order before `build`; the last
//! selector wins.
//!
//! # Examples
//!
//! ```rust
//! use mapbuilder::MapBuilder;
//!
//! let map = MapBuilder::new()
//!     .put("three", 3)
//!     .put("one", 1)
//!     .put("two", 2)
//!     .put("four", 4)
//!     .insertion_order()
//!     .build();
//!
//! let entries: Vec<(&&str, &i32)> = map.iter().collect();
//! assert_eq!(
//!     entries,
//!     vec![(&"three", &3), (&"one", &1), (&"two", &2), (&"four", &4)]
//! );
//! ```
//!
//! # Reuse
//!
//! [`MapBuilder::build`] borrows the builder, so the same builder can keep
//! accumulating entries and build again. Maps built earlier are unaffected.
//!
//! ```rust
//! use mapbuilder::MapBuilder;
//!
//! let mut builder = MapBuilder::new();
//! builder.put("one", 1).natural_order();
//! let first = builder.build();
//!
//! builder.put("two", 2);
//! let second = builder.build();
//!
//! assert_eq!(first.len(), 1);
//! assert_eq!(second.len(), 2);
//! ```
//!
//! # Thread Safety
//!
//! A builder is meant to be filled by one thread. Without the `arc` feature
//! its comparator is held in an `Rc` and the builder is neither `Send` nor
//! `Sync`. With `arc`, comparators must be `Send + Sync` and the builder can
//! be moved between threads; concurrent mutation still needs external
//! locking.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

use crate::hasher::{OrderedHashMap, ordered_hash_map};
use crate::immutable_map::ImmutableMap;
use crate::order::{KeyComparator, OrderKind, OrderMode, ReferenceCounter, sort_entries_by};
use crate::trace::{debug_event, trace_event};

// =============================================================================
// MapBuilder Definition
// =============================================================================

/// Accumulates key-value pairs and builds an [`ImmutableMap`] with a selected
/// ordering.
///
/// Putting an existing key replaces its value but keeps the position the key
/// was first put at.
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
///     .sorted_order(|left: &&str, right: &&str| right.cmp(left))
///     .build();
///
/// let keys: Vec<&&str> = map.keys().collect();
/// assert_eq!(keys, vec![&"two", &"three", &"one"]);
/// ```
pub struct MapBuilder<K, V> {
    /// Staged entries in first-insertion order
    entries: OrderedHashMap<K, V>,
    /// Ordering applied by `build`
    mode: OrderMode<K>,
}

impl<K, V> MapBuilder<K, V> {
    /// Creates an empty builder with [`OrderKind::Unordered`] ordering.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty builder with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: ordered_hash_map(capacity),
            mode: OrderMode::Unordered,
        }
    }

    /// Returns the number of staged entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entry has been staged.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the ordering `build` will apply.
    pub const fn order_kind(&self) -> OrderKind {
        self.mode.kind()
    }

    /// Builds maps in the order keys were first put.
    pub fn insertion_order(&mut self) -> &mut Self {
        trace_event!(order = %OrderKind::Insertion, "ordering selected");
        self.mode = OrderMode::Insertion;
        self
    }

    /// Builds maps sorted ascending by the key type's [`Ord`] implementation.
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
    ///
    /// let keys: Vec<&&str> = map.keys().collect();
    /// assert_eq!(keys, vec![&"one", &"three", &"two"]);
    /// ```
    ///
    /// Keys without a total order are rejected at compile time:
    ///
    /// ```compile_fail
    /// use mapbuilder::MapBuilder;
    ///
    /// #[derive(PartialEq, Eq, Hash)]
    /// struct Opaque(u8);
    ///
    /// MapBuilder::new().put(Opaque(1), 1).natural_order();
    /// ```
    pub fn natural_order(&mut self) -> &mut Self
    where
        K: Ord,
    {
        trace_event!(order = %OrderKind::Natural, "ordering selected");
        self.mode = OrderMode::Natural(<K as Ord>::cmp);
        self
    }

    /// Builds maps sorted ascending by `comparator`.
    ///
    /// `comparator` must be a total order. Keys it reports as
    /// [`Ordering::Equal`] collapse into one entry holding the earliest put
    /// key and the latest put value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapbuilder::MapBuilder;
    ///
    /// let map = MapBuilder::new()
    ///     .put(1, "one")
    ///     .put(3, "three")
    ///     .put(2, "two")
    ///     .sorted_order(|left: &i32, right: &i32| right.cmp(left))
    ///     .build();
    ///
    /// let values: Vec<&&str> = map.values().collect();
    /// assert_eq!(values, vec![&"three", &"two", &"one"]);
    /// ```
    pub fn sorted_order<F>(&mut self, comparator: F) -> &mut Self
    where
        F: Fn(&K, &K) -> Ordering + KeyComparator<K> + 'static,
    {
        trace_event!(order = %OrderKind::Comparator, "ordering selected");
        self.mode = OrderMode::Comparator(ReferenceCounter::new(comparator));
        self
    }

    /// Builds maps in hash order, the default.
    pub fn unordered(&mut self) -> &mut Self {
        trace_event!(order = %OrderKind::Unordered, "ordering selected");
        self.mode = OrderMode::Unordered;
        self
    }
}

impl<K: Hash + Eq, V> MapBuilder<K, V> {
    /// Stages `value` under `key`, replacing any previous value.
    ///
    /// A replaced key keeps its original insertion position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapbuilder::MapBuilder;
    ///
    /// let map = MapBuilder::new()
    ///     .put("a", 1)
    ///     .put("b", 2)
    ///     .put("a", 10)
    ///     .insertion_order()
    ///     .build();
    ///
    /// assert_eq!(map.get_index(0), Some((&"a", &10)));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> &mut Self {
        self.entries.insert(key, value);
        self
    }

    /// Stages every pair of `entries` in iteration order.
    pub fn put_all<I>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.entries.extend(entries);
        self
    }

    /// Returns `true` if `key` has been staged.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Builds an [`ImmutableMap`] from the staged entries.
    ///
    /// The builder keeps its entries and ordering, so it can be extended and
    /// built again. Building twice without changes in between yields maps with
    /// the same entries in the same order.
    pub fn build(&self) -> ImmutableMap<K, V>
    where
        K: Clone,
        V: Clone,
    {
        debug_event!(
            order = %self.mode.kind(),
            entries = self.entries.len(),
            "building immutable map"
        );
        finalize(&self.mode, self.entries.clone())
    }

    /// Builds an [`ImmutableMap`] by consuming the builder, without cloning
    /// keys or values.
    pub fn into_map(self) -> ImmutableMap<K, V> {
        debug_event!(
            order = %self.mode.kind(),
            entries = self.entries.len(),
            "building immutable map"
        );
        let Self { entries, mode } = self;
        finalize(&mode, entries)
    }
}

// =============================================================================
// Finalization
// =============================================================================

/// Arranges `staged` according to `mode`.
fn finalize<K: Hash + Eq, V>(mode: &OrderMode<K>, staged: OrderedHashMap<K, V>) -> ImmutableMap<K, V> {
    let entries = match mode {
        OrderMode::Insertion => staged,
        OrderMode::Unordered => arrange_by_hash(staged),
        OrderMode::Natural(compare) => arrange_by(staged, compare),
        OrderMode::Comparator(comparator) => {
            arrange_by(staged, |left: &K, right: &K| comparator(left, right))
        }
    };
    ImmutableMap::from_entries(entries, mode.kind())
}

/// Reorders `staged` into the iteration order of a hash map.
///
/// The hash map reuses the staging hasher, so the same staged entries always
/// land in the same order.
fn arrange_by_hash<K: Hash + Eq, V>(staged: OrderedHashMap<K, V>) -> OrderedHashMap<K, V> {
    let hasher = staged.hasher().clone();
    let mut hashed = HashMap::with_capacity_and_hasher(staged.len(), hasher.clone());
    hashed.extend(staged);

    let mut arranged = OrderedHashMap::with_capacity_and_hasher(hashed.len(), hasher);
    arranged.extend(hashed);
    arranged
}

/// Reorders `staged` ascending by `compare`.
fn arrange_by<K, V, F>(staged: OrderedHashMap<K, V>, compare: F) -> OrderedHashMap<K, V>
where
    K: Hash + Eq,
    F: Fn(&K, &K) -> Ordering,
{
    let hasher = staged.hasher().clone();
    let mut entries: Vec<(K, V)> = staged.into_iter().collect();
    sort_entries_by(&mut entries, compare);

    let mut arranged = OrderedHashMap::with_capacity_and_hasher(entries.len(), hasher);
    arranged.extend(entries);
    arranged
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for MapBuilder<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for MapBuilder<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            mode: self.mode.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for MapBuilder<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MapBuilder")
            .field("order", &self.mode)
            .field("entries", &self.entries)
            .finish()
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for MapBuilder<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.put_all(iter);
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for MapBuilder<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.put_all(iter);
        builder
    }
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(MapBuilder<i32, i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(MapBuilder<i32, i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
