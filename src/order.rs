//! Ordering policies for built maps.
//!
//! A [`MapBuilder`](crate::MapBuilder) carries exactly one ordering policy at a
//! time. [`OrderKind`] is the public tag of that policy; the builder stores the
//! policy itself, together with whatever it needs to sort keys, as an
//! internal sum type.
//!
//! # Examples
//!
//! ```rust
//! use mapbuilder::{MapBuilder, OrderKind};
//!
//! let mut builder: MapBuilder<&str, i32> = MapBuilder::new();
//! assert_eq!(builder.order_kind(), OrderKind::Unordered);
//!
//! builder.natural_order();
//! assert_eq!(builder.order_kind(), OrderKind::Natural);
//!
//! // The last selection wins.
//! builder.insertion_order();
//! assert_eq!(builder.order_kind(), OrderKind::Insertion);
//! ```

use std::cmp::Ordering;
use std::fmt;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer holding a comparator.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`, and
/// comparators must be `Send + Sync`.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which leaves the builder single-threaded.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Comparator
// =============================================================================

/// A total order over keys that can be stored in a [`MapBuilder`](crate::MapBuilder).
///
/// Implemented for every `Fn(&K, &K) -> Ordering`. With the `arc` feature the
/// function must additionally be `Send + Sync`.
#[cfg(feature = "arc")]
pub trait KeyComparator<K: ?Sized>: Fn(&K, &K) -> Ordering + Send + Sync {}

#[cfg(feature = "arc")]
impl<K: ?Sized, F> KeyComparator<K> for F where F: Fn(&K, &K) -> Ordering + Send + Sync {}

/// A total order over keys that can be stored in a [`MapBuilder`](crate::MapBuilder).
///
/// Implemented for every `Fn(&K, &K) -> Ordering`. With the `arc` feature the
/// function must additionally be `Send + Sync`.
#[cfg(not(feature = "arc"))]
pub trait KeyComparator<K: ?Sized>: Fn(&K, &K) -> Ordering {}

#[cfg(not(feature = "arc"))]
impl<K: ?Sized, F> KeyComparator<K> for F where F: Fn(&K, &K) -> Ordering {}

pub(crate) type Comparator<K> = ReferenceCounter<dyn KeyComparator<K>>;

// =============================================================================
// OrderKind
// =============================================================================

/// The ordering policy applied when a map is built.
///
/// # Examples
///
/// ```rust
/// use mapbuilder::OrderKind;
///
/// assert_eq!(OrderKind::default(), OrderKind::Unordered);
/// assert_eq!(OrderKind::Comparator.to_string(), "comparator");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OrderKind {
    /// Iteration order follows the hash layout of the keys.
    #[default]
    Unordered,
    /// Keys ascend by their [`Ord`] implementation.
    Natural,
    /// Keys ascend by a caller supplied comparator.
    Comparator,
    /// Keys keep the order in which they were first put.
    Insertion,
}

impl OrderKind {
    /// Returns the lowercase name of this ordering.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unordered => "unordered",
            Self::Natural => "natural",
            Self::Comparator => "comparator",
            Self::Insertion => "insertion",
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

// =============================================================================
// OrderMode
// =============================================================================

/// The active ordering policy of a builder, including its sort function.
pub(crate) enum OrderMode<K> {
    Unordered,
    /// `Ord::cmp` of the key type, captured when natural order was selected.
    Natural(fn(&K, &K) -> Ordering),
    Comparator(Comparator<K>),
    Insertion,
}

impl<K> OrderMode<K> {
    pub(crate) const fn kind(&self) -> OrderKind {
        match self {
            Self::Unordered => OrderKind::Unordered,
            Self::Natural(_) => OrderKind::Natural,
            Self::Comparator(_) => OrderKind::Comparator,
            Self::Insertion => OrderKind::Insertion,
        }
    }
}

impl<K> Default for OrderMode<K> {
    fn default() -> Self {
        Self::Unordered
    }
}

impl<K> Clone for OrderMode<K> {
    fn clone(&self) -> Self {
        match self {
            Self::Unordered => Self::Unordered,
            Self::Natural(compare) => Self::Natural(*compare),
            Self::Comparator(comparator) => Self::Comparator(ReferenceCounter::clone(comparator)),
            Self::Insertion => Self::Insertion,
        }
    }
}

impl<K> fmt::Debug for OrderMode<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.kind(), formatter)
    }
}

// =============================================================================
// Sorting
// =============================================================================

/// Sorts `entries` by key with `compare` and collapses keys the comparator
/// treats as equal.
///
/// `entries` must be in insertion order. The sort is stable, so within a run
/// of equal keys the first element is the earliest inserted one: its key is
/// kept and the value of the last element of the run replaces its value.
pub(crate) fn sort_entries_by<K, V, F>(entries: &mut Vec<(K, V)>, compare: F)
where
    F: Fn(&K, &K) -> Ordering,
{
    entries.sort_by(|(left, _), (right, _)| compare(left, right));
    entries.dedup_by(|(later_key, later_value), (kept_key, kept_value)| {
        if compare(&*kept_key, &*later_key) == Ordering::Equal {
            std::mem::swap(later_value, kept_value);
            true
        } else {
            false
        }
    });
}

// =============================================================================
// Tests
// =============================================================================
