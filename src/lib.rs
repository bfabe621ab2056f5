//! # mapbuilder
//!
//! A builder for immutable maps with a caller-selected iteration order.
//!
//! ## Overview
//!
//! [`MapBuilder`] stages key-value pairs and finalizes them into an
//! [`ImmutableMap`]. The order in which the built map iterates is chosen on the
//! builder:
//!
//! - **Unordered** (default): hash order, fixed for each built map
//! - **Insertion**: the order in which keys were first put
//! - **Natural**: ascending by the key type's [`Ord`]
//! - **Comparator**: ascending by a caller supplied comparator
//!
//! Built maps offer lookups and iteration only. Orderings that need a total
//! order over keys are checked by the type system, and there is no way to
//! mutate a built map, so none of these operations fail at runtime.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ImmutableMap`] and [`OrderKind`]
//! - `fxhash`: hash keys with `rustc-hash`
//! - `ahash`: hash keys with `ahash`
//! - `arc`: store comparators in `Arc`, making builders `Send`
//! - `tracing`: emit `tracing` events while building
//! - `full`: `serde` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use mapbuilder::prelude::*;
//!
//! let map = MapBuilder::new()
//!     .put("one", 1)
//!     .put("two", 2)
//!     .put("three", 3)
//!     .natural_order()
//!     .build();
//!
//! assert_eq!(map.order_kind(), OrderKind::Natural);
//! let keys: Vec<&&str> = map.keys().collect();
//! assert_eq!(keys, vec![&"one", &"three", &"two"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use mapbuilder::prelude::*;
/// ```
pub mod prelude {
    pub use crate::builder::MapBuilder;
    pub use crate::immutable_map::ImmutableMap;
    pub use crate::order::OrderKind;
}

pub mod builder;
pub mod hasher;
pub mod immutable_map;
pub mod order;

mod trace;

pub use builder::MapBuilder;
pub use hasher::DefaultBuildHasher;
pub use immutable_map::{ImmutableMap, IntoIter, Iter};
pub use order::{KeyComparator, OrderKind};
