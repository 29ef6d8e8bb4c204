//! Dynamic runtime values for the sift matching engine.
//!
//! This crate provides:
//! - The [`Value`] enum — the dynamic values patterns are matched against
//! - The [`Heap`] wrapper — enforced `Arc` usage for heap variants
//! - The [`Predicate`] wrapper — shareable caller-supplied boolean functions
//!
//! # Arc Enforcement Architecture
//!
//! All heap allocations go through factory methods on `Value`. The `Heap<T>`
//! wrapper has a crate-private constructor, so external code cannot build
//! heap variants directly:
//!
//! ```text
//! let s = Value::string("hello");          // OK
//! let l = Value::list(vec![]);             // OK
//! let s = Value::Str(Heap::new(...));      // ERROR: Heap::new is pub(crate)
//! ```
//!
//! # Equality
//!
//! Two relations coexist and they are not the same:
//! - [`Value::same`] is *strict equality*, the relation the matcher uses for
//!   literals and backreferences: heap values compare by identity.
//! - `PartialEq` (`==`) is deep structural equality, for assertions and
//!   general caller use.

mod heap;
mod predicate;
mod value;

pub use heap::Heap;
pub use predicate::Predicate;
pub use value::{MapValue, Value};
