//! sift — structural pattern matching with named captures over dynamic
//! values.
//!
//! This crate provides:
//! - [`Binder`] — a named, immutable capture descriptor with optional
//!   type/regex/probe constraints, filters, and a spread role
//! - [`Pattern`] — a recursive pattern tree over literals, constraints,
//!   binders, lists (with head/tail spreads), and open mappings
//! - [`evaluate`] — one-shot structural matching, yielding [`Bindings`]
//! - [`when`] — a continuation chain that tries pattern alternatives in
//!   order and locks onto the first success
//!
//! Matching is a single synchronous pass over the value's shape. A failed
//! match is ordinary control flow (`None`), never an error; the only
//! fatal condition is a malformed constraint, rejected at construction
//! time as a [`PatternError`].
//!
//! # Example
//!
//! ```
//! use sift::{binder, when, Pattern, Value};
//!
//! let value = Value::list(vec![Value::int(1), Value::int(2), Value::int(3)]);
//!
//! // Bind the first element, absorb the rest into a list.
//! let split = Pattern::list([
//!     Pattern::from(binder("first").number()),
//!     Pattern::from(binder("rest").tail()),
//! ]);
//!
//! let outcome = when(value)
//!     .case_to(&Pattern::from(binder("s").string()), Value::string("a string"))
//!     .case_with(&split, |bindings| {
//!         bindings.get("first").cloned().unwrap_or(Value::Undefined)
//!     })
//!     .end();
//!
//! assert_eq!(outcome, Some(Value::int(1)));
//! ```

mod binder;
mod constraint;
mod errors;
mod matcher;
mod pattern;
mod when;

pub use binder::{binder, Binder, Spread};
pub use constraint::{Constraint, Token};
pub use errors::PatternError;
pub use matcher::{evaluate, Bindings};
pub use pattern::Pattern;
pub use when::{when, When};

// Re-export the value vocabulary so callers need only one crate.
pub use sift_value::{Heap, MapValue, Predicate, Value};
