//! Shareable caller-supplied predicates.

use std::fmt;
use std::sync::Arc;

use crate::Value;

/// A boolean predicate over runtime values.
///
/// Wraps the caller's closure behind `Arc` so binders that carry predicates
/// stay cheap to clone and safe to share across threads. The engine assumes
/// predicates are pure: a predicate is evaluated at most once per value per
/// match attempt, and the matcher never re-runs one to compensate for side
/// effects.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&Value) -> bool + Send + Sync>);

impl Predicate {
    pub fn new(f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Predicate(Arc::new(f))
    }

    /// Evaluate the predicate against `value`.
    #[inline]
    pub fn test(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}
