//! Sequencing of pattern alternatives over one value.
//!
//! [`when`] opens a chain; each `case*` call tries one pattern. The first
//! success locks the chain onto a computed result, and every later case is
//! skipped without evaluating its pattern — side effects in later filters
//! never run. `end` yields the locked result, or `None` when nothing
//! matched.

use sift_value::Value;

use crate::matcher::{evaluate, Bindings};
use crate::pattern::Pattern;

/// A chain of pattern alternatives tried in priority order against one
/// value.
#[derive(Debug)]
pub struct When {
    value: Value,
    state: State,
}

#[derive(Debug)]
enum State {
    Searching,
    Locked(Value),
}

/// Open a match chain over `value`.
pub fn when(value: Value) -> When {
    When {
        value,
        state: State::Searching,
    }
}

impl When {
    /// Try `pattern`; on success the chain resolves to the bindings
    /// themselves, packaged as a map value.
    pub fn case(self, pattern: &Pattern) -> When {
        self.case_with(pattern, |bindings| Value::map(bindings.clone()))
    }

    /// Try `pattern`; on success the chain resolves to `result` as-is.
    pub fn case_to(self, pattern: &Pattern, result: Value) -> When {
        self.case_with(pattern, move |_| result)
    }

    /// Try `pattern`; on success the chain resolves to `handler(&bindings)`.
    ///
    /// Once an earlier case has locked the chain, the pattern is not
    /// evaluated and `handler` does not run.
    pub fn case_with<F>(self, pattern: &Pattern, handler: F) -> When
    where
        F: FnOnce(&Bindings) -> Value,
    {
        match self.state {
            State::Locked(_) => self,
            State::Searching => match evaluate(&self.value, pattern) {
                Some(bindings) => {
                    let result = handler(&bindings);
                    tracing::debug!("match chain locked");
                    When {
                        value: self.value,
                        state: State::Locked(result),
                    }
                }
                None => self,
            },
        }
    }

    /// Terminal call: the locked result, or `None` when no case matched.
    pub fn end(self) -> Option<Value> {
        match self.state {
            State::Locked(result) => Some(result),
            State::Searching => None,
        }
    }
}
