//! Binders: named, immutable capture descriptors.

use std::sync::Arc;

use sift_value::{Predicate, Value};
use smallvec::SmallVec;

use crate::constraint::{resolve, Constraint, Marker, Resolved, Token};
use crate::errors::PatternError;
use crate::pattern::Pattern;

/// Positional spread role of a binder inside a list pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Spread {
    #[default]
    None,
    /// Absorb a variable-length leading slice.
    Head,
    /// Absorb a variable-length trailing slice.
    Tail,
}

/// A named capture slot in a pattern.
///
/// Binders are immutable: every application of a constraint, filter, or
/// marker returns a new binder and leaves the receiver untouched, so one
/// binder can be shared across unlimited match attempts (and threads)
/// without coordination.
///
/// Type constraints OR together — the binder accepts a value admitted by
/// any of them (no constraints means any value). Filters AND together.
/// Because constraints and filters accumulate in separate sets, applying a
/// constraint then a filter accepts exactly the same values as the reverse
/// order.
#[derive(Clone, Debug)]
pub struct Binder {
    name: Arc<str>,
    union: SmallVec<[Constraint; 2]>,
    filters: SmallVec<[Predicate; 2]>,
    anonymous: bool,
    spread: Spread,
    shape: Option<Arc<Pattern>>,
}

impl Binder {
    /// A fresh binder: no constraints, no filters, not anonymous, no spread
    /// role.
    pub fn new(name: impl Into<Arc<str>>) -> Binder {
        Binder {
            name: name.into(),
            union: SmallVec::new(),
            filters: SmallVec::new(),
            anonymous: false,
            spread: Spread::None,
            shape: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    pub fn spread(&self) -> Spread {
        self.spread
    }

    pub(crate) fn shape(&self) -> Option<&Pattern> {
        self.shape.as_deref()
    }

    /// Does the value pass the union predicate? An empty union admits
    /// everything.
    pub(crate) fn union_admits(&self, value: &Value) -> bool {
        self.union.is_empty() || self.union.iter().any(|c| c.admits(value))
    }

    /// Does the value pass every filter?
    pub(crate) fn filters_admit(&self, value: &Value) -> bool {
        self.filters.iter().all(|f| f.test(value))
    }

    /// Apply a constraint token, returning the widened binder.
    ///
    /// Markers flip the corresponding mode (anonymous, head, tail); any
    /// other token OR-combines into the union predicate. The only failure
    /// is a token that does not resolve (unsupported value, bad regex).
    pub fn constrained(&self, token: Token) -> Result<Binder, PatternError> {
        let mut next = self.clone();
        match resolve(token)? {
            Resolved::Marker(Marker::Any) => next.anonymous = true,
            Resolved::Marker(Marker::Head) => next.spread = Spread::Head,
            Resolved::Marker(Marker::Tail) => next.spread = Spread::Tail,
            Resolved::Constraint(c) => next.union.push(c),
        }
        Ok(next)
    }

    /// AND a filter predicate into the binder.
    pub fn filter(&self, f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Binder {
        let mut next = self.clone();
        next.filters.push(Predicate::new(f));
        next
    }

    /// Attach a nested pattern the bound value must also match; its
    /// bindings merge with this binder's own.
    pub fn containing(&self, pattern: impl Into<Pattern>) -> Binder {
        let mut next = self.clone();
        next.shape = Some(Arc::new(pattern.into()));
        next
    }

    fn with(&self, constraint: Constraint) -> Binder {
        let mut next = self.clone();
        next.union.push(constraint);
        next
    }

    // Sugar over `constrained` for the infallible tokens.

    pub fn undefined(&self) -> Binder {
        self.with(Constraint::Undefined)
    }

    pub fn null(&self) -> Binder {
        self.with(Constraint::Null)
    }

    pub fn boolean(&self) -> Binder {
        self.with(Constraint::Boolean)
    }

    pub fn number(&self) -> Binder {
        self.with(Constraint::Number)
    }

    pub fn string(&self) -> Binder {
        self.with(Constraint::String)
    }

    pub fn symbol(&self) -> Binder {
        self.with(Constraint::Symbol)
    }

    pub fn list(&self) -> Binder {
        self.with(Constraint::List)
    }

    pub fn map(&self) -> Binder {
        self.with(Constraint::Map)
    }

    /// OR a regex constraint into the binder; fails on an uncompilable
    /// source.
    pub fn regex(&self, source: &str) -> Result<Binder, PatternError> {
        self.constrained(Token::Regex(source.to_owned()))
    }

    /// OR a caller probe into the binder.
    pub fn satisfies(&self, f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Binder {
        self.with(Constraint::Satisfies(Predicate::new(f)))
    }

    /// Mark the capture anonymous: it still constrains, but contributes no
    /// binding.
    pub fn any(&self) -> Binder {
        let mut next = self.clone();
        next.anonymous = true;
        next
    }

    /// Give the binder the head spread role.
    pub fn head(&self) -> Binder {
        let mut next = self.clone();
        next.spread = Spread::Head;
        next
    }

    /// Give the binder the tail spread role.
    pub fn tail(&self) -> Binder {
        let mut next = self.clone();
        next.spread = Spread::Tail;
        next
    }
}

/// Shorthand for [`Binder::new`].
pub fn binder(name: impl Into<Arc<str>>) -> Binder {
    Binder::new(name)
}
