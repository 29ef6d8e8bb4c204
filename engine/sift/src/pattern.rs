//! Pattern trees.
//!
//! Patterns are plain immutable values: build one out of literals,
//! constraints, and binders, then match it against as many values as you
//! like. The engine never mutates a pattern.

use sift_value::Value;

use crate::binder::Binder;
use crate::constraint::{resolve, Constraint, Marker, Resolved, Token};
use crate::errors::PatternError;

/// A structural pattern.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Matches anything, binds nothing.
    Wildcard,
    /// Named (or anonymous) capture with optional constraints.
    Binder(Binder),
    /// Literal value, compared by strict equality ([`Value::same`]).
    Literal(Value),
    /// Bare constraint; matches without binding.
    Constraint(Constraint),
    /// Bare head-spread marker. Only meaningful as the first element of a
    /// list pattern; anywhere else it matches nothing.
    Head,
    /// Bare tail-spread marker. Only meaningful as the last element of a
    /// list pattern.
    Tail,
    /// Ordered element patterns, optionally open at one end via a spread.
    List(Vec<Pattern>),
    /// Open mapping pattern: keys absent from the pattern are ignored,
    /// keys absent from the value match as `undefined`. Entries keep
    /// declaration order so later keys can backreference earlier bindings.
    Map(Vec<(String, Pattern)>),
}

impl Pattern {
    pub fn literal(value: impl Into<Value>) -> Pattern {
        Pattern::Literal(value.into())
    }

    /// Embed a bare constraint token as a pattern.
    ///
    /// Markers map to their pattern forms: `Any` becomes the wildcard,
    /// `Head`/`Tail` become the bare spread markers.
    pub fn constraint(token: Token) -> Result<Pattern, PatternError> {
        Ok(match resolve(token)? {
            Resolved::Marker(Marker::Any) => Pattern::Wildcard,
            Resolved::Marker(Marker::Head) => Pattern::Head,
            Resolved::Marker(Marker::Tail) => Pattern::Tail,
            Resolved::Constraint(c) => Pattern::Constraint(c),
        })
    }

    /// A bare regex pattern: matches a string the expression accepts,
    /// contributes no bindings.
    pub fn regex(source: &str) -> Result<Pattern, PatternError> {
        Pattern::constraint(Token::Regex(source.to_owned()))
    }

    pub fn list(elements: impl IntoIterator<Item = Pattern>) -> Pattern {
        Pattern::List(elements.into_iter().collect())
    }

    pub fn map(entries: impl IntoIterator<Item = (impl Into<String>, Pattern)>) -> Pattern {
        Pattern::Map(entries.into_iter().map(|(k, p)| (k.into(), p)).collect())
    }
}

impl From<Binder> for Pattern {
    fn from(b: Binder) -> Pattern {
        Pattern::Binder(b)
    }
}

impl From<&Binder> for Pattern {
    fn from(b: &Binder) -> Pattern {
        Pattern::Binder(b.clone())
    }
}

impl From<Value> for Pattern {
    fn from(v: Value) -> Pattern {
        Pattern::Literal(v)
    }
}

impl From<i64> for Pattern {
    fn from(n: i64) -> Pattern {
        Pattern::Literal(Value::Int(n))
    }
}

impl From<f64> for Pattern {
    fn from(n: f64) -> Pattern {
        Pattern::Literal(Value::Float(n))
    }
}

impl From<bool> for Pattern {
    fn from(b: bool) -> Pattern {
        Pattern::Literal(Value::Bool(b))
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Pattern {
        Pattern::Literal(Value::string(s))
    }
}
