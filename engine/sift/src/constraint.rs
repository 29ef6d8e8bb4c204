//! Constraint tokens and their resolution to value predicates.
//!
//! A [`Token`] is anything a caller may apply to a binder or embed directly
//! in a pattern. Resolution splits tokens into two camps: *markers*
//! (any/head/tail), which adjust how a binder captures and are not
//! predicates, and [`Constraint`]s, which are predicates over values.
//!
//! Resolution is the only place a token can be rejected: an uncompilable
//! regex or a runtime value that is not a constraint fails here, at
//! construction time, never during a match.

use std::sync::Arc;

use regex::Regex;
use sift_value::{Predicate, Value};

use crate::errors::PatternError;

/// A constraint token, prior to resolution.
#[derive(Clone, Debug)]
pub enum Token {
    /// Match-anything marker; applied to a binder it makes the capture
    /// anonymous.
    Any,
    /// Spread marker: absorb a variable-length leading slice of a list.
    Head,
    /// Spread marker: absorb a variable-length trailing slice of a list.
    Tail,
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Symbol,
    List,
    Map,
    /// Regular-expression constraint over string values. The source is
    /// compiled when the token is applied.
    Regex(String),
    /// Caller-supplied probe: the value must satisfy the predicate.
    Satisfies(Predicate),
}

impl Token {
    /// Interpret a runtime value as a constraint token.
    ///
    /// Only `undefined` and `null` carry over; any other value is not a
    /// constraint.
    pub fn from_value(value: &Value) -> Result<Token, PatternError> {
        match value {
            Value::Undefined => Ok(Token::Undefined),
            Value::Null => Ok(Token::Null),
            other => Err(PatternError::UnsupportedConstraint {
                token: other.to_string(),
            }),
        }
    }
}

/// A resolved constraint: a predicate over runtime values.
#[derive(Clone, Debug)]
pub enum Constraint {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Symbol,
    List,
    Map,
    Regex(Arc<Regex>),
    Satisfies(Predicate),
}

impl Constraint {
    /// Does `value` satisfy this constraint?
    pub fn admits(&self, value: &Value) -> bool {
        match self {
            Constraint::Undefined => matches!(value, Value::Undefined),
            Constraint::Null => matches!(value, Value::Null),
            Constraint::Boolean => matches!(value, Value::Bool(_)),
            Constraint::Number => matches!(value, Value::Int(_) | Value::Float(_)),
            Constraint::String => matches!(value, Value::Str(_)),
            Constraint::Symbol => matches!(value, Value::Symbol(_)),
            // Lists are never maps and maps are never lists; null is neither.
            Constraint::List => matches!(value, Value::List(_)),
            Constraint::Map => matches!(value, Value::Map(_)),
            Constraint::Regex(re) => match value {
                Value::Str(s) => re.is_match(s),
                _ => false,
            },
            Constraint::Satisfies(p) => p.test(value),
        }
    }
}

/// A marker token: adjusts how a binder captures rather than what it
/// accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Marker {
    Any,
    Head,
    Tail,
}

/// Outcome of resolving a token.
pub(crate) enum Resolved {
    Marker(Marker),
    Constraint(Constraint),
}

/// Resolve a token into a marker or a constraint predicate.
pub(crate) fn resolve(token: Token) -> Result<Resolved, PatternError> {
    Ok(match token {
        Token::Any => Resolved::Marker(Marker::Any),
        Token::Head => Resolved::Marker(Marker::Head),
        Token::Tail => Resolved::Marker(Marker::Tail),
        Token::Undefined => Resolved::Constraint(Constraint::Undefined),
        Token::Null => Resolved::Constraint(Constraint::Null),
        Token::Boolean => Resolved::Constraint(Constraint::Boolean),
        Token::Number => Resolved::Constraint(Constraint::Number),
        Token::String => Resolved::Constraint(Constraint::String),
        Token::Symbol => Resolved::Constraint(Constraint::Symbol),
        Token::List => Resolved::Constraint(Constraint::List),
        Token::Map => Resolved::Constraint(Constraint::Map),
        Token::Regex(source) => match Regex::new(&source) {
            Ok(re) => Resolved::Constraint(Constraint::Regex(Arc::new(re))),
            Err(err) => {
                return Err(PatternError::InvalidRegex {
                    pattern: source,
                    message: err.to_string(),
                })
            }
        },
        Token::Satisfies(p) => Resolved::Constraint(Constraint::Satisfies(p)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraint(token: Token) -> Constraint {
        match resolve(token) {
            Ok(Resolved::Constraint(c)) => c,
            _ => panic!("expected a constraint"),
        }
    }

    #[test]
    fn scalar_tags_test_variants() {
        assert!(constraint(Token::Undefined).admits(&Value::Undefined));
        assert!(!constraint(Token::Undefined).admits(&Value::Null));
        assert!(constraint(Token::Null).admits(&Value::Null));
        assert!(constraint(Token::Boolean).admits(&Value::Bool(true)));
        assert!(constraint(Token::Symbol).admits(&Value::symbol()));
        assert!(!constraint(Token::Boolean).admits(&Value::int(0)));
    }

    #[test]
    fn number_spans_int_and_float() {
        let number = constraint(Token::Number);
        assert!(number.admits(&Value::int(1)));
        assert!(number.admits(&Value::float(1.5)));
        assert!(!number.admits(&Value::string("1")));
    }

    #[test]
    fn list_and_map_shapes_are_disjoint() {
        let list = constraint(Token::List);
        let map = constraint(Token::Map);
        let l = Value::list(vec![]);
        let m = Value::map([("k", Value::int(1))]);
        assert!(list.admits(&l));
        assert!(!list.admits(&m));
        assert!(map.admits(&m));
        assert!(!map.admits(&l));
        assert!(!map.admits(&Value::Null));
    }

    #[test]
    fn regex_admits_matching_strings_only() {
        let re = constraint(Token::Regex("^1$".to_owned()));
        assert!(re.admits(&Value::string("1")));
        assert!(!re.admits(&Value::string("2")));
        assert!(!re.admits(&Value::int(1)));
    }

    #[test]
    fn invalid_regex_is_fatal_at_resolution() {
        let err = resolve(Token::Regex("(".to_owned()));
        assert!(matches!(
            err,
            Err(PatternError::InvalidRegex { pattern, .. }) if pattern == "("
        ));
    }

    #[test]
    fn markers_resolve_to_markers() {
        assert!(matches!(resolve(Token::Any), Ok(Resolved::Marker(Marker::Any))));
        assert!(matches!(resolve(Token::Head), Ok(Resolved::Marker(Marker::Head))));
        assert!(matches!(resolve(Token::Tail), Ok(Resolved::Marker(Marker::Tail))));
    }

    #[test]
    fn values_as_tokens() {
        assert!(matches!(
            Token::from_value(&Value::Undefined),
            Ok(Token::Undefined)
        ));
        assert!(matches!(Token::from_value(&Value::Null), Ok(Token::Null)));
        assert!(matches!(
            Token::from_value(&Value::int(5)),
            Err(PatternError::UnsupportedConstraint { token }) if token == "5"
        ));
    }
}
