//! Error types for pattern construction.
//!
//! A failed *match* is never an error: the matcher reports it as `None` and
//! the caller moves on to the next alternative. `PatternError` covers the
//! one fatal condition — a token that cannot be made into a constraint —
//! raised while a binder or pattern is being built, so a malformed pattern
//! never reaches matching.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The token does not resolve to a constraint and is not a recognized
    /// marker.
    #[error("`{token}` is not a constraint")]
    UnsupportedConstraint { token: String },

    /// A regex constraint failed to compile.
    #[error("invalid regex constraint `{pattern}`: {message}")]
    InvalidRegex { pattern: String, message: String },
}
