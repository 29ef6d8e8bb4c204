//! The dynamic `Value` enum and its factory methods.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use rustc_hash::FxHashMap;

use crate::Heap;

/// Map payload: string keys to values.
pub type MapValue = FxHashMap<String, Value>;

/// Source of fresh symbol ids. Never reused within a process.
static NEXT_SYMBOL: AtomicU64 = AtomicU64::new(1);

/// A dynamic runtime value.
///
/// Scalars are stored inline; lists, maps, and strings allocate through
/// [`Heap`] and therefore clone by bumping a reference count.
#[derive(Clone, Debug)]
pub enum Value {
    /// The absent value. Missing map keys match as `Undefined`.
    Undefined,
    /// The explicit null value, distinct from `Undefined`.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Heap<String>),
    /// An opaque symbol, equal only to itself. Minted by [`Value::symbol`].
    Symbol(u64),
    List(Heap<Vec<Value>>),
    Map(Heap<MapValue>),
}

// Factory methods (the only way to construct heap variants)

impl Value {
    pub fn int(n: i64) -> Value {
        Value::Int(n)
    }

    pub fn float(n: f64) -> Value {
        Value::Float(n)
    }

    pub fn bool(b: bool) -> Value {
        Value::Bool(b)
    }

    pub fn string(s: impl Into<String>) -> Value {
        Value::Str(Heap::new(s.into()))
    }

    pub fn list(items: Vec<Value>) -> Value {
        Value::List(Heap::new(items))
    }

    /// Build a map value from key/value pairs.
    pub fn map(entries: impl IntoIterator<Item = (impl Into<String>, Value)>) -> Value {
        let map: MapValue = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect();
        Value::Map(Heap::new(map))
    }

    /// Mint a fresh symbol, equal only to itself.
    pub fn symbol() -> Value {
        Value::Symbol(NEXT_SYMBOL.fetch_add(1, Ordering::Relaxed))
    }
}

impl Value {
    /// The value's kind, for messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) | Value::Float(_) => "number",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Strict equality: the relation the matcher uses for literal patterns
    /// and backreference consistency.
    ///
    /// Scalars compare by value (numeric equality spans the int/float
    /// split; `NaN` is not `same` as itself), strings by content, symbols
    /// by id, lists and maps by heap identity.
    #[expect(
        clippy::float_cmp,
        reason = "strict equality compares floats exactly, including -0.0 == 0.0"
    )]
    #[expect(
        clippy::cast_precision_loss,
        reason = "cross int/float comparison mirrors a single numeric domain"
    )]
    pub fn same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => Heap::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Deep structural equality, for assertions and caller use.
///
/// Unlike [`Value::same`], lists and maps compare elementwise and the
/// int/float split is significant.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => **a == **b,
            (Value::Map(a), Value::Map(b)) => **a == **b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Symbol(id) => write!(f, "symbol(#{id})"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::string(s)
    }
}
