//! The recursive structural matcher.
//!
//! `check` walks a value and a pattern together in one synchronous pass,
//! accumulating named bindings. Failure is ordinary control flow: a
//! non-matching pattern yields `None`, never an error and never a panic.
//! Bindings made by earlier siblings are threaded into later sub-matches
//! through a parent-linked [`Context`] chain, which is what makes
//! backreferences (the same binder name reused within one pattern tree)
//! consistent across the whole attempt.

use rustc_hash::FxHashMap;
use sift_value::Value;

use crate::binder::{Binder, Spread};
use crate::pattern::Pattern;

/// Bindings produced by a match attempt: binder name to captured value.
pub type Bindings = FxHashMap<String, Value>;

/// Bindings visible to a sub-match: this level's accumulated bindings plus
/// everything bound by enclosing levels of the same attempt.
struct Context<'a> {
    parent: Option<&'a Context<'a>>,
    bindings: &'a Bindings,
}

impl Context<'_> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        match self.bindings.get(name) {
            Some(v) => Some(v),
            None => self.parent.and_then(|p| p.lookup(name)),
        }
    }
}

/// Match `value` against `pattern` in one shot.
///
/// On success, returns the bindings the pattern produced (empty for a
/// pattern with no named binders). `None` is the no-match signal.
pub fn evaluate(value: &Value, pattern: &Pattern) -> Option<Bindings> {
    let empty = Bindings::default();
    let root = Context {
        parent: None,
        bindings: &empty,
    };
    let outcome = check(value, pattern, &root);
    tracing::trace!(matched = outcome.is_some(), "pattern attempt");
    outcome
}

fn check(value: &Value, pattern: &Pattern, ctx: &Context<'_>) -> Option<Bindings> {
    match pattern {
        Pattern::Wildcard => Some(Bindings::default()),
        Pattern::Binder(b) => check_binder(value, b, ctx),
        Pattern::Literal(lit) => lit.same(value).then(Bindings::default),
        Pattern::Constraint(c) => c.admits(value).then(Bindings::default),
        // A spread marker is positional; on its own it matches nothing.
        Pattern::Head | Pattern::Tail => None,
        Pattern::List(elements) => check_list(value, elements, ctx),
        Pattern::Map(entries) => check_map(value, entries, ctx),
    }
}

fn check_binder(value: &Value, b: &Binder, ctx: &Context<'_>) -> Option<Bindings> {
    // Backreference consistency: a named binder seen earlier in this
    // attempt must re-bind the same value, by strict equality.
    if !b.is_anonymous() {
        if let Some(seen) = ctx.lookup(b.name()) {
            if !seen.same(value) {
                return None;
            }
        }
    }
    if !b.union_admits(value) {
        return None;
    }
    if !b.filters_admit(value) {
        return None;
    }
    let mut out = Bindings::default();
    if !b.is_anonymous() {
        out.insert(b.name().to_owned(), value.clone());
    }
    if let Some(shape) = b.shape() {
        let sub = {
            let local = Context {
                parent: Some(ctx),
                bindings: &out,
            };
            check(value, shape, &local)?
        };
        out.extend(sub);
    }
    Some(out)
}

fn has_head_spread(p: &Pattern) -> bool {
    match p {
        Pattern::Head => true,
        Pattern::Binder(b) => b.spread() == Spread::Head,
        _ => false,
    }
}

fn has_tail_spread(p: &Pattern) -> bool {
    match p {
        Pattern::Tail => true,
        Pattern::Binder(b) => b.spread() == Spread::Tail,
        _ => false,
    }
}

/// Bind a spread binder to the slice it absorbed. Every absorbed element
/// must pass the binder's union predicate; filters are not applied
/// per-element.
fn absorb_spread(b: &Binder, absorbed: &[Value], rs: &mut Bindings) -> Option<()> {
    if !absorbed.iter().all(|v| b.union_admits(v)) {
        return None;
    }
    if !b.is_anonymous() {
        rs.insert(b.name().to_owned(), Value::list(absorbed.to_vec()));
    }
    Some(())
}

fn check_list(value: &Value, elements: &[Pattern], ctx: &Context<'_>) -> Option<Bindings> {
    let Value::List(items) = value else {
        return None;
    };
    let n = elements.len();
    // An empty list pattern matches any list.
    if n == 0 {
        return Some(Bindings::default());
    }
    let is_head = has_head_spread(&elements[0]);
    let is_tail = has_tail_spread(&elements[n - 1]);
    // Open at both ends is ambiguous.
    if is_head && is_tail {
        return None;
    }
    if is_head || is_tail {
        // The spread absorbs zero or more elements.
        if items.len() + 1 < n {
            return None;
        }
    } else if items.len() != n {
        return None;
    }

    let mut rs = Bindings::default();
    let (fixed, slice) = if is_tail {
        let fixed_count = n - 1;
        if let Pattern::Binder(b) = &elements[fixed_count] {
            absorb_spread(b, &items[fixed_count..], &mut rs)?;
        }
        (&elements[..fixed_count], &items[..fixed_count])
    } else if is_head {
        let absorbed = items.len() + 1 - n;
        if let Pattern::Binder(b) = &elements[0] {
            absorb_spread(b, &items[..absorbed], &mut rs)?;
        }
        (&elements[1..], &items[absorbed..])
    } else {
        (elements, &items[..])
    };

    for (v, p) in slice.iter().zip(fixed) {
        let sub = {
            let local = Context {
                parent: Some(ctx),
                bindings: &rs,
            };
            check(v, p, &local)?
        };
        rs.extend(sub);
    }
    Some(rs)
}

fn check_map(
    value: &Value,
    entries: &[(String, Pattern)],
    ctx: &Context<'_>,
) -> Option<Bindings> {
    let Value::Map(map) = value else {
        return None;
    };
    let undefined = Value::Undefined;
    let mut rs = Bindings::default();
    for (key, sub_pattern) in entries {
        let field = map.get(key).unwrap_or(&undefined);
        let sub = {
            let local = Context {
                parent: Some(ctx),
                bindings: &rs,
            };
            check(field, sub_pattern, &local)?
        };
        rs.extend(sub);
    }
    Some(rs)
}
