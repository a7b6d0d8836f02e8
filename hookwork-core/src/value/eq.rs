//! Equality Checker
//!
//! Shallow comparisons used wherever the runtime decides whether something
//! changed: hook dependency keys, props between updates, and hook values in
//! purity mode. None of these perform a deep diff.

use std::rc::Rc;

use super::Value;

/// Identity equality.
///
/// Scalars and strings compare by value; lists, records and opaque values
/// compare by pointer. `Float` follows IEEE rules, so `NaN` is never the
/// same as itself.
pub fn same(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::List(x), Value::List(y)) => Rc::ptr_eq(x, y),
        (Value::Record(x), Value::Record(y)) => Rc::ptr_eq(x, y),
        (Value::Opaque(x), Value::Opaque(y)) => Rc::ptr_eq(x, y),
        _ => false,
    }
}

/// Shallow structural equality.
///
/// - Identical values are equal.
/// - Two lists are equal when they have the same length and every pair of
///   elements is identical.
/// - Two records are equal when they have the same number of keys and, in
///   `a`'s order, each key matches the key at the same position in `b` with
///   an identical value.
/// - Anything else is unequal.
pub fn shallow_eq(a: &Value, b: &Value) -> bool {
    if same(a, b) {
        return true;
    }

    match (a, b) {
        (Value::List(x), Value::List(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(l, r)| same(l, r))
        }
        (Value::Record(x), Value::Record(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .zip(y.iter())
                    .all(|((ka, va), (kb, vb))| ka == kb && same(va, vb))
        }
        _ => false,
    }
}

/// Dependency-key equality.
///
/// Same as [`shallow_eq`], except that list elements which are both records
/// also match when the records are shallow-equal. Recursion stops there:
/// records nested inside those records still compare by identity.
pub fn deps_eq(a: &Value, b: &Value) -> bool {
    if same(a, b) {
        return true;
    }

    match (a, b) {
        (Value::List(x), Value::List(y)) => {
            x.len() == y.len()
                && x.iter().zip(y.iter()).all(|(l, r)| match (l, r) {
                    (Value::Record(_), Value::Record(_)) => shallow_eq(l, r),
                    _ => same(l, r),
                })
        }
        _ => shallow_eq(a, b),
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
