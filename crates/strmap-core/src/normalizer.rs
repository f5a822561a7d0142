//! Normalizer — rewrites every leaf of a value as text
//!
//! # Dispatch
//!
//! Shapes are checked in this order, first match wins:
//!
//! 1. Optional cell — empty yields `""`, populated yields its content
//! 2. Record — a mapping keyed by each field's rename, else its declared name
//! 3. Mapping — same keys, normalized values
//! 4. Sequence — same order, normalized elements
//! 5. Scalar — canonical text form
//!
//! # Guarantees
//!
//! - **Total**: every `Value` normalizes, nothing fails
//! - **Idempotent**: `normalize(normalize(x).into()) == normalize(x)`
//! - **Deterministic**: same input always produces same output
//! - **Shape preserving**: sequences stay sequences, records and mappings
//!   become mappings

use std::collections::BTreeMap;

use crate::normalized::Normalized;
use crate::value::{Field, Value};

// ── Public API ─────────────────────────────────────────────

/// Normalize a value into an all-text tree
///
/// Recursion depth equals the nesting depth of `value`. The input must be
/// finite; there is no depth limit.
///
/// # Example
/// ```
/// use strmap_core::{normalize, Value};
///
/// let out = normalize(Value::from(vec![Value::from(100), Value::from([300, 400])]));
/// assert_eq!(out.to_string(), r#"["100", ["300", "400"]]"#);
/// ```
pub fn normalize(value: Value) -> Normalized {
    match value {
        Value::Optional(None) => Normalized::Text(String::new()),
        Value::Optional(Some(inner)) => normalize(*inner),
        Value::Record(fields) => normalize_record(fields),
        Value::Mapping(map) => Normalized::Mapping(
            map.into_iter()
                .map(|(key, value)| (key, normalize(value)))
                .collect(),
        ),
        Value::Sequence(items) => {
            Normalized::Sequence(items.into_iter().map(normalize).collect())
        }
        Value::Text(s) => Normalized::Text(s),
        Value::Int(n) => Normalized::Text(n.to_string()),
        Value::UInt(n) => Normalized::Text(n.to_string()),
        Value::Float32(v) => Normalized::Text(format_f32(v)),
        Value::Float64(v) => Normalized::Text(format_f64(v)),
        Value::Bool(b) => Normalized::Text(format_bool(b).to_string()),
        Value::Absent => Normalized::Text(String::new()),
    }
}

/// Text form of a 32-bit float
///
/// Shortest decimal that reads back as the same `f32`, never in exponent
/// notation: `1.23456789f32` is `"1.2345679"`, `1.0` is `"1"`.
pub fn format_f32(v: f32) -> String {
    if v.is_infinite() {
        return format_infinite(v.is_sign_positive());
    }
    v.to_string()
}

/// Text form of a 64-bit float, same rules as [`format_f32`]
pub fn format_f64(v: f64) -> String {
    if v.is_infinite() {
        return format_infinite(v.is_sign_positive());
    }
    v.to_string()
}

/// Text form of a boolean: `"1"` or `"0"`
pub fn format_bool(b: bool) -> &'static str {
    if b {
        "1"
    } else {
        "0"
    }
}

// ── Helpers ────────────────────────────────────────────────

fn normalize_record(fields: Vec<Field>) -> Normalized {
    let mut map = BTreeMap::new();
    // a later field with the same key overwrites an earlier one
    for field in fields {
        let key = field.key().to_owned();
        map.insert(key, normalize(field.value));
    }
    Normalized::Mapping(map)
}

fn format_infinite(positive: bool) -> String {
    let s = if positive { "+Inf" } else { "-Inf" };
    s.to_string()
}
