//! Coercion of loosely-shaped values into flat string sets.
//!
//! Callers hand the group operations anything from a single string to nested
//! arrays mixing strings with junk. Everything funnels through [`normalize`],
//! which flattens the recognizable parts and drops the rest without error.

use std::collections::BTreeSet;

use serde_json::Value;

/// Flatten `value` into the set of strings it contains.
///
/// A string becomes a singleton set, an array contributes the union of its
/// normalized elements at any nesting depth, and every other shape (numbers,
/// objects, booleans, null) contributes nothing.
pub fn normalize(value: &Value) -> BTreeSet<String> {
    match value {
        Value::String(s) => BTreeSet::from([s.clone()]),
        Value::Array(items) => items.iter().flat_map(normalize).collect(),
        _ => BTreeSet::new(),
    }
}

/// Flatten a slice of values into one combined string set.
pub fn normalize_all(values: &[Value]) -> BTreeSet<String> {
    values.iter().flat_map(normalize).collect()
}
