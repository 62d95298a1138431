//! Element predicates for sequence operations.
//!
//! A record used as a predicate matches partially: every key it names must
//! deep-equal the element's value at that key. Closures and property matchers
//! cover the remaining cases.

use serde_json::{Map, Number, Value};

use crate::core::pluck::{lookup_path, PATH_SEPARATOR};

pub trait Predicate {
    fn test(&self, element: &Value) -> bool;
}

impl Predicate for Map<String, Value> {
    fn test(&self, element: &Value) -> bool {
        is_match(element, self)
    }
}

/// Objects match partially; any other value must deep-equal the element.
impl Predicate for Value {
    fn test(&self, element: &Value) -> bool {
        match self {
            Value::Object(partial) => is_match(element, partial),
            other => values_equal(element, other),
        }
    }
}

impl<F> Predicate for F
where
    F: Fn(&Value) -> bool,
{
    fn test(&self, element: &Value) -> bool {
        self(element)
    }
}

/// Matches elements whose value at a dotted `path` deep-equals `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchesProperty {
    path: String,
    value: Value,
}

impl MatchesProperty {
    pub fn new(path: impl Into<String>, value: Value) -> Self {
        Self {
            path: path.into(),
            value,
        }
    }
}

impl Predicate for MatchesProperty {
    fn test(&self, element: &Value) -> bool {
        lookup_path(element, &self.path, PATH_SEPARATOR)
            .is_some_and(|found| values_equal(found, &self.value))
    }
}

/// True when `element` is an object holding every key of `partial` with a
/// deep-equal value.
pub fn is_match(element: &Value, partial: &Map<String, Value>) -> bool {
    let Value::Object(map) = element else {
        return false;
    };

    partial.iter().all(|(key, expected)| {
        map.get(key)
            .is_some_and(|actual| values_equal(actual, expected))
    })
}

/// Structural equality where numbers compare by numeric value, so `1`
/// equals `1.0`.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| values_equal(x, y)))
        }
        _ => left == right,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if a == b {
        return true;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
