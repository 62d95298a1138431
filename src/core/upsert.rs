use serde_json::Value;

use crate::core::matcher::Predicate;

/// Elements of `base` that do not satisfy `predicate`, in their original order.
pub fn reject<P>(base: &[Value], predicate: &P) -> Vec<Value>
where
    P: Predicate + ?Sized,
{
    base.iter()
        .filter(|element| !predicate.test(element))
        .cloned()
        .collect()
}

/// Drop every element matching `predicate`, then append `replacement`.
///
/// Every match is removed, not only the first, so several matching elements
/// collapse into the single replacement. With no match this is an append.
///
/// Usage:
/// ```
/// use serde_json::json;
///
/// let base = vec![json!({"id": 1, "data": 2}), json!({"id": 2, "data": 3})];
/// let result = lodex::upsert(&base, &json!({"id": 1}), json!({"id": 1, "data": 5}));
///
/// assert_eq!(result, vec![json!({"id": 2, "data": 3}), json!({"id": 1, "data": 5})]);
/// ```
pub fn upsert<P>(base: &[Value], predicate: &P, replacement: Value) -> Vec<Value>
where
    P: Predicate + ?Sized,
{
    let mut kept = reject(base, predicate);
    kept.push(replacement);
    kept
}
