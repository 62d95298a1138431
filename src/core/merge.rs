//! Deep, non-mutating merge of JSON records.
//!
//! Objects merge key by key, arrays merge index by index, scalars overwrite.
//! A container in the source replaces a differently shaped destination slot
//! with an empty container of its own shape before merging into it. That
//! holds at the top level too: an array `dest` over an object `src` yields
//! the array, not an object with index keys.

use serde_json::{Map, Value};

/// Merge `dest` over a deep copy of `src`, leaving both inputs untouched.
///
/// Usage:
/// ```
/// use serde_json::json;
///
/// let src = json!({"a": 1, "b": 2});
/// let dest = json!({"c": 3, "d": 4});
/// let merged = lodex::immutable_merge(&src, &dest);
///
/// assert_eq!(merged, json!({"a": 1, "b": 2, "c": 3, "d": 4}));
/// assert_eq!(src, json!({"a": 1, "b": 2}));
/// ```
pub fn immutable_merge(src: &Value, dest: &Value) -> Value {
    let mut merged = if is_container(src) {
        src.clone()
    } else {
        Value::Object(Map::new())
    };

    merge_into(&mut merged, dest);
    merged
}

/// Merge `source` into `target` in place.
///
/// A non-container `source` contributes nothing at the top level; below the
/// top level scalars (including `null`) overwrite whatever they land on.
pub fn merge_into(target: &mut Value, source: &Value) {
    match source {
        Value::Object(source_map) => {
            if !target.is_object() {
                *target = Value::Object(Map::new());
            }
            if let Value::Object(target_map) = target {
                for (key, value) in source_map {
                    match target_map.get_mut(key) {
                        Some(slot) => merge_slot(slot, value),
                        None => {
                            target_map.insert(key.clone(), value.clone());
                        }
                    }
                }
            }
        }
        Value::Array(source_items) => {
            if !target.is_array() {
                *target = Value::Array(Vec::with_capacity(source_items.len()));
            }
            if let Value::Array(target_items) = target {
                for (index, value) in source_items.iter().enumerate() {
                    match target_items.get_mut(index) {
                        Some(slot) => merge_slot(slot, value),
                        None => target_items.push(value.clone()),
                    }
                }
            }
        }
        _ => {}
    }
}

fn merge_slot(slot: &mut Value, value: &Value) {
    if is_container(value) {
        merge_into(slot, value);
    } else {
        *slot = value.clone();
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merges_disjoint_keys() {
        let merged = immutable_merge(&json!({"a": 1}), &json!({"b": 2}));
        assert_eq!(merged, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn dest_overrides_scalars() {
        let merged = immutable_merge(&json!({"a": 1, "b": "x"}), &json!({"b": "y"}));
        assert_eq!(merged, json!({"a": 1, "b": "y"}));
    }

    #[test]
    fn nested_objects_merge_recursively() {
        let src = json!({"db": {"host": "localhost", "port": 5432}});
        let dest = json!({"db": {"port": 6543, "user": "app"}});

        let merged = immutable_merge(&src, &dest);

        assert_eq!(
            merged,
            json!({"db": {"host": "localhost", "port": 6543, "user": "app"}})
        );
    }

    #[test]
    fn arrays_merge_by_index_not_concatenation() {
        let src = json!({"list": [1, 2, 3]});
        let dest = json!({"list": [9]});

        assert_eq!(immutable_merge(&src, &dest), json!({"list": [9, 2, 3]}));
    }

    #[test]
    fn longer_dest_array_extends() {
        let merged = immutable_merge(&json!({"l": [1]}), &json!({"l": [7, 8, 9]}));
        assert_eq!(merged, json!({"l": [7, 8, 9]}));
    }

    #[test]
    fn objects_inside_arrays_merge_recursively() {
        let src = json!({"items": [{"id": 1, "tags": ["a"]}]});
        let dest = json!({"items": [{"name": "first"}]});

        assert_eq!(
            immutable_merge(&src, &dest),
            json!({"items": [{"id": 1, "tags": ["a"], "name": "first"}]})
        );
    }

    #[test]
    fn container_replaces_differently_shaped_slot() {
        let src = json!({"a": 5, "b": {"x": 1}});
        let dest = json!({"a": {"k": true}, "b": [1]});

        assert_eq!(
            immutable_merge(&src, &dest),
            json!({"a": {"k": true}, "b": [1]})
        );
    }

    #[test]
    fn top_level_shape_mismatch_takes_dest_shape() {
        assert_eq!(immutable_merge(&json!({"a": 1}), &json!([5])), json!([5]));
        assert_eq!(immutable_merge(&json!([1, 2]), &json!({"a": 1})), json!({"a": 1}));
    }

    #[test]
    fn null_overwrites() {
        let merged = immutable_merge(&json!({"a": {"b": 1}}), &json!({"a": null}));
        assert_eq!(merged, json!({"a": null}));
    }

    #[test]
    fn inputs_are_not_mutated() {
        let src = json!({"a": {"b": [1, 2]}});
        let dest = json!({"a": {"b": [3], "c": 4}});
        let src_before = src.clone();
        let dest_before = dest.clone();

        let _ = immutable_merge(&src, &dest);

        assert_eq!(src, src_before);
        assert_eq!(dest, dest_before);
    }

    #[test]
    fn scalar_src_is_treated_as_empty_object() {
        assert_eq!(immutable_merge(&json!(5), &json!({"a": 1})), json!({"a": 1}));
    }

    #[test]
    fn scalar_dest_contributes_nothing() {
        assert_eq!(immutable_merge(&json!({"a": 1}), &json!("x")), json!({"a": 1}));
    }

    #[test]
    fn merge_into_updates_target_in_place() {
        let mut target = json!({"a": {"b": 1}});
        merge_into(&mut target, &json!({"a": {"c": 2}}));
        assert_eq!(target, json!({"a": {"b": 1, "c": 2}}));
    }
}
