//! Property extraction across sequences, with dotted-path support.

use serde_json::Value;

pub const PATH_SEPARATOR: char = '.';

/// Pluck `path` from every element of `sequence`.
///
/// A path without separators reads one key; a dotted path plucks each segment
/// in turn from the previous stage's results. Missing keys, non-container
/// elements and array indexes out of range yield `None`, so the result always
/// has one entry per input element.
///
/// Usage:
/// ```
/// use serde_json::json;
///
/// let base = vec![json!({"p": {"c": 1}}), json!({"p": {"c": 2}})];
/// let plucked = lodex::pluck(&base, "p.c");
///
/// assert_eq!(plucked, vec![Some(&json!(1)), Some(&json!(2))]);
/// ```
pub fn pluck<'a>(sequence: &'a [Value], path: &str) -> Vec<Option<&'a Value>> {
    pluck_with(sequence, path, PATH_SEPARATOR)
}

pub fn pluck_with<'a>(
    sequence: &'a [Value],
    path: &str,
    separator: char,
) -> Vec<Option<&'a Value>> {
    if !path.contains(separator) {
        return sequence.iter().map(|element| lookup(element, path)).collect();
    }

    let mut stage: Vec<Option<&'a Value>> = sequence.iter().map(Some).collect();
    for segment in path.split(separator) {
        stage = stage
            .into_iter()
            .map(|element| element.and_then(|value| lookup(value, segment)))
            .collect();
    }
    stage
}

/// Owned variant of [`pluck`]; missing entries become `Value::Null`.
pub fn pluck_values(sequence: &[Value], path: &str) -> Vec<Value> {
    pluck_values_with(sequence, path, PATH_SEPARATOR)
}

pub fn pluck_values_with(sequence: &[Value], path: &str, separator: char) -> Vec<Value> {
    pluck_with(sequence, path, separator)
        .into_iter()
        .map(|found| found.cloned().unwrap_or(Value::Null))
        .collect()
}

/// Resolve a separator-delimited path inside a single value.
pub fn lookup_path<'a>(value: &'a Value, path: &str, separator: char) -> Option<&'a Value> {
    path.split(separator)
        .try_fold(value, |current, segment| lookup(current, segment))
}

fn lookup<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plucks_top_level_key() {
        let base = vec![json!({"a": 1}), json!({"a": 2})];
        assert_eq!(pluck_values(&base, "a"), vec![json!(1), json!(2)]);
    }

    #[test]
    fn plucks_nested_path() {
        let base = vec![json!({"p": {"c": 1}}), json!({"p": {"c": 2}})];
        assert_eq!(pluck_values(&base, "p.c"), vec![json!(1), json!(2)]);
    }

    #[test]
    fn missing_keys_keep_their_slot() {
        let base = vec![
            json!({"p": {"c": 1}}),
            json!({"p": {}}),
            json!({"q": 1}),
            json!(7),
        ];

        assert_eq!(
            pluck(&base, "p.c"),
            vec![Some(&json!(1)), None, None, None]
        );
    }

    #[test]
    fn numeric_segments_index_arrays() {
        let base = vec![json!({"tags": ["x", "y"]}), json!({"tags": ["z"]})];
        assert_eq!(pluck_values(&base, "tags.1"), vec![json!("y"), Value::Null]);
    }

    #[test]
    fn custom_separator() {
        let base = vec![json!({"a": {"b": true}})];
        assert_eq!(pluck_with(&base, "a/b", '/'), vec![Some(&json!(true))]);
        assert_eq!(pluck_with(&base, "a.b", '/'), vec![None]);
    }

    #[test]
    fn key_containing_no_separator_is_read_verbatim() {
        let base = vec![json!({"": "empty"})];
        assert_eq!(pluck(&base, ""), vec![Some(&json!("empty"))]);
    }

    #[test]
    fn lookup_path_walks_objects_and_arrays() {
        let value = json!({"a": [{"b": 3}]});
        assert_eq!(lookup_path(&value, "a.0.b", '.'), Some(&json!(3)));
        assert_eq!(lookup_path(&value, "a.1.b", '.'), None);
    }
}
