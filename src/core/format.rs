//! Template interpolation with `{}` and `{name}` markers.
//!
//! Markers follow `{` + optional identifier + `}` where the identifier is
//! letters, digits, `_` and `$`, not starting with a digit. Missing values
//! render as the empty string; no marker survives formatting.

use regex::{Captures, Regex};
use serde_json::{Map, Value};
use std::sync::LazyLock;

static MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{((?:[a-zA-Z_$][0-9a-zA-Z_$]*)?)\}").expect("marker pattern is valid")
});

/// Substitution source for [`format`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormatParams {
    #[default]
    None,
    Positional(Vec<Value>),
    Named(Map<String, Value>),
}

impl FormatParams {
    /// Pick the calling convention from loosely typed arguments: a leading
    /// container selects named lookup, anything else is positional.
    ///
    /// A leading array is keyed by index. Marker names never start with a
    /// digit, so every marker reads a missing key and renders empty.
    pub fn from_args(args: Vec<Value>) -> Self {
        match args.first() {
            None => FormatParams::None,
            Some(Value::Object(map)) => FormatParams::Named(map.clone()),
            Some(Value::Array(items)) => FormatParams::Named(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| (index.to_string(), item.clone()))
                    .collect(),
            ),
            Some(_) => FormatParams::Positional(args),
        }
    }
}

impl From<Vec<Value>> for FormatParams {
    fn from(args: Vec<Value>) -> Self {
        FormatParams::Positional(args)
    }
}

impl From<Map<String, Value>> for FormatParams {
    fn from(params: Map<String, Value>) -> Self {
        FormatParams::Named(params)
    }
}

/// Usage:
/// ```
/// use lodex::FormatParams;
/// use serde_json::json;
///
/// let params = FormatParams::Positional(vec![json!("people"), json!("good plumbers")]);
/// assert_eq!(
///     lodex::format("Other {} are {}", &params),
///     "Other people are good plumbers"
/// );
/// ```
pub fn format(template: &str, params: &FormatParams) -> String {
    match params {
        FormatParams::None => format_positional(template, &[]),
        FormatParams::Positional(args) => format_positional(template, args),
        FormatParams::Named(map) => format_named(template, map),
    }
}

/// Replace markers left to right with successive arguments, whatever their
/// names. Markers past the last argument become empty.
pub fn format_positional(template: &str, args: &[Value]) -> String {
    let mut next = args.iter();
    MARKER_PATTERN
        .replace_all(template, |_: &Captures| {
            next.next().map(render_value).unwrap_or_default()
        })
        .into_owned()
}

/// Replace each `{name}` with `params[name]`, or empty when absent.
pub fn format_named(template: &str, params: &Map<String, Value>) -> String {
    MARKER_PATTERN
        .replace_all(template, |caps: &Captures| {
            params
                .get(&caps[1])
                .map(render_value)
                .unwrap_or_default()
        })
        .into_owned()
}

/// Names of the markers in `template`, in order; `{}` yields an empty name.
pub fn markers(template: &str) -> Vec<&str> {
    MARKER_PATTERN
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Text inserted for a value: strings verbatim, everything else as JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
