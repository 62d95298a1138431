//! Chainable wrapper exposing the helpers as methods on an owned value.
//! `uuid()` takes no input and stays a free function.
//!
//! Usage:
//! ```
//! use serde_json::json;
//!
//! let ids = lodex::chain(json!([{"id": 1}, {"id": 2}]))
//!     .upsert(&json!({"id": 1}), json!({"id": 3}))
//!     .pluck("id")
//!     .into_value();
//!
//! assert_eq!(ids, json!([2, 3]));
//! ```

use serde_json::Value;

use crate::core::format::{self, render_value, FormatParams};
use crate::core::matcher::Predicate;
use crate::core::merge::merge_into;
use crate::core::ordinal;
use crate::core::pluck::{pluck_values_with, PATH_SEPARATOR};
use crate::core::uid;
use crate::core::upsert;

#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    value: Value,
    separator: char,
}

pub fn chain(value: Value) -> Chain {
    Chain::new(value)
}

impl Chain {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            separator: PATH_SEPARATOR,
        }
    }

    /// Use `separator` for subsequent [`Chain::pluck`] paths.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Deep-merge `dest` over the wrapped value. The wrapped value is owned,
    /// so this merges in place without the extra copy.
    pub fn merge(mut self, dest: &Value) -> Self {
        if !matches!(self.value, Value::Object(_) | Value::Array(_)) {
            self.value = Value::Object(serde_json::Map::new());
        }
        merge_into(&mut self.value, dest);
        self
    }

    pub fn upsert<P>(self, predicate: &P, replacement: Value) -> Self
    where
        P: Predicate + ?Sized,
    {
        let items = upsert::upsert(self.items(), predicate, replacement);
        self.replace(Value::Array(items))
    }

    pub fn reject<P>(self, predicate: &P) -> Self
    where
        P: Predicate + ?Sized,
    {
        let items = upsert::reject(self.items(), predicate);
        self.replace(Value::Array(items))
    }

    pub fn pluck(self, path: &str) -> Self {
        let items = pluck_values_with(self.items(), path, self.separator);
        self.replace(Value::Array(items))
    }

    /// Use the wrapped value as a template. Non-string values are rendered
    /// the same way a template argument would be.
    pub fn format(self, params: &FormatParams) -> Self {
        let formatted = match &self.value {
            Value::String(template) => format::format(template, params),
            other => format::format(&render_value(other), params),
        };
        self.replace(Value::String(formatted))
    }

    /// Replace a number with its ordinal suffix. Non-numbers yield `"th"`.
    pub fn ordinal(self) -> Self {
        let number = self.value.as_f64().unwrap_or(f64::NAN);
        self.replace(Value::String(ordinal::ordinal(number).to_string()))
    }

    pub fn is_uuid(self) -> Self {
        let valid = self.value.as_str().is_some_and(uid::is_uuid);
        self.replace(Value::Bool(valid))
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Non-array values behave as empty sequences.
    fn items(&self) -> &[Value] {
        match &self.value {
            Value::Array(items) => items,
            _ => &[],
        }
    }

    fn replace(self, value: Value) -> Self {
        Self { value, ..self }
    }
}

impl From<Value> for Chain {
    fn from(value: Value) -> Self {
        Chain::new(value)
    }
}
