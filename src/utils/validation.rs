//! Input validation primitives.
//!
//! Ergonomic helpers for the shapes the CLI accepts:
//! - Requiring JSON records and sequences
//! - Requiring counts within bounds
//!
//! These replace verbose ok_or_else + Error::validation_invalid_argument chains.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::json::value_type_name;

/// Require a JSON value to be an object.
pub fn require_object<'a>(value: &'a Value, field: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        Error::validation_invalid_argument(
            field,
            format!("Expected a JSON object, got {}", value_type_name(value)),
            None,
            None,
        )
    })
}

/// Require a JSON value to be an array.
pub fn require_array<'a>(value: &'a Value, field: &str) -> Result<&'a [Value]> {
    value.as_array().map(Vec::as_slice).ok_or_else(|| {
        Error::validation_invalid_argument(
            field,
            format!("Expected a JSON array, got {}", value_type_name(value)),
            None,
            None,
        )
    })
}

/// Require a count to be at least one.
pub fn require_positive(value: usize, field: &str) -> Result<usize> {
    if value == 0 {
        Err(Error::validation_invalid_argument(
            field,
            "Must be at least 1",
            Some(value.to_string()),
            None,
        ))
    } else {
        Ok(value)
    }
}

/// Require a count to be no larger than `max`.
pub fn require_at_most(value: usize, max: usize, field: &str) -> Result<usize> {
    if value > max {
        Err(Error::validation_invalid_argument(
            field,
            format!("Must be at most {}", max),
            Some(value.to_string()),
            None,
        ))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn require_object_accepts_records() {
        let value = json!({"a": 1});
        assert_eq!(require_object(&value, "match").unwrap().len(), 1);
    }

    #[test]
    fn require_array_reports_actual_type() {
        let err = require_array(&json!({"a": 1}), "base").unwrap_err();

        assert_eq!(err.details["field"], "base");
        assert_eq!(err.details["problem"], "Expected a JSON array, got object");
    }

    #[test]
    fn require_object_rejects_arrays() {
        assert!(require_object(&json!([]), "match").is_err());
    }

    #[test]
    fn require_positive_rejects_zero() {
        assert!(require_positive(0, "count").is_err());
        assert_eq!(require_positive(3, "count").unwrap(), 3);
    }

    #[test]
    fn require_at_most_rejects_values_over_the_limit() {
        assert_eq!(require_at_most(10, 10, "count").unwrap(), 10);

        let err = require_at_most(11, 10, "count").unwrap_err();
        assert_eq!(err.details["problem"], "Must be at most 10");
        assert_eq!(err.details["value"], "11");
    }
}
