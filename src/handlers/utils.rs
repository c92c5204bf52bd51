// handlers/utils.rs - Shared JSON body field helpers
//
// Bodies arrive as raw `Json<Value>` so a missing field turns into a 400
// naming that field, rather than a deserialization rejection.

use serde_json::Value;

use crate::error::ApiError;

/// Required non-empty string field. An empty string counts as missing.
pub fn require_str(body: &Value, field: &str) -> Result<String, ApiError> {
    match body.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(missing(field)),
    }
}

pub fn require_f64(body: &Value, field: &str) -> Result<f64, ApiError> {
    body.get(field).and_then(Value::as_f64).ok_or_else(|| missing(field))
}

pub fn require_i64(body: &Value, field: &str) -> Result<i64, ApiError> {
    body.get(field).and_then(Value::as_i64).ok_or_else(|| missing(field))
}

pub fn optional_str(body: &Value, field: &str) -> Option<String> {
    body.get(field).and_then(Value::as_str).map(str::to_string)
}

pub fn optional_i64(body: &Value, field: &str) -> Option<i64> {
    body.get(field).and_then(Value::as_i64)
}

pub fn optional_bool(body: &Value, field: &str) -> Option<bool> {
    body.get(field).and_then(Value::as_bool)
}

fn missing(field: &str) -> ApiError {
    ApiError::validation(format!("{} is required", field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn require_str_accepts_non_empty_strings_only() {
        let body = json!({"name": "Leia", "empty": "", "number": 7});

        assert_eq!(require_str(&body, "name").unwrap(), "Leia");
        assert!(require_str(&body, "empty").is_err());
        assert!(require_str(&body, "number").is_err());
        assert!(require_str(&body, "absent").is_err());
    }

    #[test]
    fn require_f64_reads_integers_and_floats() {
        let body = json!({"mass": 77, "height": 1.72, "name": "Leia"});

        assert_eq!(require_f64(&body, "mass").unwrap(), 77.0);
        assert_eq!(require_f64(&body, "height").unwrap(), 1.72);
        assert!(require_f64(&body, "name").is_err());
    }

    #[test]
    fn missing_field_error_names_the_field() {
        let err = require_i64(&json!({}), "user_id").unwrap_err();
        assert_eq!(err.message(), "user_id is required");
    }

    #[test]
    fn optional_helpers_return_none_for_absent_or_mistyped() {
        let body = json!({"country": "Alderaan", "birth_date": "text"});

        assert_eq!(optional_str(&body, "country").as_deref(), Some("Alderaan"));
        assert_eq!(optional_str(&body, "absent"), None);
        assert_eq!(optional_i64(&body, "birth_date"), None);
        assert_eq!(optional_bool(&body, "is_active"), None);
    }
}
