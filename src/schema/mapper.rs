//! Leaf type mapping

use super::types::FieldType;
use crate::types::NumberPolicy;
use serde_json::{Number, Value};

/// Map a JSON value to the type of the field that will hold it.
///
/// Objects and arrays of objects are expanded by the synthesizer; the mapper
/// only decides leaf and array element types, so it never fails.
pub fn map_type(value: &Value, policy: NumberPolicy) -> FieldType {
    match value {
        Value::Bool(_) => FieldType::Bool,
        Value::Number(n) => map_number(n, policy),
        Value::Array(_) => FieldType::array_of(FieldType::Any),
        Value::Object(_) => FieldType::Any,
        Value::String(_) => FieldType::String,
        Value::Null => FieldType::nullable(FieldType::String),
    }
}

fn map_number(n: &Number, policy: NumberPolicy) -> FieldType {
    match policy {
        NumberPolicy::Integer => FieldType::Integer,
        NumberPolicy::Infer if n.is_i64() || n.is_u64() => FieldType::Integer,
        NumberPolicy::Infer => FieldType::Float,
    }
}

/// Short name of a value's JSON kind, used in error messages and events
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!(true), FieldType::Bool ; "boolean")]
    #[test_case(json!(30), FieldType::Integer ; "integer")]
    #[test_case(json!(4.5), FieldType::Integer ; "fraction collapses to integer")]
    #[test_case(json!("x"), FieldType::String ; "string")]
    #[test_case(json!(null), FieldType::nullable(FieldType::String) ; "null")]
    #[test_case(json!([1, 2]), FieldType::array_of(FieldType::Any) ; "nested array")]
    #[test_case(json!({"a": 1}), FieldType::Any ; "object")]
    fn test_map_type_integer_policy(value: Value, expected: FieldType) {
        assert_eq!(map_type(&value, NumberPolicy::Integer), expected);
    }

    #[test_case(json!(30), FieldType::Integer ; "integer")]
    #[test_case(json!(-7), FieldType::Integer ; "negative integer")]
    #[test_case(json!(u64::MAX), FieldType::Integer ; "large unsigned")]
    #[test_case(json!(4.5), FieldType::Float ; "fraction")]
    fn test_map_type_infer_policy(value: Value, expected: FieldType) {
        assert_eq!(map_type(&value, NumberPolicy::Infer), expected);
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(kind_name(&json!([])), "array");
        assert_eq!(kind_name(&json!({})), "object");
        assert_eq!(kind_name(&json!(null)), "null");
        assert_eq!(kind_name(&json!(1.5)), "number");
    }
}
