//! serde_json <-> Value conversion.
//!
//! Decoding the document is left to serde_json; this module only moves the
//! decoded tree into the [`Value`] model and back.
//!
//! # Numbers
//!
//! JSON numbers that fit an `i64` become [`Value::Integer`]. Anything else
//! becomes [`Value::Float`], including whole numbers above `i64::MAX`
//! (up to `u64::MAX`). Such a value reads as a float: `get_as::<i64>` on it
//! is a type mismatch rather than a silently wrapped integer, and it is
//! written back as a float. Floats with no JSON form (NaN, infinities) are
//! written back as `null`.

use crate::Value;

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match v {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Boolean(b),
            Json::Number(n) => from_number(&n),
            Json::String(s) => Value::String(s),
            Json::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            Json::Object(obj) => Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect()),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(v: &Value) -> Self {
        use serde_json::Value as Json;

        match v {
            Value::Null => Json::Null,
            Value::Boolean(b) => Json::Bool(*b),
            Value::Integer(i) => Json::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f).map_or(Json::Null, Json::Number),
            Value::String(s) => Json::String(s.clone()),
            Value::Array(arr) => Json::Array(arr.iter().map(Json::from).collect()),
            Value::Object(obj) => Json::Object(obj.iter().map(|(k, v)| (k.clone(), Json::from(v))).collect()),
        }
    }
}

fn from_number(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::Integer(i);
    }
    // Without serde_json's arbitrary_precision every number has an f64 form.
    n.as_f64().map_or(Value::Null, Value::Float)
}

/// Moves a decoded serde_json tree into a [`Value`].
pub fn json_to_value(v: serde_json::Value) -> Value {
    Value::from(v)
}

/// Copies a [`Value`] out into a serde_json tree, e.g. for printing.
pub fn value_to_json(v: &Value) -> serde_json::Value {
    serde_json::Value::from(v)
}

/// Decodes a JSON document straight into a [`Value`].
pub fn from_json_str(input: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str::<serde_json::Value>(input).map(Value::from)
}
