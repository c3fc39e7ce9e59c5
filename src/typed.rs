//! Typed access on top of [`get`](crate::evaluator::get).
//!
//! [`get_as`] resolves a path and then narrows the result to a Rust type.
//! The only coercion allowed is between numbers: integers are accepted
//! where a float is asked for, and both integers and floats are accepted
//! where a [`Decimal`] is asked for. Floats never narrow to integers.
//! Anything else that does not match exactly is a `TypeMismatch`.

use std::collections::HashMap;

use rust_decimal::{Decimal, prelude::FromPrimitive};

use crate::{
    evaluator::{AccessError, get},
    value::Value,
};

/// Types a resolved [`Value`] can be narrowed into.
pub trait FromValue: Sized {
    /// Kind name reported when narrowing fails
    const EXPECTED: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for Value {
    const EXPECTED: &'static str = "any";

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromValue for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }
}

impl FromValue for f64 {
    const EXPECTED: &'static str = "float";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_float()
    }
}

/// Integers convert exactly. Floats convert to the nearest `Decimal`
/// (`19.5` reads as `19.5`); NaN, infinities and floats outside the
/// `Decimal` range are a type mismatch.
impl FromValue for Decimal {
    const EXPECTED: &'static str = "decimal";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(n) => Some(Decimal::from(*n)),
            Value::Float(n) => Decimal::from_f64(*n),
            _ => None,
        }
    }
}

impl FromValue for String {
    const EXPECTED: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromValue for Vec<Value> {
    const EXPECTED: &'static str = "array";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(arr) => Some(arr.clone()),
            _ => None,
        }
    }
}

impl FromValue for HashMap<String, Value> {
    const EXPECTED: &'static str = "object";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(map.clone()),
            _ => None,
        }
    }
}

/// `null` narrows to `None`; any other value must narrow to `T`.
impl<T: FromValue> FromValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

/// Resolves `path` against `data` and narrows the result to `T`.
///
/// # Examples
///
/// ```
/// use mapaccess::{get_as, json_to_value};
///
/// let doc = json_to_value(serde_json::json!({ "price": 12, "name": "pen" }));
///
/// assert_eq!(get_as::<f64>(&doc, "price").unwrap(), 12.0);
/// assert_eq!(get_as::<String>(&doc, "name").unwrap(), "pen");
/// assert!(get_as::<bool>(&doc, "name").is_err());
/// ```
pub fn get_as<T: FromValue>(data: &Value, path: &str) -> Result<T, AccessError> {
    let value = get(data, path)?;
    T::from_value(value).ok_or_else(|| AccessError::TypeMismatch {
        at: path.to_string(),
        expected: T::EXPECTED,
        found: value.type_name(),
    })
}
