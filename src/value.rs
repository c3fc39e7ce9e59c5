use std::collections::HashMap;

use crate::evaluator::{self, AccessError};

/// A decoded document that paths are resolved against.
///
/// Integers and floats are kept apart so that typed access can widen an
/// integer into a float without ever narrowing the other way.
///
/// # Examples
///
/// ```
/// use mapaccess::Value;
/// use std::collections::HashMap;
///
/// let mut friend = HashMap::new();
/// friend.insert("name".to_string(), Value::String("Jaime".to_string()));
///
/// let mut doc = HashMap::new();
/// doc.insert("friends".to_string(), Value::Array(vec![Value::Object(friend)]));
/// let doc = Value::Object(doc);
///
/// let name = doc.get_path("friends[0].name").unwrap();
/// assert_eq!(name, &Value::String("Jaime".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// UTF-8 string
    String(String),

    /// Ordered sequence, addressed by `[index]`
    Array(Vec<Value>),

    /// String-keyed mapping, addressed by `.key`
    Object(HashMap<String, Value>),
}

impl Value {
    /// Human-readable kind name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Resolves `path` against this value. See [`evaluator::get`].
    pub fn get_path(&self, path: &str) -> Result<&Value, AccessError> {
        evaluator::get(self, path)
    }

    /// Get as float, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}
