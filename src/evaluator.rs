use std::fmt;

use log::{debug, trace};

use crate::{
    ast::Step,
    lexer::LexError,
    parser::{ParseError, Parser},
    value::Value,
};

/// Broad category of an [`AccessError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Grammar,
    NotFound,
    TypeMismatch,
    IndexOutOfBounds,
}

/// Errors that can occur while resolving a path.
///
/// Every error aborts the whole lookup; there are no partial results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Malformed path text
    Lexical(LexError),

    /// Path items in an order the grammar does not allow
    Grammar { message: String, position: usize },

    /// Key absent from the current object
    NotFound { key: String },

    /// The current value has the wrong kind for the step applied to it
    TypeMismatch {
        /// The step (`key` or `[index]`) or the whole path being narrowed
        at: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Index outside `0..len` of the current array
    IndexOutOfBounds { index: usize, len: usize },
}

impl AccessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccessError::Lexical(_) => ErrorKind::Lexical,
            AccessError::Grammar { .. } => ErrorKind::Grammar,
            AccessError::NotFound { .. } => ErrorKind::NotFound,
            AccessError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            AccessError::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
        }
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::Lexical(e) => write!(f, "Lexical error: {}", e),
            AccessError::Grammar { message, position } => {
                write!(f, "Grammar error: {} at position {}", message, position)
            }
            AccessError::NotFound { key } => write!(f, "Key <{}> not found", key),
            AccessError::TypeMismatch {
                at,
                expected,
                found,
            } => write!(f, "Type mismatch at <{}>: expected {}, found {}", at, expected, found),
            AccessError::IndexOutOfBounds { index, len } => {
                write!(f, "Index out of bounds: [{}] on array of length {}", index, len)
            }
        }
    }
}

impl std::error::Error for AccessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AccessError::Lexical(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for AccessError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::Lexical(e) => AccessError::Lexical(e),
            ParseError::Grammar { message, position } => AccessError::Grammar { message, position },
        }
    }
}

/// Resolves `path` against `data` and returns the addressed value.
///
/// Steps are pulled from the parser one at a time and applied with
/// [`step`]; the first failing step aborts the lookup.
///
/// # Examples
///
/// ```
/// use mapaccess::{get, json_to_value, Value};
///
/// let doc = json_to_value(serde_json::json!({ "one": { "two": ["value"] } }));
///
/// assert_eq!(get(&doc, "one.two[0]").unwrap(), &Value::String("value".into()));
/// assert!(get(&doc, "one.two[1]").is_err());
/// ```
pub fn get<'a>(data: &'a Value, path: &str) -> Result<&'a Value, AccessError> {
    let mut current = data;

    for next in Parser::from_path(path) {
        let next = next.map_err(|e| {
            debug!("path {:?} rejected: {}", path, e);
            AccessError::from(e)
        })?;
        if next.is_end() {
            break;
        }
        trace!("applying {} to {}", next, current.type_name());
        current = step(current, &next).inspect_err(|e| debug!("path {:?} failed: {}", path, e))?;
    }

    Ok(current)
}

/// Applies a single access step. `Step::End` leaves the value unchanged.
pub fn step<'a>(current: &'a Value, next: &Step) -> Result<&'a Value, AccessError> {
    match (current, next) {
        (_, Step::End) => Ok(current),
        (Value::Object(map), Step::Field(key)) => map
            .get(key)
            .ok_or_else(|| AccessError::NotFound { key: key.clone() }),
        (Value::Array(arr), Step::Index(index)) => {
            arr.get(*index).ok_or(AccessError::IndexOutOfBounds {
                index: *index,
                len: arr.len(),
            })
        }
        (other, Step::Field(key)) => Err(AccessError::TypeMismatch {
            at: key.clone(),
            expected: "object",
            found: other.type_name(),
        }),
        (other, Step::Index(index)) => Err(AccessError::TypeMismatch {
            at: format!("[{}]", index),
            expected: "array",
            found: other.type_name(),
        }),
    }
}
