use std::fmt;

/// One resolved unit of traversal produced by the [`Parser`](crate::parser::Parser).
///
/// Errors are not a step kind: the parser yields `Result<Step, ParseError>`
/// and stops after the first `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Look up a key in an object
    ///
    /// # Examples
    /// ```text
    /// friends      -> Field("friends")
    /// a.b          -> Field("a"), Field("b")
    /// ```
    Field(String),

    /// Take an element of an array, brackets stripped
    ///
    /// # Examples
    /// ```text
    /// [0]          -> Index(0)
    /// friends[2]   -> Field("friends"), Index(2)
    /// ```
    Index(usize),

    /// The path is fully consumed
    End,
}

impl Step {
    pub fn is_end(&self) -> bool {
        matches!(self, Step::End)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Field(key) => write!(f, "{}", key),
            Step::Index(index) => write!(f, "[{}]", index),
            Step::End => write!(f, "<end>"),
        }
    }
}
