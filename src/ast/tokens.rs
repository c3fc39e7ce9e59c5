/// Kind of a lexical item produced by the [`Lexer`](crate::lexer::Lexer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Run of letters, digits, `_` or `-`
    ///
    /// # Examples
    /// ```text
    /// friends
    /// some6key9
    /// first-name
    /// ```
    Identifier,

    /// Bracketed decimal index, brackets included in the text
    ///
    /// # Examples
    /// ```text
    /// [0]
    /// [12]
    /// ```
    ArrayIndex,

    /// Field separator `.`
    Dot,

    /// End of the path text
    Eof,
}

/// A lexical item: its kind, the exact text consumed for it and the
/// character offset where that text starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub text: String,
    pub position: usize,
}

impl Item {
    pub fn new(kind: ItemKind, text: impl Into<String>, position: usize) -> Self {
        Item {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn is(&self, kind: ItemKind) -> bool {
        self.kind == kind
    }
}
