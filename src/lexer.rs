use std::fmt;

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::ast::{Item, ItemKind};

/// Error raised while scanning path text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    /// Character offset where scanning stopped
    pub position: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.message, self.position)
    }
}

impl std::error::Error for LexError {}

/// Scanner states. Each state emits at most one item before handing over
/// to the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Identifier,
    AfterIdentifier,
    Dot,
    ArrayIndex,
    AfterArrayIndex,
    Eof,
}

/// Splits a path such as `friends[0].name` into [`Item`]s.
///
/// The lexer is an iterator of `Result<Item, LexError>`. The sequence ends
/// with exactly one `Eof` item or exactly one error; after that it yields
/// `None`.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    start: usize,
    state: Option<State>,
    pending: Option<Result<Item, LexError>>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            start: 0,
            state: Some(State::Start),
            pending: None,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Consumes the current character if `valid` accepts it.
    fn accept(&mut self, valid: impl Fn(char) -> bool) -> bool {
        match self.current_char() {
            Some(ch) if valid(ch) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    fn accept_run(&mut self, valid: impl Fn(char) -> bool) {
        while self.accept(&valid) {}
    }

    fn emit(&mut self, kind: ItemKind) {
        let text: String = self.input[self.start..self.position].iter().collect();
        debug_assert!(self.pending.is_none());
        self.pending = Some(Ok(Item::new(kind, text, self.start)));
        self.start = self.position;
    }

    fn error(&mut self, message: &str) -> Option<State> {
        debug_assert!(self.pending.is_none());
        self.pending = Some(Err(LexError {
            message: message.to_string(),
            position: self.position,
        }));
        None
    }

    fn run(&mut self, state: State) -> Option<State> {
        match state {
            State::Start => self.lex_start(),
            State::Identifier => self.lex_identifier(),
            State::AfterIdentifier => self.lex_after_identifier(),
            State::Dot => self.lex_dot(),
            State::ArrayIndex => self.lex_array_index(),
            State::AfterArrayIndex => self.lex_after_array_index(),
            State::Eof => self.lex_eof(),
        }
    }

    fn lex_start(&mut self) -> Option<State> {
        match self.current_char() {
            Some('[') => Some(State::ArrayIndex),
            _ => Some(State::Identifier),
        }
    }

    fn lex_identifier(&mut self) -> Option<State> {
        self.accept_run(is_identifier_char);

        if self.position == self.start {
            if self.current_char().is_some() {
                return self.error("expected identifier");
            }
            // Empty path, or a trailing dot.
            self.emit(ItemKind::Eof);
            return None;
        }

        self.emit(ItemKind::Identifier);
        Some(State::AfterIdentifier)
    }

    fn lex_after_identifier(&mut self) -> Option<State> {
        match self.current_char() {
            Some('.') => Some(State::Dot),
            Some('[') => Some(State::ArrayIndex),
            None => {
                self.emit(ItemKind::Eof);
                None
            }
            Some(_) => self.error("expected <.> or <array index>"),
        }
    }

    fn lex_dot(&mut self) -> Option<State> {
        if !self.accept(|ch| ch == '.') {
            return self.error("bad character");
        }
        self.emit(ItemKind::Dot);
        match self.current_char() {
            Some('[') => Some(State::ArrayIndex),
            _ => Some(State::Identifier),
        }
    }

    /// Scans `[` digit+ `]`.
    fn lex_array_index(&mut self) -> Option<State> {
        if !self.accept(|ch| ch == '[') {
            return self.error("missing opening bracket [ at array index <[]>");
        }
        if !self.accept(|ch| ch.is_ascii_digit()) {
            return self.error("missing digits in array index <[]>");
        }
        self.accept_run(|ch| ch.is_ascii_digit());
        if !self.accept(|ch| ch == ']') {
            return self.error("missing closing bracket ] at array index <[]>");
        }
        self.emit(ItemKind::ArrayIndex);
        Some(State::AfterArrayIndex)
    }

    fn lex_after_array_index(&mut self) -> Option<State> {
        match self.current_char() {
            Some('.') => Some(State::Dot),
            Some('[') => Some(State::ArrayIndex),
            _ => Some(State::Eof),
        }
    }

    /// Either the input ends here, or the character is swallowed and
    /// scanning continues as an identifier. The parser rejects the result.
    fn lex_eof(&mut self) -> Option<State> {
        if self.current_char().is_none() {
            self.emit(ItemKind::Eof);
            return None;
        }
        self.advance();
        Some(State::Identifier)
    }
}

impl Iterator for Lexer {
    type Item = Result<Item, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.pending.take() {
                return Some(item);
            }
            let state = self.state.take()?;
            self.state = self.run(state);
        }
    }
}

/// Letters (`L*`), decimal digits (`Nd`), `_` and `-`. Other numerics such
/// as `²`, `½` or `Ⅻ` are not identifier characters.
fn is_identifier_char(ch: char) -> bool {
    if ch == '_' || ch == '-' {
        return true;
    }
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

#[test]
fn test_identifier_chain() {
    let kinds: Vec<ItemKind> = Lexer::new("a.b[0]")
        .map(|item| item.unwrap().kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ItemKind::Identifier,
            ItemKind::Dot,
            ItemKind::Identifier,
            ItemKind::ArrayIndex,
            ItemKind::Eof,
        ]
    );
}

#[test]
fn test_positions() {
    let positions: Vec<usize> = Lexer::new("ab[12].c")
        .map(|item| item.unwrap().position)
        .collect();
    assert_eq!(positions, vec![0, 2, 6, 7, 8]);
}

#[test]
fn test_exhausted_after_error() {
    let mut lexer = Lexer::new(" x");
    assert!(lexer.next().unwrap().is_err());
    assert!(lexer.next().is_none());
}
