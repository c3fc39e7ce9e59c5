use std::fmt;

use crate::{
    ast::{Item, ItemKind, Step},
    lexer::{LexError, Lexer},
};

/// Errors surfaced while turning a path into access steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The scanner rejected the path text; passed through unchanged
    Lexical(LexError),

    /// The items are well formed but violate the path grammar
    Grammar { message: String, position: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lexical(e) => write!(f, "Lexical error: {}", e),
            ParseError::Grammar { message, position } => {
                write!(f, "Grammar error: {} at position {}", message, position)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lexical(e) => Some(e),
            ParseError::Grammar { .. } => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lexical(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Identifier,
    AfterIdentifier,
    Dot,
    ArrayIndex,
    AfterArrayIndex,
}

/// Builds access [`Step`]s from the lexer's items, enforcing
///
/// ```text
/// path        = [ segment ] { ('.' segment) | indexSuffix } [ '.' ]
/// segment     = identifier { indexSuffix }
/// indexSuffix = '[' digit+ ']'
/// ```
///
/// Yields `Ok(Step::End)` or a single `Err` last, then `None`.
pub struct Parser<I = Lexer> {
    items: I,
    /// One item of lookahead, filled on peek and drained on the next pull
    buf: Option<Item>,
    /// Character offset just past the last item pulled
    offset: usize,
    state: Option<State>,
    pending: Option<Result<Step, ParseError>>,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser::from_items(lexer)
    }

    /// Shorthand for `Parser::new(Lexer::new(path))`.
    pub fn from_path(path: &str) -> Self {
        Parser::new(Lexer::new(path))
    }
}

impl<I> Parser<I>
where
    I: Iterator<Item = Result<Item, LexError>>,
{
    /// Builds steps from any item stream, not only a [`Lexer`].
    pub(crate) fn from_items(items: I) -> Self {
        Parser {
            items,
            buf: None,
            offset: 0,
            state: Some(State::Start),
            pending: None,
        }
    }

    /// Collects every step up to and including `Step::End`.
    pub fn collect_steps(self) -> Result<Vec<Step>, ParseError> {
        self.collect()
    }

    /// Returns the buffered item or pulls the next one from the lexer.
    fn next_item(&mut self) -> Result<Item, ParseError> {
        if let Some(item) = self.buf.take() {
            return Ok(item);
        }
        match self.items.next() {
            Some(item) => {
                let item = item?;
                self.offset = item.position + item.text.chars().count();
                Ok(item)
            }
            // A well-formed item stream ends with Eof or an error first.
            None => Err(ParseError::Grammar {
                message: "item stream ended without end of input".to_string(),
                position: self.offset,
            }),
        }
    }

    /// Looks at the next item without consuming it.
    fn peek_item(&mut self) -> Result<(ItemKind, usize), ParseError> {
        let item = self.next_item()?;
        let item = self.buf.insert(item);
        Ok((item.kind, item.position))
    }

    fn emit(&mut self, step: Step) {
        debug_assert!(self.pending.is_none());
        self.pending = Some(Ok(step));
    }

    fn end(&mut self) -> Option<State> {
        self.emit(Step::End);
        None
    }

    fn fail(&mut self, error: ParseError) -> Option<State> {
        debug_assert!(self.pending.is_none());
        self.pending = Some(Err(error));
        None
    }

    fn grammar_error(&mut self, message: &str, position: usize) -> Option<State> {
        self.fail(ParseError::Grammar {
            message: message.to_string(),
            position,
        })
    }

    fn run(&mut self, state: State) -> Option<State> {
        match state {
            State::Start => self.parse_start(),
            State::Identifier => self.parse_identifier(),
            State::AfterIdentifier => self.parse_after_identifier(),
            State::Dot => self.parse_dot(),
            State::ArrayIndex => self.parse_array_index(),
            State::AfterArrayIndex => self.parse_after_array_index(),
        }
    }

    /// A path starts with an identifier or an array index.
    fn parse_start(&mut self) -> Option<State> {
        let (kind, position) = match self.peek_item() {
            Ok(peeked) => peeked,
            Err(e) => return self.fail(e),
        };
        match kind {
            ItemKind::Identifier => Some(State::Identifier),
            ItemKind::ArrayIndex => Some(State::ArrayIndex),
            ItemKind::Eof => self.end(),
            ItemKind::Dot => self.grammar_error("expected array index or identifier", position),
        }
    }

    /// Reached from the start or after a dot.
    fn parse_identifier(&mut self) -> Option<State> {
        let item = match self.next_item() {
            Ok(item) => item,
            Err(e) => return self.fail(e),
        };
        match item.kind {
            ItemKind::Identifier => {
                self.emit(Step::Field(item.text));
                Some(State::AfterIdentifier)
            }
            // Trailing dot, or a repeated dot: the path ends here.
            ItemKind::Eof | ItemKind::Dot => self.end(),
            ItemKind::ArrayIndex => self.grammar_error("expected identifier after dot", item.position),
        }
    }

    fn parse_after_identifier(&mut self) -> Option<State> {
        let (kind, position) = match self.peek_item() {
            Ok(peeked) => peeked,
            Err(e) => return self.fail(e),
        };
        match kind {
            ItemKind::Dot => Some(State::Dot),
            ItemKind::ArrayIndex => Some(State::ArrayIndex),
            ItemKind::Eof => self.end(),
            ItemKind::Identifier => self.grammar_error("expected dot or array index", position),
        }
    }

    fn parse_dot(&mut self) -> Option<State> {
        match self.next_item() {
            Ok(item) if item.is(ItemKind::Dot) => Some(State::Identifier),
            Ok(item) => self.grammar_error("expected dot", item.position),
            Err(e) => self.fail(e),
        }
    }

    fn parse_array_index(&mut self) -> Option<State> {
        let item = match self.next_item() {
            Ok(item) => item,
            Err(e) => return self.fail(e),
        };
        if !item.is(ItemKind::ArrayIndex) {
            return self.grammar_error("expected array index", item.position);
        }

        let digits = item.text.trim_start_matches('[').trim_end_matches(']');
        match digits.parse::<usize>() {
            Ok(index) => {
                self.emit(Step::Index(index));
                Some(State::AfterArrayIndex)
            }
            Err(_) => self.grammar_error("expected a non-negative integer", item.position + 1),
        }
    }

    fn parse_after_array_index(&mut self) -> Option<State> {
        let (kind, position) = match self.peek_item() {
            Ok(peeked) => peeked,
            Err(e) => return self.fail(e),
        };
        match kind {
            ItemKind::Dot => Some(State::Dot),
            ItemKind::ArrayIndex => Some(State::ArrayIndex),
            ItemKind::Eof => self.end(),
            ItemKind::Identifier => {
                self.grammar_error("expected dot or array index after array index", position)
            }
        }
    }
}

impl<I> Iterator for Parser<I>
where
    I: Iterator<Item = Result<Item, LexError>>,
{
    type Item = Result<Step, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(step) = self.pending.take() {
                return Some(step);
            }
            let state = self.state.take()?;
            self.state = self.run(state);
        }
    }
}
