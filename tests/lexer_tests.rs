// tests/lexer_tests.rs

use mapaccess::ast::ItemKind;
use mapaccess::lexer::{LexError, Lexer};

use ItemKind::{ArrayIndex, Dot, Eof, Identifier};

/// Runs the lexer to completion, returning the items seen and the error
/// that ended the scan, if any.
fn lex(input: &str) -> (Vec<(ItemKind, String)>, Option<LexError>) {
    let mut items = Vec::new();
    for item in Lexer::new(input) {
        match item {
            Ok(item) => items.push((item.kind, item.text)),
            Err(e) => return (items, Some(e)),
        }
    }
    (items, None)
}

fn items(expected: &[(ItemKind, &str)]) -> Vec<(ItemKind, String)> {
    expected
        .iter()
        .map(|(kind, text)| (*kind, text.to_string()))
        .collect()
}

fn assert_lexes(input: &str, expected: &[(ItemKind, &str)]) {
    let (got, error) = lex(input);
    assert_eq!(error, None, "unexpected error for input: {:?}", input);
    assert_eq!(got, items(expected), "Failed for input: {:?}", input);
}

fn assert_lex_error(input: &str, expected: &[(ItemKind, &str)], message: &str) {
    let (got, error) = lex(input);
    assert_eq!(got, items(expected), "Failed for input: {:?}", input);
    let error = error.unwrap_or_else(|| panic!("expected an error for input: {:?}", input));
    assert_eq!(error.message, message, "Failed for input: {:?}", input);
}

// ============================================================================
// Valid paths
// ============================================================================

#[test]
fn test_empty_path() {
    assert_lexes("", &[(Eof, "")]);
}

#[test]
fn test_single_keys() {
    assert_lexes("somekey", &[(Identifier, "somekey"), (Eof, "")]);
    assert_lexes("some6key9", &[(Identifier, "some6key9"), (Eof, "")]);
    assert_lexes("first-name_2", &[(Identifier, "first-name_2"), (Eof, "")]);
    assert_lexes("42", &[(Identifier, "42"), (Eof, "")]);
}

#[test]
fn test_unicode_identifiers() {
    assert_lexes(
        "naïve.日本",
        &[(Identifier, "naïve"), (Dot, "."), (Identifier, "日本"), (Eof, "")],
    );
}

#[test]
fn test_decimal_digits_from_any_script() {
    assert_lexes("x٣", &[(Identifier, "x٣"), (Eof, "")]);
    assert_lexes("row१", &[(Identifier, "row१"), (Eof, "")]);
}

#[test]
fn test_other_numerics_are_not_identifier_chars() {
    assert_lex_error("x²", &[(Identifier, "x")], "expected <.> or <array index>");
    assert_lex_error("½", &[], "expected identifier");
    assert_lex_error("Ⅻ", &[], "expected identifier");
    assert_lex_error("①", &[], "expected identifier");
    assert_lex_error("a.½", &[(Identifier, "a"), (Dot, ".")], "expected identifier");
}

#[test]
fn test_multiple_keys() {
    assert_lexes(
        "keyone.keytwo",
        &[(Identifier, "keyone"), (Dot, "."), (Identifier, "keytwo"), (Eof, "")],
    );
}

#[test]
fn test_array_index() {
    assert_lexes("keyone[0]", &[(Identifier, "keyone"), (ArrayIndex, "[0]"), (Eof, "")]);
    assert_lexes("list[123]", &[(Identifier, "list"), (ArrayIndex, "[123]"), (Eof, "")]);
}

#[test]
fn test_nested_array() {
    assert_lexes(
        "keyone.keytwo[0]",
        &[
            (Identifier, "keyone"),
            (Dot, "."),
            (Identifier, "keytwo"),
            (ArrayIndex, "[0]"),
            (Eof, ""),
        ],
    );
    assert_lexes(
        "keyone[9].keytwo[0]",
        &[
            (Identifier, "keyone"),
            (ArrayIndex, "[9]"),
            (Dot, "."),
            (Identifier, "keytwo"),
            (ArrayIndex, "[0]"),
            (Eof, ""),
        ],
    );
}

#[test]
fn test_dotted_path_with_index_items() {
    assert_lexes(
        "a.b[0]",
        &[
            (Identifier, "a"),
            (Dot, "."),
            (Identifier, "b"),
            (ArrayIndex, "[0]"),
            (Eof, ""),
        ],
    );
}

#[test]
fn test_root_array() {
    assert_lexes(
        "[0].test",
        &[(ArrayIndex, "[0]"), (Dot, "."), (Identifier, "test"), (Eof, "")],
    );
    assert_lexes(
        "[0][1].test",
        &[
            (ArrayIndex, "[0]"),
            (ArrayIndex, "[1]"),
            (Dot, "."),
            (Identifier, "test"),
            (Eof, ""),
        ],
    );
}

#[test]
fn test_trailing_dot_ends_scan() {
    assert_lexes("somekey.", &[(Identifier, "somekey"), (Dot, "."), (Eof, "")]);
    assert_lexes("[0].", &[(ArrayIndex, "[0]"), (Dot, "."), (Eof, "")]);
}

#[test]
fn test_dot_before_array_index_scans() {
    // The lexer lets this through; the parser rejects it.
    assert_lexes(
        "keyo.[0].test",
        &[
            (Identifier, "keyo"),
            (Dot, "."),
            (ArrayIndex, "[0]"),
            (Dot, "."),
            (Identifier, "test"),
            (Eof, ""),
        ],
    );
}

#[test]
fn test_fallback_after_array_index() {
    assert_lexes("[0]x", &[(ArrayIndex, "[0]"), (Identifier, "x"), (Eof, "")]);
    assert_lexes("a[0]bc", &[(Identifier, "a"), (ArrayIndex, "[0]"), (Identifier, "bc"), (Eof, "")]);
    assert_lexes("[0] ", &[(ArrayIndex, "[0]"), (Identifier, " "), (Eof, "")]);
}

// ============================================================================
// Lexical errors
// ============================================================================

#[test]
fn test_repeated_dot() {
    assert_lex_error("keyo..", &[(Identifier, "keyo"), (Dot, ".")], "expected identifier");
}

#[test]
fn test_leading_dot() {
    assert_lex_error(".[0].test", &[], "expected identifier");
    assert_lex_error(".a", &[], "expected identifier");
}

#[test]
fn test_whitespace() {
    assert_lex_error(" somekey", &[], "expected identifier");
    assert_lex_error(" one.two[0]", &[], "expected identifier");
    assert_lex_error("somekey ", &[(Identifier, "somekey")], "expected <.> or <array index>");
    assert_lex_error("one. two", &[(Identifier, "one"), (Dot, ".")], "expected identifier");
}

#[test]
fn test_bad_character_after_identifier() {
    assert_lex_error("a/b", &[(Identifier, "a")], "expected <.> or <array index>");
    assert_lex_error("a]", &[(Identifier, "a")], "expected <.> or <array index>");
}

#[test]
fn test_malformed_array_index() {
    assert_lex_error("a[", &[(Identifier, "a")], "missing digits in array index <[]>");
    assert_lex_error("a[]", &[(Identifier, "a")], "missing digits in array index <[]>");
    assert_lex_error("a[x]", &[(Identifier, "a")], "missing digits in array index <[]>");
    assert_lex_error("a[-1]", &[(Identifier, "a")], "missing digits in array index <[]>");
    assert_lex_error("a[1", &[(Identifier, "a")], "missing closing bracket ] at array index <[]>");
    assert_lex_error("a[1x]", &[(Identifier, "a")], "missing closing bracket ] at array index <[]>");
}

#[test]
fn test_error_position() {
    let (_, error) = lex("keyo..");
    assert_eq!(error.unwrap().position, 5);

    let (_, error) = lex("abc[1");
    assert_eq!(error.unwrap().position, 5);
}

#[test]
fn test_single_terminal_item() {
    for input in ["", "a", "a.b[0]", "[0]x", "a.", " a", "a[", "a.."] {
        let results: Vec<_> = Lexer::new(input).collect();
        let terminals = results
            .iter()
            .filter(|r| match r {
                Ok(item) => item.kind == Eof,
                Err(_) => true,
            })
            .count();
        assert_eq!(terminals, 1, "Failed for input: {:?}", input);
        let last = results.last().unwrap();
        assert!(last.is_err() || last.as_ref().unwrap().kind == Eof);
    }
}
