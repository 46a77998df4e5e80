use super::*;
use crate::classify::{classify, Classification};

fn trie() -> Trie {
    Trie::standard()
}

/// Classify and extract the first token of a complete input.
fn first(src: &str) -> Extraction {
    let view = View::complete(src.as_bytes());
    let Classification::Kind(kind) = classify(view) else {
        panic!("complete view must classify");
    };
    extract(kind, view, &trie())
}

/// Classify and extract against a view with more input pending.
fn first_partial(src: &str) -> Extraction {
    let view = View::new(src.as_bytes(), false);
    match classify(view) {
        Classification::Kind(kind) => extract(kind, view, &trie()),
        Classification::NeedMore => Extraction::NeedMore,
    }
}

fn lexeme(kind: TokenKind, len: usize) -> Extraction {
    Extraction::Lexeme { kind, len }
}

// === Whitespace & delimiters ===

#[test]
fn whitespace_run() {
    assert_eq!(first("  \t\n x"), lexeme(TokenKind::Whitespace, 5));
    assert_eq!(first("\r\n"), lexeme(TokenKind::Whitespace, 2));
}

#[test]
fn delimiter_is_one_byte() {
    assert_eq!(first("(("), lexeme(TokenKind::Delimiter, 1));
    assert_eq!(first("\"str\""), lexeme(TokenKind::Delimiter, 1));
}

// === Comments ===

#[test]
fn line_comment_stops_before_newline() {
    assert_eq!(first("// comment\nx"), lexeme(TokenKind::Comment, 10));
}

#[test]
fn line_comment_to_end_of_input() {
    assert_eq!(first("// tail"), lexeme(TokenKind::Comment, 7));
    assert_eq!(first("//"), lexeme(TokenKind::Comment, 2));
}

#[test]
fn line_comment_without_newline_needs_more() {
    assert_eq!(first_partial("// tail"), Extraction::NeedMore);
    assert_eq!(first_partial("// tail\n"), lexeme(TokenKind::Comment, 7));
}

#[test]
fn block_comment_includes_closer() {
    assert_eq!(first("/* a */ b"), lexeme(TokenKind::Comment, 7));
    assert_eq!(first("/**/"), lexeme(TokenKind::Comment, 4));
    assert_eq!(first("/* a\n b */"), lexeme(TokenKind::Comment, 10));
}

#[test]
fn block_comment_closer_must_follow_opener() {
    // `/*/` does not close itself.
    assert_eq!(first("/*/"), Extraction::Unterminated);
    assert_eq!(first("/*/ */"), lexeme(TokenKind::Comment, 6));
}

#[test]
fn block_comments_do_not_nest() {
    assert_eq!(first("/* /* */ */"), lexeme(TokenKind::Comment, 8));
}

#[test]
fn unterminated_block_comment() {
    assert_eq!(first("/* unterminated"), Extraction::Unterminated);
    assert_eq!(first_partial("/* unterminated"), Extraction::NeedMore);
}

// === Numbers ===

#[test]
fn number_run() {
    assert_eq!(first("1234 "), lexeme(TokenKind::NumberLiteral, 4));
    assert_eq!(first("1)"), lexeme(TokenKind::NumberLiteral, 1));
    assert_eq!(first("99"), lexeme(TokenKind::NumberLiteral, 2));
}

#[test]
fn number_at_view_end_needs_more() {
    let view = View::new(b"99", false);
    assert_eq!(
        extract(TokenKind::NumberLiteral, view, &trie()),
        Extraction::NeedMore
    );
}

// === Char sequences & reserved words ===

#[test]
fn identifier_run() {
    assert_eq!(first("foo_bar9 = 1"), lexeme(TokenKind::CharSequence, 8));
    assert_eq!(first("x==1"), lexeme(TokenKind::CharSequence, 1));
}

#[test]
fn digit_led_identifier() {
    assert_eq!(first("1x+"), lexeme(TokenKind::CharSequence, 2));
}

#[test]
fn reserved_word_is_resolved() {
    assert_eq!(first("if("), lexeme(TokenKind::ReservedWord, 2));
    assert_eq!(first("continuation_t x"), lexeme(TokenKind::ReservedWord, 14));
}

#[test]
fn reserved_prefix_and_extension_are_identifiers() {
    assert_eq!(first("iff"), lexeme(TokenKind::CharSequence, 3));
    assert_eq!(first("fin "), lexeme(TokenKind::CharSequence, 3));
}

#[test]
fn identifier_at_view_end_needs_more() {
    // `if` could still become `iffy`.
    assert_eq!(first_partial("if"), Extraction::NeedMore);
}

#[test]
fn custom_vocabulary() {
    let trie = Trie::build(&["let"]).unwrap_or_else(|e| panic!("{e}"));
    let view = View::complete(b"let if");
    assert_eq!(
        extract(TokenKind::CharSequence, view, &trie),
        lexeme(TokenKind::ReservedWord, 3)
    );
    let view = View::complete(b"if");
    assert_eq!(
        extract(TokenKind::CharSequence, view, &trie),
        lexeme(TokenKind::CharSequence, 2)
    );
}

// === Operators ===

#[test]
fn operator_run() {
    assert_eq!(first("==1"), lexeme(TokenKind::Operator, 2));
    assert_eq!(first("&&x"), lexeme(TokenKind::Operator, 2));
    // `>` is a delimiter, so `->` splits.
    assert_eq!(first("->x"), lexeme(TokenKind::Operator, 1));
    assert_eq!(first("+= 1"), lexeme(TokenKind::Operator, 2));
}

#[test]
fn operator_stops_before_slash() {
    assert_eq!(first("=// c"), lexeme(TokenKind::Operator, 1));
    assert_eq!(first("+/* c */"), lexeme(TokenKind::Operator, 1));
    assert_eq!(first("+/2"), lexeme(TokenKind::Operator, 1));
    assert_eq!(first("/=/"), lexeme(TokenKind::Operator, 2));
    assert_eq!(first("/"), lexeme(TokenKind::Operator, 1));
}

#[test]
fn operator_at_view_end_needs_more() {
    assert_eq!(first_partial("+="), Extraction::NeedMore);
    assert_eq!(first_partial("+/"), lexeme(TokenKind::Operator, 1));
    assert_eq!(first("+="), lexeme(TokenKind::Operator, 2));
}

// === Invalid ===

#[test]
fn invalid_is_one_byte() {
    let view = View::complete(&[0xC3, 0xA9, b'x']);
    assert_eq!(
        extract(TokenKind::Invalid, view, &trie()),
        lexeme(TokenKind::Invalid, 1)
    );
}
