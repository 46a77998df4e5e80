use super::*;

fn complete(src: &str) -> Classification {
    classify(View::complete(src.as_bytes()))
}

fn partial(src: &str) -> Classification {
    classify(View::new(src.as_bytes(), false))
}

fn kind(k: TokenKind) -> Classification {
    Classification::Kind(k)
}

// === Byte classes ===

#[test]
fn every_byte_has_at_most_one_class() {
    for b in 0..=255u8 {
        let class = ByteClass::of(b);
        assert!(
            class.bits().count_ones() <= 1,
            "byte 0x{b:02X} has classes {class:?}"
        );
    }
}

#[test]
fn non_ascii_and_control_bytes_have_no_class() {
    for b in [0x00, 0x01, 0x0B, 0x0C, 0x1B, 0x7F, 0x80, 0xC3, 0xFF] {
        assert!(ByteClass::of(b).is_empty(), "byte 0x{b:02X}");
    }
}

#[test]
fn ident_continue_covers_letters_digits_underscore() {
    for b in [b'a', b'Z', b'0', b'9', b'_'] {
        assert!(ByteClass::is(b, ByteClass::IDENT_CONTINUE));
    }
    for b in [b'-', b' ', b'(', b'$'] {
        assert!(!ByteClass::is(b, ByteClass::IDENT_CONTINUE));
    }
}

// === Precedence ===

#[test]
fn empty_exhausted_view_is_end_of_stream() {
    assert_eq!(complete(""), kind(TokenKind::EndOfStream));
}

#[test]
fn empty_open_view_needs_more() {
    assert_eq!(partial(""), Classification::NeedMore);
}

#[test]
fn whitespace() {
    for src in [" x", "\tx", "\r\n", "\n"] {
        assert_eq!(complete(src), kind(TokenKind::Whitespace), "{src:?}");
    }
}

#[test]
fn delimiters() {
    for src in [";", ",", ".", "(", ")", "{", "}", "[", "]", "<", ">", ":", "\"", "'"] {
        assert_eq!(complete(src), kind(TokenKind::Delimiter), "{src:?}");
    }
}

#[test]
fn comment_openers() {
    assert_eq!(complete("// hi"), kind(TokenKind::Comment));
    assert_eq!(complete("/* hi */"), kind(TokenKind::Comment));
    assert_eq!(complete("//"), kind(TokenKind::Comment));
}

#[test]
fn lone_slash_is_operator() {
    assert_eq!(complete("/"), kind(TokenKind::Operator));
    assert_eq!(complete("/ 2"), kind(TokenKind::Operator));
    assert_eq!(complete("/="), kind(TokenKind::Operator));
}

#[test]
fn slash_at_view_end_needs_more() {
    assert_eq!(partial("/"), Classification::NeedMore);
}

#[test]
fn number_followed_by_separator() {
    for src in ["1", "42 ", "7;", "0)", "12+3", "9\n", "3//c"] {
        assert_eq!(complete(src), kind(TokenKind::NumberLiteral), "{src:?}");
    }
}

#[test]
fn digits_glued_to_letters_are_a_char_sequence() {
    for src in ["1x", "2_", "123abc", "0xFF"] {
        assert_eq!(complete(src), kind(TokenKind::CharSequence), "{src:?}");
    }
}

#[test]
fn digit_run_at_view_end_needs_more() {
    assert_eq!(partial("123"), Classification::NeedMore);
    assert_eq!(partial("123 "), kind(TokenKind::NumberLiteral));
    assert_eq!(partial("123a"), kind(TokenKind::CharSequence));
}

#[test]
fn identifiers() {
    for src in ["x", "_", "if", "Foo_bar9", "_1"] {
        assert_eq!(complete(src), kind(TokenKind::CharSequence), "{src:?}");
    }
}

#[test]
fn operators() {
    for src in ["==", "+", "-", "*", "!", "@", "#", "$", "%", "^", "&", "|", "\\", "?", "~", "`"] {
        assert_eq!(complete(src), kind(TokenKind::Operator), "{src:?}");
    }
}

#[test]
fn invalid_bytes() {
    let cases: [&[u8]; 5] = [&[0x00], &[0x07], &[0x7F], &[0xC3, 0xA9], &[0xFF]];
    for bytes in cases {
        assert_eq!(
            classify(View::complete(bytes)),
            kind(TokenKind::Invalid),
            "{bytes:?}"
        );
    }
}

#[test]
fn classification_is_total_over_single_bytes() {
    for b in 0..=255u8 {
        let bytes = [b];
        let result = classify(View::complete(&bytes));
        assert!(
            matches!(result, Classification::Kind(k) if k != TokenKind::EndOfStream),
            "byte 0x{b:02X} classified as {result:?}"
        );
    }
}
