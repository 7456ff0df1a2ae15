#![allow(non_snake_case)]

use super::*;
use proptest::prelude::*;
use test_case::test_case;

// c_escape tests

#[test_case("x", "x" ; "plain ascii")]
#[test_case("", "" ; "empty")]
#[test_case("a\"b", "a\\\"b" ; "double quote")]
#[test_case("it's", "it\\'s" ; "single quote")]
#[test_case("C:\\tmp", "C:\\\\tmp" ; "backslash")]
#[test_case("a\nb\r\tc", "a\\nb\\r\\tc" ; "named control characters")]
#[test_case("\x01\x7f", "\\001\\177" ; "other control characters")]
#[test_case("é", "\\303\\251" ; "utf8 bytes")]
#[test_case("/* */", "/* */" ; "comment markers pass through")]
fn c_escape___input___produces_literal_body(raw: &str, expected: &str) {
    assert_eq!(c_escape(raw).unwrap(), expected);
}

#[test]
fn c_escape___interior_nul___reports_offset() {
    let err = c_escape("ab\0cd").unwrap_err();

    assert_eq!(err, EscapeError::InteriorNul { offset: 2 });
}

#[test]
fn c_escape___octal_followed_by_digit___stays_unambiguous() {
    let escaped = c_escape("\x017").unwrap();

    assert_eq!(escaped, "\\0017");
    assert_eq!(c_unescape(&escaped).unwrap(), b"\x017");
}

// c_unescape tests

#[test]
fn c_unescape___short_octal___decodes() {
    assert_eq!(c_unescape("\\7x").unwrap(), vec![7, b'x']);
}

#[test]
fn c_unescape___question_mark_escape___decodes() {
    assert_eq!(c_unescape("\\?").unwrap(), b"?");
}

#[test]
fn c_unescape___trailing_backslash___is_malformed() {
    assert_eq!(
        c_unescape("abc\\").unwrap_err(),
        EscapeError::Malformed { offset: 3 }
    );
}

#[test]
fn c_unescape___unknown_escape___is_malformed() {
    assert_eq!(
        c_unescape("\\q").unwrap_err(),
        EscapeError::Malformed { offset: 0 }
    );
}

#[test]
fn c_unescape___octal_overflow___is_malformed() {
    assert!(c_unescape("\\777").is_err());
}

proptest! {
    /// Property: decoding an escaped default reproduces it byte for byte
    #[test]
    fn proptest_escape_unescape_preserves_bytes(raw in "[^\\x00]*") {
        let escaped = c_escape(&raw).unwrap();
        let decoded = c_unescape(&escaped).unwrap();

        prop_assert_eq!(decoded, raw.as_bytes().to_vec());
    }

    /// Property: the escaped body never contains a bare quote or newline
    #[test]
    fn proptest_escape_output_is_single_line_ascii(raw in "[^\\x00]*") {
        let escaped = c_escape(&raw).unwrap();

        prop_assert!(escaped.is_ascii());
        prop_assert!(!escaped.contains('\n'));
        let bytes = escaped.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            if *b == b'"' {
                prop_assert!(i > 0 && bytes[i - 1] == b'\\');
            }
        }
    }
}
