use crate::tests::utils::try_run;
use crate::{SieveError, StreamingSieve};

// A pattern with matchable descendants everywhere relevant, so containers
// are parsed incrementally and structural errors surface as such rather
// than as host-decoder failures inside a bulk capture.
const PROBE: &[&str] = &["$.probe.deep"];

fn assert_structure(input: &str) {
    match try_run(input, PROBE) {
        Err(SieveError::Structure(_)) => {}
        other => panic!("expected Structure error for {input:?}, got {other:?}"),
    }
}

fn assert_lexical(input: &str) {
    match try_run(input, PROBE) {
        Err(SieveError::Lexical(_)) => {}
        other => panic!("expected Lexical error for {input:?}, got {other:?}"),
    }
}

fn assert_incomplete(input: &str) {
    match try_run(input, PROBE) {
        Err(SieveError::Incomplete(_)) => {}
        other => panic!("expected Incomplete error for {input:?}, got {other:?}"),
    }
}

#[test]
fn empty_and_whitespace_only_inputs_are_incomplete() {
    assert_incomplete("");
    assert_incomplete("   \t\r\n ");
}

#[test]
fn unclosed_structures_are_incomplete() {
    assert_incomplete("{");
    assert_incomplete(r#"{"a":1"#);
    assert_incomplete("[1,2");
    assert_incomplete(r#"{"a":[1,{"b":"#);
    assert_incomplete(r#""abc"#);
    assert_incomplete(r#""abc\"#);
    assert_incomplete("tru");
}

#[test]
fn second_root_value_is_extra_data() {
    assert_structure(r#"{"a":1}{"b":2}"#);
    assert_structure("1 2");
    assert_structure("null null");
}

#[test]
fn trailing_commas_are_rejected() {
    assert_structure(r#"{"a":1,}"#);
    assert_structure("[1,]");
}

#[test]
fn stray_commas_are_rejected() {
    assert_structure(r#"{,"a":1}"#);
    assert_structure("[,1]");
    assert_structure("[1,,2]");
}

#[test]
fn missing_value_before_close_is_rejected() {
    assert_structure(r#"{"a":}"#);
}

#[test]
fn missing_comma_between_members_is_rejected() {
    assert_structure(r#"{"a":1 "b":2}"#);
    assert_structure("[1 2]");
}

#[test]
fn invalid_start_characters_are_rejected() {
    assert_structure("#");
    assert_structure("'a'");
    assert_structure("=1");
}

#[test]
fn malformed_numbers_are_lexical_errors() {
    assert_lexical("12x");
    assert_lexical("1.2.3");
    assert_lexical("1e");
    assert_lexical("--1");
    assert_lexical("-");
    assert_lexical("[01]");
}

#[test]
fn malformed_literals_are_lexical_errors() {
    assert_lexical("tru3");
    assert_lexical("falsy");
    assert_lexical("nul1");
    assert_lexical("truex");
}

#[test]
fn raw_control_characters_in_strings_are_lexical_errors() {
    assert_lexical("\"a\nb\"");
    assert_lexical("\"a\tb\"");
}

#[test]
fn lone_surrogate_escape_is_a_lexical_error() {
    assert_lexical(r#""\uD800""#);
}

#[test]
fn invalid_escape_is_a_lexical_error() {
    assert_lexical(r#""\q""#);
}

#[test]
fn bulk_capture_reports_host_decoder_failures() {
    // Under a root pattern the document is captured whole, so malformed
    // interior structure is diagnosed by the host decoder instead.
    match try_run(r#"{"a":1 "b":2}"#, &["$"]) {
        Err(SieveError::Lexical(_)) => {}
        other => panic!("expected Lexical error, got {other:?}"),
    }
}

#[test]
fn key_without_colon_waits_and_surfaces_as_incomplete() {
    // The key reader's terminator is the colon; stray non-colon input after
    // the key string leaves the key unread.
    assert_incomplete(r#"{"a" 1}"#);
}

#[test]
fn first_error_is_terminal_and_re_raised() {
    let mut sieve = StreamingSieve::new(PROBE).unwrap();
    let err = sieve.feed(b"[1,]").unwrap_err();
    assert!(matches!(err, SieveError::Structure(_)));
    let again = sieve.feed(b"[]").unwrap_err();
    assert_eq!(err, again);
    assert_eq!(sieve.finish().unwrap_err(), err);
}

#[test]
fn pattern_list_validation() {
    assert!(matches!(
        StreamingSieve::new(Vec::<String>::new()),
        Err(SieveError::Config(_))
    ));
    assert!(matches!(
        StreamingSieve::new([""]),
        Err(SieveError::Config(_))
    ));
    assert!(matches!(
        StreamingSieve::new(["$.a", "$.**.b"]),
        Err(SieveError::Config(_))
    ));
}

#[test]
fn replacement_chars_from_invalid_utf8_fail_parsing() {
    let mut sieve = StreamingSieve::new(PROBE).unwrap();
    // 0xFF can never begin a UTF-8 scalar; it decodes to U+FFFD, which is
    // not a valid JSON start character.
    let err = sieve.feed(b"\xFF").unwrap_err();
    assert!(matches!(err, SieveError::Structure(_)));
}
