//! Compound styling: order preservation, degradation, encoding, and the
//! two error classes.

use termstyle::{Arg, Encoding, ForceStyling, Options, StyleError, Terminal};

use crate::support::{styled_terminal, FakeDatabase};

const BOLD: &[u8] = b"\x1b[1m";
const UNDERLINE: &[u8] = b"\x1b[4m";
const NORMAL: &[u8] = b"\x1b(B\x1b[m";

fn fg(index: u8) -> Vec<u8> {
    format!("\x1b[38;5;{index}m").into_bytes()
}

fn bg(index: u8) -> Vec<u8> {
    format!("\x1b[48;5;{index}m").into_bytes()
}

#[test]
fn simple_wrapper_applies_and_resets() {
    let (term, _) = styled_terminal();
    let bold = term.style("bold").unwrap();

    let mut expected = BOLD.to_vec();
    expected.extend_from_slice(b"hi");
    expected.extend_from_slice(NORMAL);
    assert_eq!(bold.apply("hi"), expected);
}

#[test]
fn compound_order_is_preserved_byte_for_byte() {
    let (term, _) = styled_terminal();
    let style = term.style("bold_underline_green_on_red").unwrap();

    let mut expected = BOLD.to_vec();
    expected.extend_from_slice(UNDERLINE);
    expected.extend_from_slice(&fg(2));
    expected.extend_from_slice(&bg(1));
    expected.extend_from_slice(b"boo");
    expected.extend_from_slice(NORMAL);
    assert_eq!(style.apply("boo"), expected);
}

#[test]
fn reordering_the_name_reorders_the_prefix() {
    let (term, _) = styled_terminal();
    let style = term.style("on_bright_red_bold_bright_green_underline").unwrap();

    let mut expected = bg(9).to_vec();
    expected.extend_from_slice(BOLD);
    expected.extend_from_slice(&fg(10));
    expected.extend_from_slice(UNDERLINE);
    expected.extend_from_slice(b"meh");
    expected.extend_from_slice(NORMAL);
    assert_eq!(style.apply("meh"), expected);
}

#[test]
fn zero_argument_call_is_the_raw_prefix() {
    let (term, _) = styled_terminal();
    let bold = term.style("bold").unwrap();
    assert_eq!(bold.call(&[]).unwrap(), BOLD);
    assert_eq!(bold.raw(), term.capability("bold").as_bytes());
}

#[test]
fn utf8_text_is_encoded_between_prefix_and_reset() {
    let (term, _) = styled_terminal();
    let style = term.style("bold_green").unwrap();

    let mut expected = BOLD.to_vec();
    expected.extend_from_slice(&fg(2));
    expected.extend_from_slice("bo\u{f6}".as_bytes());
    expected.extend_from_slice(NORMAL);
    assert_eq!(style.apply("bo\u{f6}"), expected);
}

#[test]
fn latin1_session_narrows_text() {
    let term = Terminal::with_database(
        Vec::new(),
        Box::new(FakeDatabase::xterm_like()),
        Options {
            force_styling: ForceStyling::Always,
            encoding: Encoding::Latin1,
            ..Options::default()
        },
    );
    let style = term.style("bold").unwrap();

    let mut expected = BOLD.to_vec();
    expected.extend_from_slice(b"bo\xf6");
    expected.extend_from_slice(NORMAL);
    assert_eq!(style.apply("bo\u{f6}"), expected);
}

#[test]
fn non_interactive_styling_is_the_identity() {
    let term = Terminal::with_stream(Vec::new());

    assert_eq!(term.style("bold").unwrap().apply("hi"), b"hi");
    assert_eq!(
        term.style("bold_underline_green_on_red").unwrap().apply("boo"),
        b"boo"
    );
    assert_eq!(
        term.style("on_bright_red_bold_bright_green_underline")
            .unwrap()
            .apply("meh"),
        b"meh"
    );
}

#[test]
fn styles_are_cached_per_name() {
    let (term, lookups) = styled_terminal();

    term.style("bold_green").unwrap();
    let after_first = lookups.get();
    term.style("bold_green").unwrap();
    term.style("bold_green").unwrap();

    assert_eq!(lookups.get(), after_first);
}

#[test]
fn misspelled_name_carries_the_hint() {
    let (term, _) = styled_terminal();
    let err = term.style("bold_misspelled").unwrap_err();
    assert!(matches!(err, StyleError::Unresolvable { .. }));
    assert!(err.to_string().contains("probably misspelled"));
}

#[test]
fn wrapper_misuse_does_not_carry_the_hint() {
    let (term, _) = styled_terminal();
    let bold = term.style("bold").unwrap();

    let err = bold.call(&[Arg::Text("a"), Arg::Text("b")]).unwrap_err();
    assert!(matches!(err, StyleError::InvalidArguments { .. }));
    assert!(!err.to_string().contains("misspelled"));

    let err = bold.call(&[Arg::Number(7)]).unwrap_err();
    assert!(!err.to_string().contains("misspelled"));
}

#[test]
fn bright_colors_use_the_high_palette_indexes() {
    let (term, _) = styled_terminal();

    let style = term.style("bright_black_on_bright_green").unwrap();
    let mut expected = fg(8);
    expected.extend_from_slice(&bg(10));
    assert_eq!(style.raw(), expected);
}
