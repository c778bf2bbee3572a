//! Sequence-aware text measurement and alignment.
//!
//! Styled text carries escape sequences that occupy no terminal cells, so
//! `str::len` and the standard padding helpers misjudge it. These helpers
//! strip CSI/OSC/ESC sequences before measuring, and measure in terminal
//! cells (wide CJK characters count as two).

use unicode_width::UnicodeWidthStr;

/// Remove terminal escape sequences from `text`, keeping printable
/// characters.
pub fn strip_seqs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        match chars.next() {
            // CSI: parameters and intermediates, then one final byte in
            // the 0x40..=0x7e range.
            Some('[') => {
                for follower in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&follower) {
                        break;
                    }
                }
            }
            // OSC: terminated by BEL or ST (ESC \).
            Some(']') => loop {
                match chars.next() {
                    None | Some('\x07') => break,
                    Some('\x1b') => {
                        chars.next();
                        break;
                    }
                    Some(_) => {}
                }
            },
            // Charset designation takes one more character (e.g. ESC ( B).
            Some('(') | Some(')') | Some('#') | Some('%') => {
                chars.next();
            }
            // Two-character escapes such as ESC 7 / ESC 8.
            Some(_) | None => {}
        }
    }
    out
}

/// Printable width of `text` in terminal cells, ignoring sequences.
pub fn length(text: &str) -> usize {
    strip_seqs(text).width()
}

/// Left-align `text` within `width` cells, padding with `fill`.
pub fn ljust(text: &str, width: usize, fill: char) -> String {
    let pad = width.saturating_sub(length(text));
    let mut out = String::with_capacity(text.len() + pad);
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(pad));
    out
}

/// Right-align `text` within `width` cells, padding with `fill`.
pub fn rjust(text: &str, width: usize, fill: char) -> String {
    let pad = width.saturating_sub(length(text));
    let mut out = String::with_capacity(text.len() + pad);
    out.extend(std::iter::repeat(fill).take(pad));
    out.push_str(text);
    out
}

/// Center `text` within `width` cells, padding with `fill`.
pub fn center(text: &str, width: usize, fill: char) -> String {
    let pad = width.saturating_sub(length(text));
    let left = pad / 2;
    let mut out = String::with_capacity(text.len() + pad);
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(pad - left));
    out
}
