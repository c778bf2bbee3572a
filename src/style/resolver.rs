//! The styling-name resolver.
//!
//! Decomposes a compound attribute name such as
//! `bold_underline_green_on_red` into an ordered list of formatting
//! primitives. Order is preserved exactly as written: terminals apply
//! rendering codes sequentially, and later codes can override earlier ones
//! for the same attribute class, so left-to-right emission is what makes
//! output reproducible.
//!
//! Grammar, informally:
//! - a style word (`bold`, `underline`, ...) stands alone and may repeat;
//! - a color word is a foreground color;
//! - `bright` must be immediately followed by a color word;
//! - `on` marks the next color (optionally `bright`-qualified) as the
//!   background;
//! - at most one foreground and one background color per name.
//!
//! Anything else fails with [`StyleError::Unresolvable`].

use crate::style::StyleError;

/// The eight base hues, in ANSI order; a color's palette index is its
/// position here, plus eight for the bright variant.
pub const COLORS: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// Style words accepted in compound names. These may repeat in any order.
const STYLES: [&str; 12] = [
    "bold",
    "dim",
    "blink",
    "reverse",
    "standout",
    "underline",
    "italic",
    "shadow",
    "invisible",
    "protect",
    "subscript",
    "superscript",
];

/// One unit of a decomposed compound name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    /// A video attribute, by its friendly style word.
    Style(&'static str),
    /// A palette color. `index` is 0-7, or 8-15 for bright variants.
    Color { index: u8, background: bool },
}

/// Decompose `name` into ordered formatting primitives.
pub fn parse(name: &str) -> Result<Vec<Primitive>, StyleError> {
    let mut primitives = Vec::new();
    let mut pending_on = false;
    let mut pending_bright = false;
    let mut seen_foreground = false;
    let mut seen_background = false;

    for token in name.split('_') {
        match token {
            "" => return Err(StyleError::unresolvable(name, "empty token")),
            "on" => {
                if pending_on || pending_bright {
                    return Err(StyleError::unresolvable(
                        name,
                        "\"on\" must be followed by a color word",
                    ));
                }
                pending_on = true;
            }
            "bright" => {
                if pending_bright {
                    return Err(StyleError::unresolvable(
                        name,
                        "\"bright\" must be followed by a color word",
                    ));
                }
                pending_bright = true;
            }
            _ => {
                if let Some(position) = COLORS.iter().position(|color| *color == token) {
                    let index = position as u8 + if pending_bright { 8 } else { 0 };
                    if pending_on {
                        if seen_background {
                            return Err(StyleError::unresolvable(
                                name,
                                "more than one background color",
                            ));
                        }
                        seen_background = true;
                    } else {
                        if seen_foreground {
                            return Err(StyleError::unresolvable(
                                name,
                                "more than one foreground color",
                            ));
                        }
                        seen_foreground = true;
                    }
                    primitives.push(Primitive::Color {
                        index,
                        background: pending_on,
                    });
                    pending_on = false;
                    pending_bright = false;
                } else if let Some(style) = STYLES.iter().copied().find(|style| *style == token) {
                    if pending_on || pending_bright {
                        return Err(StyleError::unresolvable(
                            name,
                            "\"on\" and \"bright\" must be followed by a color word",
                        ));
                    }
                    primitives.push(Primitive::Style(style));
                } else {
                    return Err(StyleError::unresolvable(
                        name,
                        format!("unknown token {token:?}"),
                    ));
                }
            }
        }
    }

    if pending_on || pending_bright {
        return Err(StyleError::unresolvable(
            name,
            "dangling \"on\" or \"bright\" qualifier",
        ));
    }

    Ok(primitives)
}
