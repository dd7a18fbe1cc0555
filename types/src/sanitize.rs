//! Text sanitization for form fields.
//!
//! Pasted text can carry terminal escape sequences and control characters.
//! Field contents are echoed back into the page (headings, status lines), so
//! anything that could drive the terminal is removed before it is stored.

use std::borrow::Cow;

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Strip escape sequences and control characters from field input.
///
/// Tabs become spaces. Newlines are kept only when `multiline` is set; in a
/// single-line field they become spaces as well. `\r\n` and lone `\r` are
/// treated as a newline.
///
/// Returns `Cow::Borrowed` when nothing needs to change.
///
/// ```
/// use skillscout_types::sanitize_field_text;
///
/// assert_eq!(sanitize_field_text("rust", false), "rust");
/// assert_eq!(sanitize_field_text("ru\x1b[31mst", false), "rust");
/// assert_eq!(sanitize_field_text("a\nb", false), "a b");
/// assert_eq!(sanitize_field_text("a\r\nb", true), "a\nb");
/// ```
#[must_use]
pub fn sanitize_field_text(input: &str, multiline: bool) -> Cow<'_, str> {
    if !input.chars().any(|c| needs_rewrite(c, multiline)) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESC => skip_sequence(&mut chars),
            '\t' => out.push(' '),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(if multiline { '\n' } else { ' ' });
            }
            '\n' => out.push(if multiline { '\n' } else { ' ' }),
            '\u{009b}' => skip_csi(&mut chars),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }

    Cow::Owned(out)
}

fn needs_rewrite(c: char, multiline: bool) -> bool {
    match c {
        '\n' => !multiline,
        c => c.is_control(),
    }
}

fn skip_sequence<I: Iterator<Item = char>>(chars: &mut std::iter::Peekable<I>) {
    match chars.peek().copied() {
        Some('[') => {
            chars.next();
            skip_csi(chars);
        }
        Some(']' | 'P' | '^' | '_') => {
            chars.next();
            // String sequences end at BEL or ST (ESC \).
            while let Some(c) = chars.next() {
                if c == BEL {
                    break;
                }
                if c == ESC && chars.peek() == Some(&'\\') {
                    chars.next();
                    break;
                }
            }
        }
        Some('(' | ')' | '*' | '+' | '#' | ' ') => {
            chars.next();
            chars.next();
        }
        Some(c) if c.is_ascii_graphic() => {
            chars.next();
        }
        _ => {}
    }
}

fn skip_csi<I: Iterator<Item = char>>(chars: &mut std::iter::Peekable<I>) {
    while let Some(&c) = chars.peek() {
        if ('\x40'..='\x7e').contains(&c) {
            chars.next();
            return;
        }
        if !('\x20'..='\x3f').contains(&c) {
            return;
        }
        chars.next();
    }
}
