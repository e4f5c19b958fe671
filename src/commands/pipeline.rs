//! Input line parsing.
//!
//! A line is first split into pipeline segments on unquoted `|`, then each
//! segment is split into words. Quotes survive the first pass so the second
//! pass can still group quoted words.

use std::iter::Peekable;
use std::str::Chars;

/// Splits an input line into trimmed, non-empty pipeline segments.
///
/// `|` inside single or double quotes does not split. Each quote kind is only
/// recognized outside the other, and quote characters are kept in the
/// segment. An unterminated quote runs to the end of the line.
///
/// Absent or empty input yields a single empty segment, while whitespace-only
/// input yields no segments at all.
pub fn parse_pipeline<'a>(input: impl Into<Option<&'a str>>) -> Vec<String> {
    let input = match input.into() {
        None | Some("") => return vec![String::new()],
        Some(input) => input,
    };

    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_single = false;
    let mut in_double = false;

    for c in input.chars() {
        match c {
            '\'' if !in_double => {
                in_single = !in_single;
                current.push(c);
            }
            '"' if !in_single => {
                in_double = !in_double;
                current.push(c);
            }
            '|' if !in_single && !in_double => {
                segments.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    segments.push(current.trim().to_string());

    segments.retain(|s| !s.is_empty());
    segments
}

/// Splits a segment into words on whitespace.
///
/// Handles:
/// - Double-quoted strings: `"hello world"` → `hello world`
/// - Single-quoted strings: `'a | b'` → `a | b`
/// - Escape sequences in quotes: `"say \"hi\""` → `say "hi"`
/// - Quotes glued to a word: `--name="x y"` → `--name=x y`
pub fn split_args(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let (word, quoted) = collect_word(&mut chars);
        // `""` is a real (empty) argument.
        if !word.is_empty() || quoted {
            words.push(word);
        }
    }

    words
}

/// Collects one word, expanding quoted spans. Returns whether any quotes
/// were seen.
fn collect_word(chars: &mut Peekable<Chars<'_>>) -> (String, bool) {
    let mut word = String::new();
    let mut quoted = false;

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            break;
        }
        chars.next();

        if c == '"' || c == '\'' {
            quoted = true;
            word.push_str(&collect_quoted(chars, c));
        } else {
            word.push(c);
        }
    }

    (word, quoted)
}

/// Collects characters up to the closing `quote`, decoding escapes.
fn collect_quoted(chars: &mut Peekable<Chars<'_>>, quote: char) -> String {
    let mut result = String::new();
    let mut escaped = false;

    for c in chars.by_ref() {
        if escaped {
            match c {
                'n' => result.push('\n'),
                't' => result.push('\t'),
                'r' => result.push('\r'),
                '\\' => result.push('\\'),
                '"' => result.push('"'),
                '\'' => result.push('\''),
                _ => {
                    // Unknown escape, keep as-is
                    result.push('\\');
                    result.push(c);
                }
            }
            escaped = false;
            continue;
        }

        if c == '\\' {
            escaped = true;
        } else if c == quote {
            return result;
        } else {
            result.push(c);
        }
    }

    if escaped {
        result.push('\\');
    }
    result
}
