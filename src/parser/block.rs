//! Block tokenizer and line classification for NC programs.
//!
//! A block (one program line) is scanned into *words*: an ASCII letter
//! followed by a numeric literal built from `+ - . 0-9`, with an optional
//! `E` exponent directly after the digits. Whitespace between
//! words is optional, so `G01X10F0.2` and `G01 X10 F0.2` tokenize the same.
//! Words whose numeric part is empty, fails a strict float parse or
//! overflows to infinity are dropped without error.

use crate::config::{
    CSS_MODE_CODE, IGNORED_LINE_PREFIXES, INLINE_COMMENT_MARKERS, MOTION_CODES,
};

/// A single address letter and its value, e.g. `X-12.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Word {
    /// Upper-case address letter.
    pub letter: char,
    pub value: f64,
}

impl Word {
    /// Check whether this is the G command with the given integer code.
    pub fn is_g(&self, code: u32) -> bool {
        self.letter == 'G' && self.value == f64::from(code)
    }
}

/// Role of a program line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Comment, program delimiter, program/block number or parameter table.
    Ignorable,
    /// Carries a feed and/or spindle speed word but no motion command.
    ParameterBearing,
    /// Rapid or interpolated move carrying at least one axis position.
    Motion,
    /// Anything else; contributes nothing.
    Unrecognized,
}

/// Check whether a line is skipped entirely based on its first character.
pub fn is_ignorable(line: &str) -> bool {
    line.trim_start()
        .chars()
        .next()
        .map(|c| IGNORED_LINE_PREFIXES.contains(&c.to_ascii_uppercase()))
        .unwrap_or(false)
}

/// Cut a line at the first inline comment marker.
pub fn strip_inline_comment(line: &str) -> &str {
    match line.find(|c: char| INLINE_COMMENT_MARKERS.contains(&c)) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Scan code text into words.
pub fn tokenize(code: &str) -> Vec<Word> {
    let bytes = code.as_bytes();
    let mut words = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        i += 1;
        if !b.is_ascii_alphabetic() {
            continue;
        }

        let start = i;
        while i < bytes.len() && is_numeric_byte(bytes[i]) {
            i += 1;
        }

        // An exponent belongs to the literal: `F1E-3` is 0.001, not F1 and E-3.
        if i > start && i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
            i += 1;
            if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
                i += 1;
            }
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }

        // Only ASCII bytes were consumed, so the slice is on char boundaries.
        // Overflowing literals parse to infinity and are dropped as malformed.
        if let Some(value) = code[start..i]
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
        {
            words.push(Word {
                letter: char::from(b.to_ascii_uppercase()),
                value,
            });
        }
    }

    words
}

#[inline]
fn is_numeric_byte(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.')
}

/// A tokenized, non-ignorable program line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    words: Vec<Word>,
}

impl Block {
    /// Tokenize a line. Returns `None` for ignorable lines.
    pub fn parse(line: &str) -> Option<Self> {
        if is_ignorable(line) {
            return None;
        }
        Some(Self {
            words: tokenize(strip_inline_comment(line)),
        })
    }

    /// Values of every word with the given letter, in line order.
    pub fn values(&self, letter: char) -> impl Iterator<Item = f64> + '_ {
        let letter = letter.to_ascii_uppercase();
        self.words
            .iter()
            .filter(move |w| w.letter == letter)
            .map(|w| w.value)
    }

    /// Check whether the line carries any word with the given letter.
    pub fn has(&self, letter: char) -> bool {
        self.values(letter).next().is_some()
    }

    /// Check for a rapid, linear or circular interpolation command.
    pub fn is_motion(&self) -> bool {
        self.words
            .iter()
            .any(|w| MOTION_CODES.iter().any(|&code| w.is_g(code)))
    }

    /// Check for constant surface speed mode (S is a surface speed here).
    pub fn is_css_mode(&self) -> bool {
        self.words.iter().any(|w| w.is_g(CSS_MODE_CODE))
    }

    /// Classify this block.
    pub fn class(&self) -> LineClass {
        if self.is_motion() && (self.has('X') || self.has('Y') || self.has('Z')) {
            LineClass::Motion
        } else if self.has('F') || self.has('S') {
            LineClass::ParameterBearing
        } else {
            LineClass::Unrecognized
        }
    }
}

/// Classify a raw program line.
pub fn classify_line(line: &str) -> LineClass {
    Block::parse(line)
        .map(|block| block.class())
        .unwrap_or(LineClass::Ignorable)
}
