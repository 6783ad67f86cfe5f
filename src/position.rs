//! Position arithmetic over a [`TextBuffer`]
//!
//! Stepping functions saturate at the buffer boundaries instead of failing, so
//! scan loops can stop by comparing against [`start_of_buffer`] and
//! [`end_of_buffer`].

use std::fmt;

use serde::Serialize;

use crate::buffer::TextBuffer;

/// A (line, column) pair, both 0-indexed.
///
/// `column` may equal the line length, meaning the slot just past the last
/// character of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Whether this position addresses a real slot in `buffer`
    pub fn is_valid_in<B: TextBuffer + ?Sized>(&self, buffer: &B) -> bool {
        self.line < buffer.line_count() && self.column <= buffer.line_length(self.line)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

pub const fn start_of_buffer() -> Position {
    Position::new(0, 0)
}

/// Last column of the last line
pub fn end_of_buffer<B: TextBuffer + ?Sized>(buffer: &B) -> Position {
    end_of_line(buffer, buffer.line_count() - 1)
}

/// Position at the end of `line`. `line` must exist in the buffer.
pub fn end_of_line<B: TextBuffer + ?Sized>(buffer: &B, line: usize) -> Position {
    Position::new(line, buffer.line_length(line))
}

/// One character earlier, wrapping to the end of the previous line.
/// Returns `(0, 0)` unchanged.
pub fn decrement_one<B: TextBuffer + ?Sized>(buffer: &B, position: Position) -> Position {
    if position.column != 0 {
        return Position::new(position.line, position.column - 1);
    }
    if position.line != 0 {
        return end_of_line(buffer, position.line - 1);
    }
    position
}

/// One character later, wrapping to the start of the next line.
/// Returns the end of the buffer unchanged.
pub fn increment_one<B: TextBuffer + ?Sized>(buffer: &B, position: Position) -> Position {
    if position.column < buffer.line_length(position.line) {
        return Position::new(position.line, position.column + 1);
    }
    if position.line + 1 < buffer.line_count() {
        return Position::new(position.line + 1, 0);
    }
    position
}

/// Character immediately before `position` on the same line.
///
/// There is no lookback across lines: column 0 yields `None`.
pub fn char_before_position<B: TextBuffer + ?Sized>(
    buffer: &B,
    position: Position,
) -> Option<char> {
    if position.column == 0 {
        return None;
    }
    let before = Position::new(position.line, position.column - 1);
    buffer.substring(before, position).chars().next()
}

/// Character immediately after `position`; `None` at end of line.
pub fn char_after_position<B: TextBuffer + ?Sized>(
    buffer: &B,
    position: Position,
) -> Option<char> {
    if position == end_of_line(buffer, position.line) {
        return None;
    }
    let after = Position::new(position.line, position.column + 1);
    buffer.substring(position, after).chars().next()
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
