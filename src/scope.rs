//! Innermost bracket scope around a cursor
//!
//! Resolution is two scans sharing nothing but the opener found by the first:
//!
//! - backward from the cursor, inspecting the char *before* each position,
//!   until an opener with no pending closer is found
//! - forward from the cursor, inspecting the char *after* each position,
//!   until a closer with no pending opener is found
//!
//! Looking on opposite sides keeps the char under the cursor from being seen
//! by both scans. Nesting is validated at every depth in both directions.

use std::fmt;

use serde::Serialize;

use crate::bracket::{BracketKind, corresponds, is_close, is_open};
use crate::buffer::TextBuffer;
use crate::error::{ScanDirection, ScopeError};
use crate::position::{
    Position, char_after_position, char_before_position, decrement_one, end_of_buffer,
    increment_one, start_of_buffer,
};

/// Span between two positions, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Positions of a matched bracket pair.
///
/// `start` is the opening bracket's own position and `end` the closing
/// bracket's, so `buffer.substring(start, end + 1)` spans both brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScopeRange {
    pub start: Position,
    pub end: Position,
    pub kind: BracketKind,
}

impl ScopeRange {
    /// Text strictly between the brackets
    pub fn contents(&self) -> Span {
        Span {
            start: Position::new(self.start.line, self.start.column + 1),
            end: self.end,
        }
    }
}

impl fmt::Display for ScopeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Find the innermost bracket pair enclosing `cursor`.
pub fn get_current_scope<B: TextBuffer + ?Sized>(
    buffer: &B,
    cursor: Position,
) -> Result<ScopeRange, ScopeError> {
    if !cursor.is_valid_in(buffer) {
        return Err(ScopeError::InvalidCursor(cursor));
    }

    let (start, open) = find_unmatched_open(buffer, cursor)?;
    let end = find_unmatched_close(buffer, cursor, open)?;
    let kind = BracketKind::from_char(open).ok_or(ScopeError::InvalidBracket(open))?;

    #[cfg(debug_assertions)]
    log::debug!("Scope at {} resolved to {:?} {}..{}", cursor, kind, start, end);

    Ok(ScopeRange { start, end, kind })
}

fn find_unmatched_open<B: TextBuffer + ?Sized>(
    buffer: &B,
    cursor: Position,
) -> Result<(Position, char), ScopeError> {
    let beginning = start_of_buffer();
    let mut bracket_stack: Vec<char> = Vec::new();
    let mut current = cursor;

    while current != beginning {
        if let Some(ch) = char_before_position(buffer, current) {
            if is_close(ch) {
                bracket_stack.push(ch);
            } else if is_open(ch) {
                match bracket_stack.pop() {
                    // char_before_position only yields Some off column 0, so
                    // this step stays on the opener's line
                    None => return Ok((decrement_one(buffer, current), ch)),
                    Some(close) => {
                        if !corresponds(ch, close)? {
                            return Err(ScopeError::MismatchedBrackets { open: ch, close });
                        }
                    }
                }
            }
        }
        current = decrement_one(buffer, current);
    }

    #[cfg(debug_assertions)]
    log::debug!("Backward scan from {} reached start of buffer", cursor);

    Err(ScopeError::NoEnclosingScope(ScanDirection::Backward))
}

fn find_unmatched_close<B: TextBuffer + ?Sized>(
    buffer: &B,
    cursor: Position,
    open: char,
) -> Result<Position, ScopeError> {
    let end = end_of_buffer(buffer);
    let mut bracket_stack: Vec<char> = Vec::new();
    let mut current = cursor;

    while current != end {
        if let Some(ch) = char_after_position(buffer, current) {
            if is_open(ch) {
                bracket_stack.push(ch);
            } else if is_close(ch) {
                match bracket_stack.pop() {
                    None => {
                        if corresponds(open, ch)? {
                            return Ok(current);
                        }
                        return Err(ScopeError::MismatchedBrackets { open, close: ch });
                    }
                    Some(nested) => {
                        if !corresponds(ch, nested)? {
                            return Err(ScopeError::MismatchedBrackets {
                                open: nested,
                                close: ch,
                            });
                        }
                    }
                }
            }
        }
        current = increment_one(buffer, current);
    }

    #[cfg(debug_assertions)]
    log::debug!("Forward scan from {} reached end of buffer", cursor);

    Err(ScopeError::NoEnclosingScope(ScanDirection::Forward))
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod scope_tests;
