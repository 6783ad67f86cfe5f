//! Text buffer abstraction
//!
//! The resolver only ever reads a buffer through [`TextBuffer`], so any host
//! that can answer line counts, line lengths and substrings can be scanned.
//! [`LineBuffer`] is the owned implementation used by the command-line host.

use crate::position::Position;

/// Read-only line/column view over a document.
///
/// Columns count `char`s. A line never includes its line terminator.
pub trait TextBuffer {
    /// Number of lines; always at least 1.
    fn line_count(&self) -> usize;

    /// Length of `line` in chars.
    fn line_length(&self, line: usize) -> usize;

    /// Text between two positions, line breaks included.
    fn substring(&self, start: Position, end: Position) -> String;
}

/// One line, decoded to chars once so column access is an index
#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    chars: Vec<char>,
    /// Terminator that ended this line; empty on the last line
    eol: &'static str,
}

/// Document stored as a vector of lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<Line>,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Empty buffer with a single empty line
    pub fn new() -> Self {
        Self {
            lines: vec![Line {
                chars: Vec::new(),
                eol: "",
            }],
        }
    }

    /// Split `text` into lines.
    ///
    /// A trailing line break produces a final empty line, matching how editors
    /// count lines. Each line keeps its own terminator, so mixed `\n` and
    /// `\r\n` documents round-trip.
    pub fn from_text(text: &str) -> Self {
        let mut pieces = text.split('\n').peekable();
        let mut lines = Vec::new();

        while let Some(piece) = pieces.next() {
            let line = if pieces.peek().is_none() {
                Line {
                    chars: piece.chars().collect(),
                    eol: "",
                }
            } else if let Some(stripped) = piece.strip_suffix('\r') {
                Line {
                    chars: stripped.chars().collect(),
                    eol: "\r\n",
                }
            } else {
                Line {
                    chars: piece.chars().collect(),
                    eol: "\n",
                }
            };
            lines.push(line);
        }

        Self { lines }
    }

    /// Convert a flat char offset into a position.
    ///
    /// Line terminators count as their full length; an offset that lands inside
    /// a `\r\n` pair resolves to the end of that line. Returns `None` past the
    /// end of the buffer.
    pub fn position_at(&self, offset: usize) -> Option<Position> {
        let mut remaining = offset;

        for (index, line) in self.lines.iter().enumerate() {
            let len = line.chars.len();
            if remaining <= len {
                return Some(Position::new(index, remaining));
            }
            remaining -= len;
            if remaining < line.eol.len() {
                return Some(Position::new(index, len));
            }
            remaining -= line.eol.len();
        }

        None
    }
}

impl TextBuffer for LineBuffer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_length(&self, line: usize) -> usize {
        self.lines[line].chars.len()
    }

    fn substring(&self, start: Position, end: Position) -> String {
        let (start, end) = if end < start { (end, start) } else { (start, end) };
        let last = end.line.min(self.lines.len().saturating_sub(1));

        let mut out = String::new();
        for index in start.line..=last {
            let Some(line) = self.lines.get(index) else {
                break;
            };
            let from = if index == start.line { start.column } else { 0 };
            let to = if index == end.line {
                end.column
            } else {
                line.chars.len()
            };
            let to = to.min(line.chars.len());
            if from < to {
                out.extend(&line.chars[from..to]);
            }
            if index != end.line {
                out.push_str(line.eol);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod buffer_tests;
