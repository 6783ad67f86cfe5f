use std::fmt;

use thiserror::Error;

use crate::position::Position;

/// Which half of a scope resolution hit the buffer boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    Backward,
    Forward,
}

impl fmt::Display for ScanDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ScanDirection::Backward => {
                "got to beginning of file without finding an unmatched open bracket"
            }
            ScanDirection::Forward => "got to end of file without finding an unmatched close bracket",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("{0:?} was not a bracket")]
    InvalidBracket(char),

    #[error("mismatched brackets {open}, {close}")]
    MismatchedBrackets { open: char, close: char },

    #[error("{0}")]
    NoEnclosingScope(ScanDirection),

    #[error("cursor {0} is outside the buffer")]
    InvalidCursor(Position),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error(transparent)]
    Scope(#[from] ScopeError),

    #[error("failed to serialize scope: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ScopeFinderError {
    #[error("offset {offset} is past the end of the input")]
    OffsetOutOfRange { offset: usize },

    #[error("cursor {0} is outside the input")]
    CursorOutOfRange(Position),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
