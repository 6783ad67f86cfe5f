//! scope-finder library - innermost bracket scope around a cursor
//!
//! [`scope::get_current_scope`] is the resolver; [`command`] is the thin
//! adapter a host drives.

pub mod bracket;
pub mod buffer;
pub mod command;
pub mod config;
pub mod error;
pub mod position;
pub mod scope;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use buffer::{LineBuffer, TextBuffer};
pub use error::{ScanDirection, ScopeError};
pub use position::Position;
pub use scope::{ScopeRange, get_current_scope};
