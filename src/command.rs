//! Host command surface
//!
//! A host (an editor, or the command-line binary) implements [`Host`] and
//! dispatches command identifiers through [`execute_command`]. The only
//! command is [`FORMAT_LIST`], which currently resolves the scope around the
//! cursor and reports it; reformatting the list inside it is not implemented.

use serde::{Deserialize, Serialize};

use crate::buffer::TextBuffer;
use crate::error::CommandError;
use crate::position::Position;
use crate::scope::get_current_scope;

pub const FORMAT_LIST: &str = "list-formatter.formatList";

/// An open document with a cursor
pub trait Editor {
    fn document(&self) -> &dyn TextBuffer;
    fn cursor(&self) -> Position;
}

pub trait Host {
    fn active_editor(&self) -> Option<&dyn Editor>;
    fn show_information_message(&mut self, message: &str);
}

/// Serialization used for the notification text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    #[default]
    Json,
    Text,
}

/// Which span of the scope is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpanMode {
    /// Positions of the bracket characters themselves
    #[default]
    Brackets,
    /// Span strictly between the brackets
    Contents,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageOptions {
    pub format: MessageFormat,
    pub span: SpanMode,
}

/// Run the command registered under `id` against `host`.
pub fn execute_command<H: Host + ?Sized>(
    host: &mut H,
    id: &str,
    options: &MessageOptions,
) -> Result<(), CommandError> {
    match id {
        FORMAT_LIST => format_list(host, options),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

/// Resolve the scope around the active editor's cursor and show it.
///
/// Silently does nothing without an active editor. Resolver failures are
/// returned untouched for the host to report.
pub fn format_list<H: Host + ?Sized>(
    host: &mut H,
    options: &MessageOptions,
) -> Result<(), CommandError> {
    let message = {
        let Some(editor) = host.active_editor() else {
            #[cfg(debug_assertions)]
            log::debug!("{} invoked without an active editor", FORMAT_LIST);
            return Ok(());
        };

        let scope = get_current_scope(editor.document(), editor.cursor())?;

        match (options.format, options.span) {
            (MessageFormat::Json, SpanMode::Brackets) => serde_json::to_string(&scope)?,
            (MessageFormat::Json, SpanMode::Contents) => {
                serde_json::to_string(&scope.contents())?
            }
            (MessageFormat::Text, SpanMode::Brackets) => scope.to_string(),
            (MessageFormat::Text, SpanMode::Contents) => scope.contents().to_string(),
        }
    };

    host.show_information_message(&message);
    Ok(())
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
