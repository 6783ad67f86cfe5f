// Configuration type definitions

use serde::Deserialize;

use crate::command::{MessageFormat, MessageOptions, SpanMode};

/// Notification output section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: MessageFormat,
    #[serde(default)]
    pub span: SpanMode,
}

impl From<OutputConfig> for MessageOptions {
    fn from(output: OutputConfig) -> Self {
        MessageOptions {
            format: output.format,
            span: output.span,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
