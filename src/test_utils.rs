//! Shared test utilities for scope-finder
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::buffer::{LineBuffer, TextBuffer};
    use crate::command::{Editor, Host};
    use crate::position::Position;

    /// Test fixture with nested brackets over several lines
    pub const NESTED_SOURCE: &str = "config = {\n    items: [1, (2, 3)],\n    name: \"x\"\n}";

    /// Editor over an owned buffer
    pub struct TestEditor {
        pub buffer: LineBuffer,
        pub cursor: Position,
    }

    impl Editor for TestEditor {
        fn document(&self) -> &dyn TextBuffer {
            &self.buffer
        }

        fn cursor(&self) -> Position {
            self.cursor
        }
    }

    /// Host that records every notification instead of displaying it
    #[derive(Default)]
    pub struct RecordingHost {
        pub editor: Option<TestEditor>,
        pub messages: Vec<String>,
    }

    impl Host for RecordingHost {
        fn active_editor(&self) -> Option<&dyn Editor> {
            self.editor.as_ref().map(|editor| editor as &dyn Editor)
        }

        fn show_information_message(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }

    /// Helper to create a host with `text` open and the cursor at (line, column)
    pub fn host_with(text: &str, line: usize, column: usize) -> RecordingHost {
        RecordingHost {
            editor: Some(TestEditor {
                buffer: LineBuffer::from_text(text),
                cursor: Position::new(line, column),
            }),
            messages: Vec::new(),
        }
    }
}
