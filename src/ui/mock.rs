//! Capturing UI for tests.
//!
//! Everything a command says is recorded in order, tagged with the channel
//! it went to. Successes are captured whatever the output mode.
//!
//! # Example
//!
//! ```
//! use shassert::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.error("command not found: ll (any invocable)");
//! ui.output("a8Fq2");
//!
//! assert!(ui.has_error("ll"));
//! assert_eq!(ui.outputs(), ["a8Fq2"]);
//! ```

use super::UserInterface;

/// Where a captured line was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Success,
    Error,
    Output,
}

#[derive(Debug, Default)]
pub struct MockUI {
    log: Vec<(Channel, String)>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every captured line, in the order it was emitted.
    pub fn log(&self) -> &[(Channel, String)] {
        &self.log
    }

    /// Lines sent to one channel.
    pub fn on(&self, channel: Channel) -> Vec<&str> {
        self.log
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, text)| text.as_str())
            .collect()
    }

    pub fn successes(&self) -> Vec<&str> {
        self.on(Channel::Success)
    }

    pub fn errors(&self) -> Vec<&str> {
        self.on(Channel::Error)
    }

    pub fn outputs(&self) -> Vec<&str> {
        self.on(Channel::Output)
    }

    fn contains(&self, channel: Channel, needle: &str) -> bool {
        self.log
            .iter()
            .any(|(c, text)| *c == channel && text.contains(needle))
    }

    pub fn has_error(&self, needle: &str) -> bool {
        self.contains(Channel::Error, needle)
    }

    pub fn has_success(&self, needle: &str) -> bool {
        self.contains(Channel::Success, needle)
    }

    fn push(&mut self, channel: Channel, text: &str) {
        self.log.push((channel, text.to_string()));
    }
}

impl UserInterface for MockUI {
    fn success(&mut self, msg: &str) {
        self.push(Channel::Success, msg);
    }

    fn error(&mut self, msg: &str) {
        self.push(Channel::Error, msg);
    }

    fn output(&mut self, data: &str) {
        self.push(Channel::Output, data);
    }
}
