//! Plain UI for pipes, scripts and CI.

use std::io::Write;

use super::{OutputMode, Tone, UserInterface};

/// UI implementation without styling.
///
/// Used whenever stderr is not a terminal, which covers the common case of
/// a check run from a script.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn success(&mut self, msg: &str) {
        if self.mode.shows_success() {
            println!("{} {}", Tone::Pass.icon(), msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{} {}", Tone::Fail.icon(), msg);
    }

    fn output(&mut self, data: &str) {
        let mut stdout = std::io::stdout().lock();
        // A closed pipe (e.g. `| head -c 4`) is not worth a panic.
        let _ = writeln!(stdout, "{}", data);
    }
}
