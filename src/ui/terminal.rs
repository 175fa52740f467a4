//! Styled terminal UI.

use console::Term;
use std::io::Write;

use super::theme::Tone;
use super::{NonInteractiveUI, OutputMode, ShassertTheme, UserInterface};

/// Terminal UI: colored icons on diagnostics, raw data on stdout.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ShassertTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        Self::with_theme(mode, ShassertTheme::detect())
    }

    pub fn with_theme(mode: OutputMode, theme: ShassertTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn success(&mut self, msg: &str) {
        if self.mode.shows_success() {
            writeln!(self.out, "{}", self.theme.paint(Tone::Pass, msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.paint(Tone::Fail, msg)).ok();
    }

    fn output(&mut self, data: &str) {
        writeln!(self.out, "{}", data).ok();
    }
}

/// Pick the UI for this run.
///
/// Styling is only used when interactive and stderr is a terminal, since
/// that is where diagnostics land.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stderr().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
