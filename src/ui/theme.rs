//! Visual theme and styling.

use console::Style;

/// What a reported line means to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Pass,
    Fail,
}

impl Tone {
    /// Leading icon for this tone.
    pub fn icon(self) -> &'static str {
        match self {
            Tone::Pass => "✓",
            Tone::Fail => "✗",
        }
    }
}

/// Styles used by [`TerminalUI`](super::TerminalUI).
#[derive(Debug, Clone)]
pub struct ShassertTheme {
    pass: Style,
    fail: Style,
}

impl Default for ShassertTheme {
    fn default() -> Self {
        Self::colored()
    }
}

impl ShassertTheme {
    /// Green passes, bold red failures.
    pub fn colored() -> Self {
        Self {
            pass: Style::new().green(),
            fail: Style::new().red().bold(),
        }
    }

    /// Icons only.
    pub fn plain() -> Self {
        Self {
            pass: Style::new(),
            fail: Style::new(),
        }
    }

    /// Colored unless colors are disabled or stderr is redirected.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Render `msg` with the icon and style for `tone`.
    pub fn paint(&self, tone: Tone, msg: &str) -> String {
        let style = match tone {
            Tone::Pass => &self.pass,
            Tone::Fail => &self.fail,
        };
        style.apply_to(format!("{} {}", tone.icon(), msg)).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stderr().is_term()
}
