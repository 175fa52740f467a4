//! Output verbosity.

/// How much a run reports besides failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Report passing checks as well.
    Verbose,
    /// Silent on success, diagnostics on failure.
    #[default]
    Normal,
    /// Like `Normal`, and log warnings are muted too.
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the global `--quiet` / `--verbose` flags.
    ///
    /// `--quiet` wins when both are given.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, true) => Self::Verbose,
            (false, false) => Self::Normal,
        }
    }

    /// Whether passing checks are reported.
    pub fn shows_success(&self) -> bool {
        *self == Self::Verbose
    }

    /// Default log filter directive when neither `--debug` nor `RUST_LOG` is set.
    pub fn log_directive(&self) -> &'static str {
        match self {
            Self::Quiet => "shassert=error",
            Self::Normal | Self::Verbose => "shassert=info",
        }
    }
}
