//! Random string command implementation.

use rand::Rng;

use crate::cli::args::RandStrArgs;
use crate::config::ShassertConfig;
use crate::error::Result;
use crate::random::{random_string, Charset};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The rand-str command implementation.
pub struct RandStrCommand {
    length: usize,
    charset: Charset,
}

impl RandStrCommand {
    /// Create a new rand-str command, filling unset options from config.
    pub fn new(args: RandStrArgs, config: &ShassertConfig) -> Self {
        Self {
            length: args.length.unwrap_or(config.random.length),
            charset: args.charset.unwrap_or(config.random.charset),
        }
    }

    /// Generate with an explicit RNG.
    pub fn execute_with<R: Rng>(
        &self,
        rng: &mut R,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        if self.length == 0 {
            ui.error("length must be greater than zero");
            return Ok(CommandResult::failure(1));
        }
        tracing::debug!("drawing {} characters from {}", self.length, self.charset);
        ui.output(&random_string(rng, self.length, self.charset));
        Ok(CommandResult::success())
    }
}

impl Command for RandStrCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(&mut rand::thread_rng(), ui)
    }
}
