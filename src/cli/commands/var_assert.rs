//! Variable assertion command implementation.
//!
//! A standalone process only sees exported variables, so the shell glue
//! from `shassert shell-init` forwards declared values with `--bind` and
//! passes `--no-env`.

use crate::cli::args::VarAssertArgs;
use crate::error::Result;
use crate::requirements::{var_assert, Bindings, VarMode};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The var-assert command implementation.
pub struct VarAssertCommand {
    args: VarAssertArgs,
}

impl VarAssertCommand {
    /// Create a new var-assert command.
    pub fn new(args: VarAssertArgs) -> Self {
        Self { args }
    }

    /// The lookup this command checks against.
    pub fn bindings(&self) -> Bindings {
        let mut bindings = if self.args.no_env {
            Bindings::isolated()
        } else {
            Bindings::inheriting()
        };
        for (name, value) in &self.args.bind {
            bindings.bind(name.as_str(), value.as_str());
        }
        bindings
    }
}

impl Command for VarAssertCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mode = if self.args.non_empty {
            VarMode::NonEmpty
        } else {
            VarMode::Declared
        };
        let outcome = var_assert(&self.bindings(), &self.args.names, mode);
        Ok(CommandResult::from_check(ui, outcome, || {
            format!("set: {}", self.args.names.join(", "))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn args(non_empty: bool, bind: &[(&str, &str)], names: &[&str]) -> VarAssertArgs {
        VarAssertArgs {
            non_empty,
            no_env: true,
            bind: bind
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
            names: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn run(args: VarAssertArgs) -> (CommandResult, MockUI) {
        let mut ui = MockUI::new();
        let result = VarAssertCommand::new(args).execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn bound_variable_passes() {
        let (result, ui) = run(args(false, &[("GREETING", "hi")], &["GREETING"]));
        assert!(result.success);
        assert!(ui.has_success("GREETING"));
    }

    #[test]
    fn empty_binding_depends_on_mode() {
        let (result, _) = run(args(false, &[("EMPTY", "")], &["EMPTY"]));
        assert!(result.success);

        let (result, ui) = run(args(true, &[("EMPTY", "")], &["EMPTY"]));
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("variable is empty: EMPTY"));
    }

    #[test]
    fn no_env_hides_process_environment() {
        // PATH is set in any test environment.
        let (result, ui) = run(args(false, &[], &["PATH"]));
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("variable not set: PATH"));

        let mut inherit = args(false, &[], &["PATH"]);
        inherit.no_env = false;
        let (result, _) = run(inherit);
        assert!(result.success);
    }

    #[test]
    fn first_unset_name_is_reported() {
        let (result, ui) = run(args(false, &[("A", "1")], &["A", "B", "C"]));
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("variable not set: B"));
        assert!(!ui.has_error("C"));
    }

    #[test]
    fn invalid_name_is_malformed() {
        let (result, ui) = run(args(false, &[], &["1BAD"]));
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("1BAD"));
    }
}
