//! Variable definedness check.
//!
//! Names are looked up through [`VarLookup`]; nothing is ever evaluated.
//! The shell glue passes the values of declared variables as explicit
//! bindings, since unexported shell variables never reach this process.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::status::{CheckFailure, CheckResult};

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern compiles")
});

/// Whether `name` is a valid shell variable identifier.
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// What `var_assert` requires of each variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarMode {
    /// Declared, possibly empty.
    #[default]
    Declared,
    /// Declared and holding a non-empty string.
    NonEmpty,
}

/// Name to value lookup.
pub trait VarLookup {
    /// The value of `name`, or `None` if it is not declared.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The environment of this process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VarLookup for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

/// Explicit bindings, optionally layered over the process environment.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: HashMap<String, String>,
    inherit_env: bool,
}

impl Bindings {
    /// Bindings that consult only what was bound.
    pub fn isolated() -> Self {
        Self::default()
    }

    /// Bindings that fall back to the process environment.
    pub fn inheriting() -> Self {
        Self {
            values: HashMap::new(),
            inherit_env: true,
        }
    }

    /// Bind `name` to `value`, replacing any earlier binding.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder form of [`bind`](Self::bind).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.bind(name, value);
        self
    }
}

impl VarLookup for Bindings {
    fn lookup(&self, name: &str) -> Option<String> {
        match self.values.get(name) {
            Some(value) => Some(value.clone()),
            None if self.inherit_env => ProcessEnv.lookup(name),
            None => None,
        }
    }
}

/// Parse a `NAME=VALUE` binding. The value may be empty or contain `=`.
pub fn parse_binding(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    if !is_identifier(name) {
        return Err(format!("invalid variable name '{}'", name));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Confirm every named variable satisfies `mode`.
///
/// Stops at the first variable that does not.
pub fn var_assert<L>(lookup: &L, names: &[String], mode: VarMode) -> CheckResult
where
    L: VarLookup + ?Sized,
{
    if names.is_empty() {
        return Err(CheckFailure::NoTargets {
            what: "variable names",
        });
    }

    for name in names {
        if !is_identifier(name) {
            return Err(CheckFailure::InvalidName {
                what: "variable",
                name: name.clone(),
            });
        }
        match (lookup.lookup(name), mode) {
            (None, _) => return Err(CheckFailure::VariableUnset { name: name.clone() }),
            (Some(value), VarMode::NonEmpty) if value.is_empty() => {
                return Err(CheckFailure::VariableEmpty { name: name.clone() })
            }
            (Some(_), _) => tracing::debug!("{} is set", name),
        }
    }
    Ok(())
}
