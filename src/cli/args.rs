//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::CONFIG_ENV;
use crate::random::Charset;
use crate::requirements::vars::parse_binding;
use crate::shell::ShellType;

/// Shassert - precondition checks for shell scripts.
#[derive(Debug, Parser)]
#[command(name = "shassert")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (replaces config discovery)
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Report passing checks too
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report failures
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Require that every NAME resolves to a command
    Require(RequireArgs),

    /// Assert that files exist with a size inside the given bounds
    #[command(visible_alias = "file_assert")]
    FileAssert(FileAssertArgs),

    /// Check that an integer lies within MIN:MAX (inclusive)
    #[command(visible_alias = "num_in_range")]
    NumInRange(NumInRangeArgs),

    /// Assert that variables are set (or non-empty)
    #[command(visible_alias = "var_assert")]
    VarAssert(VarAssertArgs),

    /// Assert that processes are running
    #[command(visible_alias = "pid_alive")]
    PidAlive(PidAliveArgs),

    /// Print a random string
    #[command(visible_alias = "rand_str")]
    RandStr(RandStrArgs),

    /// Write a file of random bytes
    #[command(visible_alias = "rand_file")]
    RandFile(RandFileArgs),

    /// Evaluate every requirement in a manifest
    Check(CheckArgs),

    /// Print shell functions wrapping each helper
    ShellInit(ShellInitArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `require` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RequireArgs {
    /// Only accept executables on the search path (no aliases, functions or builtins)
    #[arg(short = 'x', long)]
    pub executable: bool,

    /// Command names to resolve
    pub names: Vec<String>,
}

/// Arguments for the `file-assert` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FileAssertArgs {
    /// Minimum size in bytes (default 0)
    #[arg(long, value_name = "BYTES")]
    pub minsize: Option<u64>,

    /// Maximum size in bytes (default from config `max_file_size`)
    #[arg(long, value_name = "BYTES")]
    pub maxsize: Option<u64>,

    /// Files to check
    pub paths: Vec<PathBuf>,
}

/// Arguments for the `num-in-range` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct NumInRangeArgs {
    /// Integer to check
    #[arg(allow_negative_numbers = true)]
    pub value: Option<String>,

    /// Range specifier, either side optional (e.g. `1:10`, `5:`, `:`)
    #[arg(value_name = "MIN:MAX")]
    pub range: Option<String>,
}

/// Arguments for the `var-assert` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VarAssertArgs {
    /// Also fail when a variable is set to the empty string
    #[arg(short, long)]
    pub non_empty: bool,

    /// Only consult `--bind` values, not the process environment
    #[arg(long)]
    pub no_env: bool,

    /// Bind a variable for this check
    #[arg(long, value_name = "NAME=VALUE", value_parser = parse_binding)]
    pub bind: Vec<(String, String)>,

    /// Variable names to check
    pub names: Vec<String>,
}

/// Arguments for the `pid-alive` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PidAliveArgs {
    /// Process ids to check
    #[arg(allow_negative_numbers = true)]
    pub pids: Vec<String>,
}

/// Arguments for the `rand-str` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RandStrArgs {
    /// Number of characters (default from config `random.length`)
    #[arg(short = 'n', long)]
    pub length: Option<usize>,

    /// Character set to draw from (default from config `random.charset`)
    #[arg(long, value_enum)]
    pub charset: Option<Charset>,
}

/// Arguments for the `rand-file` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RandFileArgs {
    /// File to create
    pub path: PathBuf,

    /// Number of bytes (default from config `random.file_size`)
    #[arg(short, long, value_name = "BYTES")]
    pub size: Option<u64>,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Requirement manifest (default: requirements.yml)
    pub file: Option<PathBuf>,
}

/// Arguments for the `shell-init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShellInitArgs {
    /// Shell to generate for (default: detected from $SHELL)
    #[arg(value_enum)]
    pub shell: Option<ShellType>,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Only list the config files that were loaded
    #[arg(long)]
    pub paths: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
