//! Shell detection and integration scripts.

pub mod init;
pub mod platform;

pub use init::{init_script, shell_quote};
pub use platform::{detect_shell, is_ci, shell_executable, ShellType};
