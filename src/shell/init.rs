//! Shell init scripts.
//!
//! The script defines one function per helper. Most simply forward to the
//! binary; `require` and `var_assert` first collect what only the live
//! shell knows (alias/function names, unexported variable values).

use super::platform::ShellType;
use crate::requirements::command::SHELL_NAMES_ENV;

const EXE_PLACEHOLDER: &str = "__SHASSERT_EXE__";
const NAMES_ENV_PLACEHOLDER: &str = "__SHASSERT_NAMES_ENV__";

const FORWARDERS: &[(&str, &str)] = &[
    ("file_assert", "file-assert"),
    ("num_in_range", "num-in-range"),
    ("pid_alive", "pid-alive"),
    ("rand_str", "rand-str"),
    ("rand_file", "rand-file"),
];

const BASH_REQUIRE: &str = r#"require() {
    __SHASSERT_NAMES_ENV__="$(compgen -a; compgen -A function; compgen -b; compgen -k)" \
        command __SHASSERT_EXE__ require "$@"
}

var_assert() {
    local __shassert_arg
    local -a __shassert_binds=()
    for __shassert_arg in "$@"; do
        if [[ $__shassert_arg =~ ^[A-Za-z_][A-Za-z0-9_]*$ ]] && [[ -v $__shassert_arg ]]; then
            __shassert_binds+=(--bind "$__shassert_arg=${!__shassert_arg}")
        fi
    done
    command __SHASSERT_EXE__ var-assert --no-env ${__shassert_binds[@]+"${__shassert_binds[@]}"} "$@"
}
"#;

const ZSH_REQUIRE: &str = r#"require() {
    __SHASSERT_NAMES_ENV__="${(k)aliases} ${(k)functions} ${(k)builtins} ${(k)reswords}" \
        command __SHASSERT_EXE__ require "$@"
}

var_assert() {
    local __shassert_arg
    local -a __shassert_binds
    __shassert_binds=()
    for __shassert_arg in "$@"; do
        if [[ $__shassert_arg =~ '^[A-Za-z_][A-Za-z0-9_]*$' ]] && (( ${+parameters[$__shassert_arg]} )); then
            __shassert_binds+=(--bind "$__shassert_arg=${(P)__shassert_arg}")
        fi
    done
    command __SHASSERT_EXE__ var-assert --no-env "${__shassert_binds[@]}" "$@"
}
"#;

/// Quote `s` for safe use as a single shell word.
pub fn shell_quote(s: &str) -> String {
    if !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"/._-+:,=@".contains(&b))
    {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Render the init script for `shell`, invoking the binary at `exe`.
pub fn init_script(shell: ShellType, exe: &str) -> String {
    let exe = shell_quote(exe);
    let mut script = format!(
        "# shassert shell integration for {shell}\n\
         # Add this line to {rc}:\n\
         #   eval \"$({exe} shell-init {shell})\"\n\n",
        shell = shell,
        rc = shell.rc_file(),
        exe = exe,
    );

    let body = match shell {
        ShellType::Bash => BASH_REQUIRE,
        ShellType::Zsh => ZSH_REQUIRE,
    };
    script.push_str(
        &body
            .replace(NAMES_ENV_PLACEHOLDER, SHELL_NAMES_ENV)
            .replace(EXE_PLACEHOLDER, &exe),
    );

    for (function, subcommand) in FORWARDERS {
        script.push_str(&format!(
            "\n{}() {{\n    command {} {} \"$@\"\n}}\n",
            function, exe, subcommand
        ));
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_defines_every_helper() {
        let script = init_script(ShellType::Bash, "/usr/local/bin/shassert");
        for function in [
            "require()",
            "var_assert()",
            "file_assert()",
            "num_in_range()",
            "pid_alive()",
            "rand_str()",
            "rand_file()",
        ] {
            assert!(script.contains(function), "missing {}", function);
        }
        assert!(script.contains("compgen -A function"));
        assert!(script.contains("SHASSERT_SHELL_NAMES="));
        assert!(!script.contains("__SHASSERT_"));
    }

    #[test]
    fn zsh_script_uses_parameter_table() {
        let script = init_script(ShellType::Zsh, "shassert");
        assert!(script.contains("${(k)functions}"));
        assert!(script.contains("${(P)__shassert_arg}"));
        assert!(script.contains("~/.zshrc"));
    }

    #[test]
    fn forwarders_call_kebab_subcommands() {
        let script = init_script(ShellType::Bash, "shassert");
        assert!(script.contains("command shassert file-assert \"$@\""));
        assert!(script.contains("command shassert var-assert --no-env"));
    }

    #[test]
    fn executable_path_is_quoted() {
        let script = init_script(ShellType::Bash, "/opt/my tools/shassert");
        assert!(script.contains("command '/opt/my tools/shassert' require"));
    }

    #[test]
    fn shell_quote_cases() {
        assert_eq!(shell_quote("plain/path-1.0"), "plain/path-1.0");
        assert_eq!(shell_quote("has space"), "'has space'");
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
        assert_eq!(shell_quote(""), "''");
    }
}
