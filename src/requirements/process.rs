//! Process liveness check.

use super::status::{CheckFailure, CheckResult};

/// Whether a process with this id exists.
///
/// Sends signal 0. A permission error still means the process exists.
#[cfg(unix)]
pub fn process_exists(pid: i32) -> bool {
    if pid <= 0 {
        return false;
    }
    // SAFETY: signal 0 performs only the existence and permission checks.
    let rc = unsafe { libc::kill(pid, 0) };
    rc == 0 || std::io::Error::last_os_error().raw_os_error() == Some(libc::EPERM)
}

/// Liveness probing is not available on this platform.
#[cfg(not(unix))]
pub fn process_exists(_pid: i32) -> bool {
    false
}

/// Parse a PID argument. Only positive integers name a single process.
pub fn parse_pid(raw: &str) -> Result<i32, CheckFailure> {
    match raw.trim().parse::<i32>() {
        Ok(pid) if pid > 0 => Ok(pid),
        _ => Err(CheckFailure::InvalidPid {
            value: raw.to_string(),
        }),
    }
}

/// Confirm one PID names a running process.
pub fn check_pid(pid: i32) -> CheckResult {
    if pid <= 0 {
        return Err(CheckFailure::InvalidPid {
            value: pid.to_string(),
        });
    }
    if !process_exists(pid) {
        return Err(CheckFailure::ProcessNotRunning { pid });
    }
    tracing::debug!("pid {} is alive", pid);
    Ok(())
}

/// Confirm every PID names a running process.
///
/// Stops at the first PID that does not.
pub fn pid_alive(pids: &[i32]) -> CheckResult {
    if pids.is_empty() {
        return Err(CheckFailure::NoTargets { what: "pid" });
    }
    pids.iter().try_for_each(|&pid| check_pid(pid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pid_accepts_positive() {
        assert_eq!(parse_pid("42"), Ok(42));
        assert_eq!(parse_pid(" 7 "), Ok(7));
    }

    #[test]
    fn parse_pid_rejects_others() {
        for bad in ["0", "-1", "abc", "", "1.5"] {
            assert!(parse_pid(bad).is_err(), "{:?}", bad);
        }
    }

    #[test]
    fn empty_pid_list_is_malformed() {
        assert!(pid_alive(&[]).unwrap_err().is_malformed());
    }

    #[test]
    fn non_positive_pid_is_malformed() {
        assert_eq!(
            pid_alive(&[0]),
            Err(CheckFailure::InvalidPid { value: "0".into() })
        );
    }

    #[cfg(unix)]
    #[test]
    fn current_process_is_alive() {
        let pid = std::process::id() as i32;
        assert!(process_exists(pid));
        assert!(pid_alive(&[pid]).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn reaped_child_is_not_alive() {
        let mut child = std::process::Command::new("true").spawn().unwrap();
        let pid = child.id() as i32;
        child.wait().unwrap();
        assert_eq!(
            pid_alive(&[pid]),
            Err(CheckFailure::ProcessNotRunning { pid })
        );
    }
}
