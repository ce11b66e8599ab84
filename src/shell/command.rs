//! Shell command execution.

use crate::error::{ArchaiError, Result};
use std::process::Command;

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Execute a command line through the platform shell, capturing output.
pub fn execute(command: &str) -> Result<CommandResult> {
    let (shell, flag) = if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    };

    let output = Command::new(shell)
        .arg(flag)
        .arg(command)
        .output()
        .map_err(|_| ArchaiError::CommandFailed {
            command: command.to_string(),
            code: None,
        })?;

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}

/// Check if a command succeeds.
///
/// The command is spawned directly (no shell), with whitespace-separated
/// arguments.
pub fn command_succeeds(command: &str) -> bool {
    let parts: Vec<&str> = command.split_whitespace().collect();
    if parts.is_empty() {
        return false;
    }

    Command::new(parts[0])
        .args(&parts[1..])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_captures_stdout() {
        let result = execute("echo hello").unwrap();
        assert!(result.success);
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_reports_failure() {
        let result = execute("exit 3").unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn command_succeeds_helper_false() {
        assert!(!command_succeeds("this-command-does-not-exist-12345"));
    }

    #[test]
    fn command_succeeds_empty_is_false() {
        assert!(!command_succeeds(""));
    }
}
