//! External tool probing and package installation.

use std::process::Command;

use crate::error::{ArchaiError, Result};
use crate::shell::{command_succeeds, execute, is_elevated};

use super::version::extract_version;

/// Capability interface over the host's external tools.
///
/// The setup flow only talks to the host through this trait, so tests can
/// substitute a scripted implementation.
pub trait SystemTools {
    /// Check whether a tool is present on PATH.
    fn tool_present(&self, name: &str) -> bool;

    /// Probe a tool's version string, if the tool responds to `--version`.
    fn tool_version(&self, name: &str) -> Option<String>;

    /// Install the given packages through the system package manager.
    fn install_packages(&self, packages: &[&str]) -> Result<()>;
}

/// Real implementation shelling out to pacman.
pub struct PacmanTools {
    elevated: bool,
}

impl PacmanTools {
    /// Create tools bound to the current process's privilege level.
    pub fn new() -> Self {
        Self {
            elevated: is_elevated(),
        }
    }
}

impl Default for PacmanTools {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemTools for PacmanTools {
    fn tool_present(&self, name: &str) -> bool {
        command_succeeds(&format!("{} --version", name))
    }

    fn tool_version(&self, name: &str) -> Option<String> {
        let output = Command::new(name).arg("--version").output().ok()?;
        if !output.status.success() {
            return None;
        }
        extract_version(&String::from_utf8_lossy(&output.stdout))
    }

    fn install_packages(&self, packages: &[&str]) -> Result<()> {
        let mut command = String::new();
        if !self.elevated {
            command.push_str("sudo ");
        }
        command.push_str("pacman -S --needed --noconfirm ");
        command.push_str(&packages.join(" "));

        tracing::debug!("installing packages: {}", command);

        let result = execute(&command)?;
        if result.success {
            return Ok(());
        }

        let detail = result.stderr.trim();
        Err(ArchaiError::DependencyInstall {
            message: if detail.is_empty() {
                format!("pacman exited with code {:?}", result.exit_code)
            } else {
                detail.to_string()
            },
        })
    }
}
