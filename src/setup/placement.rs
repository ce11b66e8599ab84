//! Installation destinations and the placement choice.

use std::path::PathBuf;

/// Name of the installed executable.
pub const BIN_NAME: &str = "archai";

/// Where the executable should be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementChoice {
    /// System-wide directory, requires elevation.
    System,
    /// Per-user directory, created on demand.
    User,
    /// Leave the executable where it is.
    Skip,
}

impl PlacementChoice {
    /// Parse raw choice input.
    ///
    /// Accepts `1`, `2`, `3`; anything else returns `None` and is treated
    /// by the caller as skip-with-advisory.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::System),
            "2" => Some(Self::User),
            "3" => Some(Self::Skip),
            _ => None,
        }
    }
}

/// System-wide installation directory.
pub fn system_bin_dir() -> PathBuf {
    PathBuf::from("/usr/local/bin")
}

/// Per-user installation directory.
pub fn user_bin_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(".local")
        .join("bin")
}
