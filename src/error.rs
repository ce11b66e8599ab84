//! Error types for archai operations.
//!
//! This module defines [`ArchaiError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ArchaiError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ArchaiError::Other`) for unexpected errors
//! - Every fatal error is surfaced to the user as a single diagnostic line;
//!   [`ArchaiError::remediation`] supplies the follow-up command where one exists

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for archai operations.
#[derive(Debug, Error)]
pub enum ArchaiError {
    /// Host operating system is not supported by the setup procedure.
    #[error("Unsupported platform '{os}': archai targets Arch-family Linux systems")]
    UnsupportedPlatform { os: String },

    /// Host runtime version is below the supported floor.
    #[error("Unsupported {runtime} version {found} (minimum {minimum})")]
    UnsupportedRuntime {
        runtime: String,
        found: String,
        minimum: String,
    },

    /// A required external tool is not on PATH.
    #[error("Missing dependency '{tool}'")]
    MissingDependency { tool: String, hint: String },

    /// The package installer exited non-zero.
    #[error("Dependency installation failed: {message}")]
    DependencyInstall { message: String },

    /// The install artifact is missing or its permissions cannot be changed.
    #[error("Cannot prepare executable {path}: {message}")]
    Permission { path: PathBuf, message: String },

    /// System-wide installation attempted without elevated privileges.
    #[error("Insufficient privileges to install to {dest}")]
    Privilege { dest: PathBuf },

    /// No API key could be resolved from flag, environment, or config file.
    #[error("No API key provided")]
    MissingApiKey,

    /// The remote API rejected the request or returned an unusable response.
    #[error("API request failed: {message}")]
    Api { message: String },

    /// Shell command failed to spawn or was killed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// HTTP transport error.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ArchaiError {
    /// A remediation hint for the user, where one exists.
    ///
    /// Returned as extra lines printed after the diagnostic, typically the
    /// exact shell command that resolves the failure.
    pub fn remediation(&self) -> Option<String> {
        match self {
            Self::UnsupportedRuntime { runtime, .. } => {
                Some(format!("Update it with: sudo pacman -Syu {}", runtime))
            }
            Self::MissingDependency { hint, .. } => Some(hint.clone()),
            Self::Privilege { .. } => Some("Re-run with: sudo archai setup".to_string()),
            Self::MissingApiKey => Some(
                "Set your Google AI Studio API key using one of:\n\
                 \x20 1. export GOOGLE_AI_API_KEY='your-key'\n\
                 \x20 2. create ~/.config/archai/api_key\n\
                 \x20 3. pass --api-key\n\
                 Get a free key at https://makersuite.google.com/app/apikey"
                    .to_string(),
            ),
            _ => None,
        }
    }
}

/// Result type alias for archai operations.
pub type Result<T> = std::result::Result<T, ArchaiError>;
