//! archai - AI-assisted troubleshooting for Arch Linux.
//!
//! archai forwards troubleshooting questions to the Google Generative
//! Language API, optionally enriched with Arch Wiki search results, and
//! keeps a local conversation history. It ships with a guided `setup`
//! procedure that validates the host and installs the binary.
//!
//! # Modules
//!
//! - [`assistant`] - Wiki search, model calls, and conversation history
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Config directory layout and API key resolution
//! - [`error`] - Error types and result aliases
//! - [`setup`] - Host validation and guided installation
//! - [`shell`] - Shell command execution and platform probes
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use archai::setup::version_at_least;
//!
//! // Version floors compare numerically, never lexically
//! assert!(version_at_least("3.10", "3.9"));
//! assert!(!version_at_least("3.9", "3.10"));
//! ```

pub mod assistant;
pub mod cli;
pub mod config;
pub mod error;
pub mod setup;
pub mod shell;
pub mod ui;

pub use error::{ArchaiError, Result};
