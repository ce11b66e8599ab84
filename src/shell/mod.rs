//! Shell command execution and platform probes.

pub mod command;
pub mod platform;

pub use command::{command_succeeds, execute, CommandResult};
pub use platform::{dir_on_path, is_ci, is_elevated};
