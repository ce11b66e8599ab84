//! Host validation and guided installation.
//!
//! The setup procedure is a strictly sequential chain of checks, each
//! returning a `Result` so the first failure short-circuits the rest:
//! platform, runtime version floor, required tools, system packages,
//! executable permissions, and finally the interactive placement choice.
//!
//! External effects (tool probing, package installation) go through the
//! [`SystemTools`] trait, and all prompting goes through
//! [`UserInterface`](crate::ui::UserInterface), so the sequencing logic is
//! fully testable without a real package manager or terminal.

pub mod flow;
pub mod placement;
pub mod tools;
pub mod version;

pub use flow::{SetupFlow, SetupOutcome};
pub use placement::{system_bin_dir, user_bin_dir, PlacementChoice, BIN_NAME};
pub use tools::{PacmanTools, SystemTools};
pub use version::{extract_version, version_at_least};
