//! Setup command implementation.
//!
//! `archai setup` validates the host and installs the executable to a
//! user-chosen location.

use crate::error::Result;
use crate::setup::{PacmanTools, SetupFlow};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The setup command implementation.
pub struct SetupCommand;

impl SetupCommand {
    /// Create a new setup command.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SetupCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let tools = PacmanTools::new();
        let flow = SetupFlow::new(&tools)?;
        flow.run(ui)?;
        Ok(CommandResult::success())
    }
}
