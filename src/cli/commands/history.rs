//! History command implementation.
//!
//! `archai history` shows recent conversation history.

use crate::assistant::{HistoryEntry, HistoryStore};
use crate::cli::args::HistoryArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Entries shown when no limit is given.
const DEFAULT_LIMIT: usize = 10;

/// The history command implementation.
pub struct HistoryCommand {
    args: HistoryArgs,
    store: HistoryStore,
}

impl HistoryCommand {
    /// Create a new history command against the default store.
    pub fn new(args: HistoryArgs) -> Self {
        Self {
            args,
            store: HistoryStore::open_default(),
        }
    }

    /// Use an explicit store (for testing).
    pub fn with_store(mut self, store: HistoryStore) -> Self {
        self.store = store;
        self
    }
}

impl Command for HistoryCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let limit = self.args.limit.unwrap_or(DEFAULT_LIMIT);
        let entries = self.store.recent(limit)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if entries.is_empty() {
            ui.message("No history yet.");
            return Ok(CommandResult::success());
        }

        ui.show_header("Conversation history");
        render_entries(ui, &entries);

        Ok(CommandResult::success())
    }
}

/// Print entries, oldest first.
pub(crate) fn render_entries(ui: &mut dyn UserInterface, entries: &[HistoryEntry]) {
    for entry in entries {
        ui.message(&format!(
            "── {} ──",
            entry.timestamp.format("%Y-%m-%d %H:%M")
        ));
        ui.message(&format!("Q: {}", entry.query));
        ui.message(&entry.response);
        ui.message("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn command_with_store(temp: &TempDir, args: HistoryArgs) -> HistoryCommand {
        HistoryCommand::new(args)
            .with_store(HistoryStore::new(temp.path().join("history.json")))
    }

    #[test]
    fn empty_history_prints_placeholder() {
        let temp = TempDir::new().unwrap();
        let cmd = command_with_store(&temp, HistoryArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("No history yet."));
    }

    #[test]
    fn entries_are_rendered_with_query_and_response() {
        let temp = TempDir::new().unwrap();
        let store = HistoryStore::new(temp.path().join("history.json"));
        store.append("How do I update?", "Run pacman -Syu.").unwrap();

        let cmd = command_with_store(&temp, HistoryArgs::default());
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("Q: How do I update?"));
        assert!(ui.has_message("Run pacman -Syu."));
        assert_eq!(ui.headers(), &["Conversation history".to_string()]);
    }

    #[test]
    fn limit_caps_rendered_entries() {
        let temp = TempDir::new().unwrap();
        let store = HistoryStore::new(temp.path().join("history.json"));
        for i in 0..5 {
            store.append(&format!("q{}", i), "a").unwrap();
        }

        let args = HistoryArgs {
            limit: Some(2),
            ..Default::default()
        };
        let cmd = command_with_store(&temp, args);
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert!(!ui.has_message("q2"));
        assert!(ui.has_message("q3"));
        assert!(ui.has_message("q4"));
    }

    #[test]
    fn json_output_is_valid_json() {
        let temp = TempDir::new().unwrap();
        let store = HistoryStore::new(temp.path().join("history.json"));
        store.append("q", "a").unwrap();

        let args = HistoryArgs {
            json: true,
            ..Default::default()
        };
        let cmd = command_with_store(&temp, args);
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        let json = &ui.messages()[0];
        let parsed: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(parsed[0]["query"], "q");
    }

    #[test]
    fn json_output_for_empty_history_is_empty_array() {
        let temp = TempDir::new().unwrap();
        let args = HistoryArgs {
            json: true,
            ..Default::default()
        };
        let cmd = command_with_store(&temp, args);
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.messages()[0].trim(), "[]");
    }
}
