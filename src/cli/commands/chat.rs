//! Chat command implementation.
//!
//! `archai chat` runs an interactive session. `exit` and `quit` end the
//! loop, `history` shows recent exchanges, and empty input is ignored.
//! A failed query is reported and the session continues.

use std::path::PathBuf;

use crate::assistant::{GeminiClient, HistoryStore};
use crate::cli::args::ChatArgs;
use crate::config;
use crate::error::Result;
use crate::ui::{Prompt, PromptType, UserInterface};

use super::ask::{generate_answer, search_wiki};
use super::dispatcher::{Command, CommandResult};
use super::history::render_entries;

/// Entries shown by the in-session `history` keyword.
const SESSION_HISTORY_LIMIT: usize = 10;

/// The chat command implementation.
pub struct ChatCommand {
    args: ChatArgs,
    history_path: PathBuf,
}

impl ChatCommand {
    /// Create a new chat command.
    pub fn new(args: ChatArgs) -> Self {
        Self {
            args,
            history_path: config::history_file(),
        }
    }

    /// Use an explicit history file (for testing).
    pub fn with_history_path(mut self, path: PathBuf) -> Self {
        self.history_path = path;
        self
    }

    fn answer(
        &self,
        ui: &mut dyn UserInterface,
        api_key: &str,
        store: &HistoryStore,
        question: &str,
    ) -> Result<()> {
        let context = search_wiki(ui, question, self.args.no_wiki);
        let client = GeminiClient::new(api_key, &self.args.model)?;
        let answer = generate_answer(ui, &client, question, context.as_deref())?;

        ui.message("");
        ui.message(&answer);
        ui.message("");

        if let Err(e) = store.append(question, &answer) {
            ui.warning(&format!("Could not save history: {}", e));
        }
        Ok(())
    }
}

impl Command for ChatCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let api_key = config::resolve_api_key(self.args.api_key.as_deref())?;
        let store = HistoryStore::new(self.history_path.clone());

        ui.show_header("archai chat");
        ui.message("Type 'exit' or 'quit' to leave, 'history' to see past queries.");

        loop {
            let prompt = Prompt {
                key: "chat".to_string(),
                question: "You".to_string(),
                prompt_type: PromptType::Input,
                default: None,
            };

            // Prompt failure (EOF, interrupt) ends the session cleanly
            let line = match ui.prompt(&prompt) {
                Ok(result) => result.as_string(),
                Err(_) => break,
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match line.to_lowercase().as_str() {
                "exit" | "quit" => break,
                "history" => {
                    let entries = store.recent(SESSION_HISTORY_LIMIT)?;
                    if entries.is_empty() {
                        ui.message("No history yet.");
                    } else {
                        render_entries(ui, &entries);
                    }
                    continue;
                }
                _ => {}
            }

            if let Err(e) = self.answer(ui, &api_key, &store, line) {
                ui.error(&format!("{}", e));
            }
        }

        ui.message("Goodbye! Stay rolling!");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn chat_in(temp: &TempDir) -> ChatCommand {
        let args = ChatArgs {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        };
        ChatCommand::new(args).with_history_path(temp.path().join("history.json"))
    }

    #[test]
    fn exit_ends_the_session() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("chat", vec!["exit"]);

        let result = chat_in(&temp).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Goodbye"));
    }

    #[test]
    fn quit_is_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("chat", vec!["QUIT"]);

        assert!(chat_in(&temp).execute(&mut ui).unwrap().success);
    }

    #[test]
    fn empty_input_is_ignored() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("chat", vec!["", "   ", "exit"]);

        let result = chat_in(&temp).execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.prompts_shown().len(), 3);
    }

    #[test]
    fn history_keyword_shows_placeholder_when_empty() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("chat", vec!["history", "exit"]);

        chat_in(&temp).execute(&mut ui).unwrap();

        assert!(ui.has_message("No history yet."));
    }

    #[test]
    fn history_keyword_renders_saved_entries() {
        let temp = TempDir::new().unwrap();
        let store = HistoryStore::new(temp.path().join("history.json"));
        store.append("old question", "old answer").unwrap();

        let mut ui = MockUI::new();
        ui.queue_prompt_responses("chat", vec!["history", "exit"]);

        chat_in(&temp).execute(&mut ui).unwrap();

        assert!(ui.has_message("Q: old question"));
        assert!(ui.has_message("old answer"));
    }

    #[test]
    fn prompt_failure_ends_the_session() {
        let temp = TempDir::new().unwrap();
        // No responses configured: the first prompt errors
        let mut ui = MockUI::new();

        let result = chat_in(&temp).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Goodbye"));
    }

    #[test]
    fn missing_api_key_fails_before_the_loop() {
        let temp = TempDir::new().unwrap();
        let args = ChatArgs::default();
        let cmd = ChatCommand::new(args).with_history_path(temp.path().join("history.json"));

        let mut ui = MockUI::new();
        // Only fails when no key is available from the environment either
        if std::env::var(config::API_KEY_ENV).is_err() && !config::api_key_file().exists() {
            assert!(cmd.execute(&mut ui).is_err());
            assert!(ui.prompts_shown().is_empty());
        }
    }
}
