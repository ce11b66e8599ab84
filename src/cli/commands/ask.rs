//! Ask command implementation.
//!
//! `archai ask` runs a single question through the assistant pipeline:
//! wiki search, model call, print, persist.

use crate::assistant::{build_prompt, format_context, GeminiClient, HistoryStore, WikiClient};
use crate::cli::args::AskArgs;
use crate::config;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The ask command implementation.
pub struct AskCommand {
    args: AskArgs,
}

impl AskCommand {
    /// Create a new ask command.
    pub fn new(args: AskArgs) -> Self {
        Self { args }
    }
}

impl Command for AskCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let api_key = config::resolve_api_key(self.args.api_key.as_deref())?;

        let context = search_wiki(ui, &self.args.question, self.args.no_wiki);

        let client = GeminiClient::new(&api_key, &self.args.model)?;
        let answer = generate_answer(ui, &client, &self.args.question, context.as_deref())?;

        ui.message("");
        ui.message(&answer);

        if let Err(e) = HistoryStore::open_default().append(&self.args.question, &answer) {
            ui.warning(&format!("Could not save history: {}", e));
        }

        Ok(CommandResult::success())
    }
}

/// Search the wiki for context, degrading to `None` on failure.
pub(crate) fn search_wiki(
    ui: &mut dyn UserInterface,
    question: &str,
    skip: bool,
) -> Option<String> {
    if skip {
        return None;
    }

    let mut spinner = ui.start_spinner("Searching the Arch Wiki...");
    let result = WikiClient::new().and_then(|client| client.search(question));

    match result {
        Ok(pages) => {
            let label = if pages.len() == 1 { "page" } else { "pages" };
            spinner.finish_success(&format!("Found {} related wiki {}", pages.len(), label));
            Some(format_context(&pages))
        }
        Err(e) => {
            spinner.finish_skipped("Arch Wiki unavailable, continuing without context");
            tracing::warn!("wiki search failed: {}", e);
            None
        }
    }
}

/// Run the model call behind a spinner.
pub(crate) fn generate_answer(
    ui: &mut dyn UserInterface,
    client: &GeminiClient,
    question: &str,
    context: Option<&str>,
) -> Result<String> {
    let mut spinner = ui.start_spinner("Generating response...");
    match client.generate(&build_prompt(question, context)) {
        Ok(answer) => {
            spinner.finish_success("Response ready");
            Ok(answer)
        }
        Err(e) => {
            spinner.finish_error("Model request failed");
            Err(e)
        }
    }
}
