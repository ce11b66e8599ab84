//! Wiki search, model calls, and conversation history.
//!
//! The assistant pipeline is: search the Arch Wiki for pages related to the
//! question, assemble a prompt with that context, call the Generative
//! Language API, and append the exchange to the local history file. Wiki
//! failures are advisory; model failures are fatal to the query.

pub mod gemini;
pub mod history;
pub mod prompt;
pub mod wiki;

pub use gemini::{GeminiClient, DEFAULT_MODEL};
pub use history::{HistoryEntry, HistoryStore, MAX_ENTRIES};
pub use prompt::build_prompt;
pub use wiki::{format_context, WikiClient, WikiPage};
