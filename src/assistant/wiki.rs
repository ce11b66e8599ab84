//! Arch Wiki search via the MediaWiki opensearch API.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{ArchaiError, Result};

const WIKI_API: &str = "https://wiki.archlinux.org/api.php";

/// Maximum number of pages requested per search.
const SEARCH_LIMIT: &str = "5";

/// A wiki page matched by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiPage {
    pub title: String,
    pub url: String,
}

/// Blocking client for Arch Wiki searches.
pub struct WikiClient {
    client: Client,
    base_url: String,
}

impl WikiClient {
    /// Create a client against the live Arch Wiki.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent("archai")
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: WIKI_API.to_string(),
        })
    }

    /// Override the API endpoint (for testing).
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Search the wiki for pages related to `query`.
    ///
    /// The opensearch payload is a 4-element array: the echoed query,
    /// matched titles, descriptions, and page URLs.
    pub fn search(&self, query: &str) -> Result<Vec<WikiPage>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("action", "opensearch"),
                ("search", query),
                ("limit", SEARCH_LIMIT),
                ("format", "json"),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArchaiError::Api {
                message: format!("HTTP {} from the Arch Wiki", status),
            });
        }

        let (_echo, titles, _descriptions, urls): (String, Vec<String>, Vec<String>, Vec<String>) =
            response.json()?;

        Ok(titles
            .into_iter()
            .zip(urls)
            .map(|(title, url)| WikiPage { title, url })
            .collect())
    }
}

/// Render search results as a context block for the model prompt.
pub fn format_context(pages: &[WikiPage]) -> String {
    if pages.is_empty() {
        return "No specific Arch Wiki pages found for this query.".to_string();
    }

    let list = pages
        .iter()
        .map(|p| format!("- {}: {}", p.title, p.url))
        .collect::<Vec<_>>()
        .join("\n");

    format!("Relevant Arch Wiki pages:\n{}", list)
}
