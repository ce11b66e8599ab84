//! Conversation history persistence.
//!
//! History is a JSON array of entries, oldest first, capped at
//! [`MAX_ENTRIES`]. The file lives in the archai config directory and is
//! rewritten whole on each append.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Maximum number of entries kept on disk.
pub const MAX_ENTRIES: usize = 50;

/// One question/answer exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub query: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

/// File-backed conversation history.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Create a store at an explicit path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the default history location.
    pub fn open_default() -> Self {
        Self::new(crate::config::history_file())
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all entries; a missing file is an empty history.
    pub fn load(&self) -> Result<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let entries = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse history at {}", self.path.display()))?;
        Ok(entries)
    }

    /// Append an exchange, dropping the oldest entries past the cap.
    pub fn append(&self, query: &str, response: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.push(HistoryEntry {
            query: query.to_string(),
            response: response.to_string(),
            timestamp: Utc::now(),
        });

        if entries.len() > MAX_ENTRIES {
            let excess = entries.len() - MAX_ENTRIES;
            entries.drain(..excess);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// The most recent `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        let entries = self.load()?;
        let start = entries.len().saturating_sub(limit);
        Ok(entries[start..].to_vec())
    }
}
