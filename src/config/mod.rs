//! Config directory layout and API key resolution.
//!
//! archai keeps its state under `~/.config/archai`: the conversation
//! history and an optional `api_key` file. The API key resolves in order:
//! `--api-key` flag, `GOOGLE_AI_API_KEY` environment variable, config file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ArchaiError, Result};

/// Environment variable holding the Google AI Studio API key.
pub const API_KEY_ENV: &str = "GOOGLE_AI_API_KEY";

const APP_DIR: &str = "archai";

/// The archai config directory (`~/.config/archai` on Linux).
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Path of the conversation history file.
pub fn history_file() -> PathBuf {
    config_dir().join("history.json")
}

/// Path of the optional API key file.
pub fn api_key_file() -> PathBuf {
    config_dir().join("api_key")
}

/// Resolve the API key from flag, environment, or config file.
pub fn resolve_api_key(flag: Option<&str>) -> Result<String> {
    resolve_api_key_from(flag, std::env::var(API_KEY_ENV).ok(), &api_key_file())
}

fn resolve_api_key_from(
    flag: Option<&str>,
    env: Option<String>,
    key_file: &Path,
) -> Result<String> {
    if let Some(key) = flag {
        let key = key.trim();
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }

    if let Some(key) = env {
        let key = key.trim().to_string();
        if !key.is_empty() {
            return Ok(key);
        }
    }

    if key_file.exists() {
        let key = fs::read_to_string(key_file)?;
        let key = key.trim();
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }

    Err(ArchaiError::MissingApiKey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn flag_takes_precedence() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("api_key");
        fs::write(&file, "file-key").unwrap();

        let key =
            resolve_api_key_from(Some("flag-key"), Some("env-key".to_string()), &file).unwrap();
        assert_eq!(key, "flag-key");
    }

    #[test]
    fn env_beats_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("api_key");
        fs::write(&file, "file-key").unwrap();

        let key = resolve_api_key_from(None, Some("env-key".to_string()), &file).unwrap();
        assert_eq!(key, "env-key");
    }

    #[test]
    fn file_is_last_resort_and_trimmed() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("api_key");
        fs::write(&file, "  file-key\n").unwrap();

        let key = resolve_api_key_from(None, None, &file).unwrap();
        assert_eq!(key, "file-key");
    }

    #[test]
    fn missing_everywhere_is_an_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("api_key");

        let err = resolve_api_key_from(None, None, &file).unwrap_err();
        assert!(matches!(err, ArchaiError::MissingApiKey));
    }

    #[test]
    fn blank_sources_are_skipped() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("api_key");
        fs::write(&file, "file-key").unwrap();

        let key = resolve_api_key_from(Some("  "), Some("".to_string()), &file).unwrap();
        assert_eq!(key, "file-key");
    }

    #[test]
    fn history_file_lives_in_config_dir() {
        assert!(history_file().ends_with("archai/history.json"));
    }
}
