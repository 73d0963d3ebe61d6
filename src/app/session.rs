// SPDX-License-Identifier: MPL-2.0
//! Session state persistence using CBOR format.
//!
//! This module handles transient application state that should persist across
//! sessions but is not user-configurable (unlike the preference store behind
//! `crate::store`). State is stored in CBOR for compact binary storage and a
//! clear separation from the user-editable preference file.

use super::paths;
use super::screen::Screen;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const SESSION_FILE: &str = "session.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionState {
    /// Screen to restore on the next launch.
    #[serde(default)]
    pub last_screen: Screen,
}

impl SessionState {
    /// Loads session state from the default location. A missing,
    /// undeterminable, or unreadable file yields the default state; a corrupt
    /// file is reported on stderr and likewise yields the default.
    pub fn load() -> Self {
        Self::load_from(None)
    }

    /// Loads session state from a custom base directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> Self {
        let Some(path) = Self::file_path_with_override(base_dir) else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => state,
                    Err(error) => {
                        eprintln!("Failed to parse session state: {:?}", error);
                        Self::default()
                    }
                }
            }
            Err(error) => {
                eprintln!("Failed to read session state: {:?}", error);
                Self::default()
            }
        }
    }

    /// Saves session state to the default location, creating the parent
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(None)
    }

    /// Saves session state to a custom base directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Result<()> {
        let Some(path) = Self::file_path_with_override(base_dir) else {
            // No data directory on this platform; session state is skipped.
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = fs::File::create(&path)?;
        let writer = BufWriter::new(file);
        ciborium::into_writer(self, writer).map_err(|e| Error::Config(e.to_string()))
    }

    fn file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|dir| dir.join(SESSION_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().to_path_buf());

        let state = SessionState {
            last_screen: Screen::Settings,
        };
        state.save_to(base.clone()).expect("save failed");

        let loaded = SessionState::load_from(base);
        assert_eq!(loaded, state);
    }

    #[test]
    fn missing_file_loads_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let loaded = SessionState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, SessionState::default());
    }

    #[test]
    fn corrupt_file_loads_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(SESSION_FILE);
        fs::write(&path, b"not cbor at all").expect("failed to write file");

        let loaded = SessionState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, SessionState::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("deep").join("path");

        let state = SessionState {
            last_screen: Screen::About,
        };
        state.save_to(Some(nested.clone())).expect("save failed");
        assert!(nested.join(SESSION_FILE).exists());
    }
}
