// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geom::Dimension;
use crate::interact::grid;

use super::document::{write_atomic, StoreError};

/// The preferences document the editing session reads at start and writes on
/// change: grid spacing, the canvas maxima the too-large check uses, and the
/// view flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub grid_spacing: i32,
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub show_grid: bool,
    pub snap_to_grid: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            grid_spacing: grid::DEFAULT_SPACING,
            canvas_width: 1000,
            canvas_height: 1000,
            show_grid: true,
            snap_to_grid: true,
        }
    }
}

impl Preferences {
    pub fn canvas(&self) -> Dimension {
        Dimension::new(self.canvas_width, self.canvas_height)
    }
}

/// Loads the preferences document; a missing file yields the defaults.
pub fn load_preferences(path: &Path) -> Result<Preferences, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            log::debug!("no preferences at {path:?}, using defaults");
            return Ok(Preferences::default());
        }
        Err(source) => return Err(StoreError::Io { path: path.to_path_buf(), source }),
    };
    serde_json::from_str(&text).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source: crate::format::DecodeError::Malformed { source },
    })
}

pub fn save_preferences(preferences: &Preferences, path: &Path) -> Result<(), StoreError> {
    let mut text =
        serde_json::to_string_pretty(preferences).expect("preferences record serializes");
    text.push('\n');
    write_atomic(path, text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::Preferences;

    #[test]
    fn defaults_match_the_editor_baseline() {
        let preferences = Preferences::default();
        assert_eq!(preferences.grid_spacing, 10);
        assert_eq!(preferences.canvas().width, 1000);
        assert_eq!(preferences.canvas().height, 1000);
        assert!(preferences.show_grid);
        assert!(preferences.snap_to_grid);
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let preferences: Preferences =
            serde_json::from_str(r#"{"grid_spacing": 20}"#).expect("partial preferences");
        assert_eq!(preferences.grid_spacing, 20);
        assert_eq!(preferences.canvas_width, 1000);
    }
}
