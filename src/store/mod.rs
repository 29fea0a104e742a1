// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! File I/O for diagram documents and the preferences document.
//!
//! The codec itself is pure (`format`); this module owns the blocking reads
//! and atomic writes, the canvas too-large check, and nothing else.

mod document;
mod preferences;

pub use document::{read_diagram, save_diagram, StoreError, FILE_EXTENSION};
pub use preferences::{load_preferences, save_preferences, Preferences};
