// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::format::{decode, encode, DecodeError};
use crate::geom::{Dimension, Rectangle};
use crate::model::Diagram;

/// The dedicated extension for persisted diagram documents.
pub const FILE_EXTENSION: &str = "ptd";

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// The artifact is malformed or semantically invalid; no partial diagram
    /// is ever produced.
    Decode {
        path: PathBuf,
        source: DecodeError,
    },
    /// The decoded diagram does not fit the configured canvas. Distinct from
    /// a corrupt file: the document is valid, the session just cannot hold
    /// it, and the caller's open document must stay untouched.
    TooLarge {
        path: PathBuf,
        bounds: Rectangle,
        limits: Dimension,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Decode { path, source } => {
                write!(f, "cannot decode diagram from {path:?}: {source}")
            }
            Self::TooLarge { path, bounds, limits } => write!(
                f,
                "diagram in {path:?} extends to ({}, {}) but the canvas is {}x{}",
                bounds.max_x(),
                bounds.max_y(),
                limits.width,
                limits.height
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::TooLarge { .. } => None,
        }
    }
}

/// Reads and decodes a diagram document, then validates its bounds against
/// the canvas limits before the caller substitutes it into a session.
pub fn read_diagram(path: &Path, limits: Dimension) -> Result<Diagram, StoreError> {
    let text = fs::read_to_string(path)
        .map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    let diagram =
        decode(&text).map_err(|source| StoreError::Decode { path: path.to_path_buf(), source })?;

    let bounds = diagram.bounds();
    if bounds.max_x() > limits.width || bounds.max_y() > limits.height {
        log::warn!(
            "diagram at {path:?} exceeds the canvas: bounds {bounds:?}, limits {limits:?}"
        );
        return Err(StoreError::TooLarge { path: path.to_path_buf(), bounds, limits });
    }

    log::debug!(
        "read diagram from {path:?} ({} nodes, {} edges)",
        diagram.node_count(),
        diagram.edge_count()
    );
    Ok(diagram)
}

/// Encodes and writes a diagram document atomically (temp file in the target
/// directory, then rename). Encoding is total; only I/O can fail.
pub fn save_diagram(diagram: &Diagram, path: &Path) -> Result<(), StoreError> {
    let text = encode(diagram);
    write_atomic(path, text.as_bytes())?;
    log::debug!(
        "saved diagram to {path:?} ({} nodes, {} edges)",
        diagram.node_count(),
        diagram.edge_count()
    );
    Ok(())
}

pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let io_error = |source: io::Error, at: &Path| StoreError::Io { path: at.to_path_buf(), source };

    let Some(parent) = path.parent() else {
        return Err(io_error(io::Error::other("path has no parent"), path));
    };
    let Some(file_name) = path.file_name() else {
        return Err(io_error(io::Error::other("path has no file name"), path));
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(".proteus.tmp.{}.{}", file_name.to_string_lossy(), nanos));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| io_error(source, &tmp_path))?;
    file.write_all(contents).map_err(|source| io_error(source, &tmp_path))?;
    drop(file);

    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error(source, path));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
