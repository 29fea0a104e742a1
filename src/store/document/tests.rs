// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use super::{read_diagram, save_diagram, StoreError, FILE_EXTENSION};
use crate::geom::Dimension;
use crate::model::fixtures;
use crate::store::{load_preferences, save_preferences, Preferences};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("proteus_test_{prefix}_{pid}_{nanos}_{counter}"));
        fs::create_dir_all(&path).expect("create temp dir");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

const LIMITS: Dimension = Dimension { width: 1000, height: 1000 };

#[test]
fn save_then_read_round_trips_through_the_filesystem() {
    let tmp = TempDir::new("save_read");
    let path = tmp.path().join(format!("diagram.{FILE_EXTENSION}"));

    let diagram = fixtures::class_diagram_nested();
    save_diagram(&diagram, &path).expect("save");

    let loaded = read_diagram(&path, LIMITS).expect("read");
    assert_eq!(loaded.node_count(), diagram.node_count());
    assert_eq!(loaded.edge_count(), diagram.edge_count());
    assert_eq!(loaded.roots().len(), diagram.roots().len());

    // No temp artifacts left behind by the atomic write.
    let leftovers: Vec<_> = fs::read_dir(tmp.path())
        .expect("read dir")
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(".proteus.tmp."))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn read_surfaces_io_failures_distinctly() {
    let tmp = TempDir::new("missing");
    let path = tmp.path().join("missing.ptd");

    let result = read_diagram(&path, LIMITS);
    assert!(matches!(result, Err(StoreError::Io { .. })));
}

#[test]
fn read_surfaces_decode_failures_distinctly() {
    let tmp = TempDir::new("corrupt");
    let path = tmp.path().join("corrupt.ptd");
    fs::write(&path, "{ this is not a diagram").expect("write corrupt file");

    let result = read_diagram(&path, LIMITS);
    assert!(matches!(result, Err(StoreError::Decode { .. })));
}

#[test]
fn read_rejects_diagrams_larger_than_the_canvas() {
    let tmp = TempDir::new("too_large");
    let path = tmp.path().join("large.ptd");
    save_diagram(&fixtures::class_diagram_nested(), &path).expect("save");

    // The fixture extends past x=900; a narrow canvas must reject it as
    // TooLarge, not as a corrupt file.
    let result = read_diagram(&path, Dimension::new(400, 400));
    match result {
        Err(StoreError::TooLarge { bounds, limits, .. }) => {
            assert!(bounds.max_x() > limits.width);
        }
        other => panic!("expected TooLarge, got {other:?}"),
    }
}

#[test]
fn save_overwrites_existing_documents_atomically() {
    let tmp = TempDir::new("overwrite");
    let path = tmp.path().join(format!("diagram.{FILE_EXTENSION}"));

    save_diagram(&fixtures::class_diagram_nested(), &path).expect("first save");
    save_diagram(&fixtures::state_diagram_self_transition(), &path).expect("second save");

    let loaded = read_diagram(&path, LIMITS).expect("read");
    assert_eq!(loaded.node_count(), 4);
    assert_eq!(loaded.edge_count(), 5);
}

#[test]
fn preferences_round_trip_and_default_when_missing() {
    let tmp = TempDir::new("preferences");
    let path = tmp.path().join("preferences.json");

    assert_eq!(
        load_preferences(&path).expect("defaults for missing file"),
        Preferences::default()
    );

    let custom = Preferences {
        grid_spacing: 20,
        canvas_width: 2000,
        canvas_height: 1500,
        show_grid: false,
        snap_to_grid: true,
    };
    save_preferences(&custom, &path).expect("save preferences");
    assert_eq!(load_preferences(&path).expect("load preferences"), custom);
}
