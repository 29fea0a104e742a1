// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use proteus::geom::{Dimension, Point};
use proteus::interact::{grid, DragController, Modifiers, SelectionModel};

mod fixtures;
mod profiler;

const CANVAS: Dimension = Dimension { width: 100_000, height: 100_000 };

// Benchmark identity (keep stable):
// - Group name in this file: `gesture.drag`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `lasso_sweep_small`, `move_medium`).
// - If implementations move/deduplicate, update the wiring but do not rename
//   group or case IDs.
fn benches_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture.drag");

    let small = fixtures::class_grid(5, 4);
    let medium = fixtures::class_grid(20, 15);

    group.bench_function("lasso_sweep_small", |b| {
        b.iter_batched_ref(
            || (small.clone(), SelectionModel::new(), DragController::new(CANVAS, grid::DEFAULT_SPACING)),
            |(diagram, selection, drag)| {
                drag.begin_drag(Point::new(-10, -10), Modifiers::default(), diagram, selection);
                for step in 1..=20 {
                    drag.drag(Point::new(step * 40, step * 30), diagram, selection);
                }
                drag.end_drag(Point::new(800, 600), diagram, selection);
                black_box(selection.selected_nodes().len())
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("lasso_sweep_medium", |b| {
        b.iter_batched_ref(
            || (medium.clone(), SelectionModel::new(), DragController::new(CANVAS, grid::DEFAULT_SPACING)),
            |(diagram, selection, drag)| {
                drag.begin_drag(Point::new(-10, -10), Modifiers::default(), diagram, selection);
                for step in 1..=20 {
                    drag.drag(Point::new(step * 160, step * 80), diagram, selection);
                }
                drag.end_drag(Point::new(3200, 1600), diagram, selection);
                black_box(selection.selected_nodes().len())
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("move_medium", |b| {
        b.iter_batched_ref(
            || {
                let diagram = medium.clone();
                let mut selection = SelectionModel::new();
                let mut drag = DragController::new(CANVAS, grid::DEFAULT_SPACING);
                // Select everything with one big lasso, then release.
                drag.begin_drag(Point::new(-10, -10), Modifiers::default(), &diagram, &mut selection);
                let mut diagram = diagram;
                drag.drag(Point::new(99_000, 99_000), &mut diagram, &mut selection);
                drag.end_drag(Point::new(99_000, 99_000), &mut diagram, &mut selection);
                (diagram, selection, drag)
            },
            |(diagram, selection, drag)| {
                drag.begin_drag(Point::new(5, 5), Modifiers::default(), diagram, selection);
                for step in 1..=20 {
                    drag.drag(Point::new(5 + step * 3, 5 + step * 2), diagram, selection);
                }
                drag.end_drag(Point::new(65, 45), diagram, selection);
                black_box(selection.selected_nodes().len())
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_gesture
}
criterion_main!(benches);
