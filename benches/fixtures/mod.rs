// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use proteus::geom::Point;
use proteus::model::{Diagram, EdgeKind, EdgeLabels, Node, NodeKind};

fn class(name: &str, x: i32, y: i32) -> Node {
    Node::new(
        NodeKind::Class {
            name: name.into(),
            attributes: "field: i32".into(),
            methods: "method()".into(),
        },
        Point::new(x, y),
    )
}

/// A `cols` x `rows` grid of classes with a dependency edge between each
/// pair of horizontal neighbors.
pub fn class_grid(cols: usize, rows: usize) -> Diagram {
    let mut diagram = Diagram::new();
    let mut keys = Vec::with_capacity(cols * rows);

    for row in 0..rows {
        for col in 0..cols {
            let name = format!("C{row}_{col}");
            keys.push(diagram.add_root(class(&name, col as i32 * 150, row as i32 * 100)));
        }
    }
    for row in 0..rows {
        for col in 1..cols {
            let start = keys[row * cols + col - 1];
            let end = keys[row * cols + col];
            diagram
                .connect(start, end, EdgeKind::Dependency, EdgeLabels::middle("uses"))
                .expect("grid edge");
        }
    }
    diagram
}

/// `count` packages, each containing `children` classes, plus one
/// dependency edge from every first child to the next package.
pub fn package_forest(count: usize, children: usize) -> Diagram {
    let mut diagram = Diagram::new();
    let mut packages = Vec::with_capacity(count);
    let mut first_children = Vec::with_capacity(count);

    for index in 0..count {
        let name = format!("p{index}");
        let package = diagram.add_root(Node::new(
            NodeKind::Package { name: name.into(), contents: "".into() },
            Point::new(index as i32 * 200, 0),
        ));
        packages.push(package);
        for child in 0..children {
            let key = diagram
                .add_child(
                    package,
                    class(
                        &format!("C{index}_{child}"),
                        index as i32 * 200 + 10,
                        30 + child as i32 * 70,
                    ),
                )
                .expect("package child");
            if child == 0 {
                first_children.push(key);
            }
        }
    }
    for index in 1..count {
        diagram
            .connect(
                first_children[index - 1],
                packages[index],
                EdgeKind::Dependency,
                EdgeLabels::default(),
            )
            .expect("forest edge");
    }
    diagram
}
