// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use crate::geom::{Line, Rectangle};
use crate::model::{Diagram, EdgeKey, NodeKey};

/// A selectable diagram element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Node(NodeKey),
    Edge(EdgeKey),
}

/// The set of currently selected elements, in insertion order, plus the two
/// transient gesture visuals (lasso rectangle, rubberband line). The visuals
/// live here because their semantics are selection semantics; rendering them
/// is the collaborator's business.
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    nodes: SmallVec<[NodeKey; 8]>,
    edges: SmallVec<[EdgeKey; 4]>,
    lasso: Option<Rectangle>,
    rubberband: Option<Line>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected nodes in the order they were selected. "First selected"
    /// queries (the move gesture's snap anchor) rely on this order.
    pub fn selected_nodes(&self) -> &[NodeKey] {
        &self.nodes
    }

    pub fn selected_edges(&self) -> &[EdgeKey] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn contains_node(&self, key: NodeKey) -> bool {
        self.nodes.contains(&key)
    }

    pub fn contains_edge(&self, key: EdgeKey) -> bool {
        self.edges.contains(&key)
    }

    pub fn first_selected_node(&self) -> Option<NodeKey> {
        self.nodes.first().copied()
    }

    pub fn select(&mut self, element: Element) {
        match element {
            Element::Node(key) => {
                if !self.nodes.contains(&key) {
                    self.nodes.push(key);
                }
            }
            Element::Edge(key) => {
                if !self.edges.contains(&key) {
                    self.edges.push(key);
                }
            }
        }
    }

    /// Modifier-key multi-select: removes the element if selected, selects
    /// it otherwise.
    pub fn toggle(&mut self, element: Element) {
        match element {
            Element::Node(key) => {
                if self.nodes.contains(&key) {
                    self.nodes.retain(|&mut existing| existing != key);
                } else {
                    self.nodes.push(key);
                }
            }
            Element::Edge(key) => {
                if self.edges.contains(&key) {
                    self.edges.retain(|&mut existing| existing != key);
                } else {
                    self.edges.push(key);
                }
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Drops keys whose entries no longer exist in `diagram`.
    pub fn prune(&mut self, diagram: &Diagram) {
        self.nodes.retain(|&mut key| diagram.contains_node(key));
        self.edges.retain(|&mut key| diagram.contains_edge(key));
    }

    /// Tight bounding rectangle over all selected nodes' bounds. The empty
    /// selection yields the degenerate zero-size rectangle at the origin.
    pub fn selection_bounds(&self, diagram: &Diagram) -> Rectangle {
        let mut acc: Option<Rectangle> = None;
        for &key in &self.nodes {
            if let Some(node) = diagram.node(key) {
                let rect = node.bounds();
                acc = Some(acc.map_or(rect, |current| current.union(&rect)));
            }
        }
        acc.unwrap_or(Rectangle::ZERO)
    }

    /// Additively selects every node whose bounds intersect `lasso`, and
    /// every edge both of whose endpoints end up selected.
    pub fn activate_lasso(&mut self, lasso: Rectangle, diagram: &Diagram) {
        for key in diagram.nodes_in_draw_order() {
            let intersects = diagram
                .node(key)
                .is_some_and(|node| node.bounds().intersects(&lasso));
            if intersects {
                self.select(Element::Node(key));
            }
        }
        let caught: SmallVec<[EdgeKey; 4]> = diagram
            .edges()
            .filter(|(_, edge)| {
                self.contains_node(edge.start()) && self.contains_node(edge.end())
            })
            .map(|(key, _)| key)
            .collect();
        for key in caught {
            self.select(Element::Edge(key));
        }
        self.lasso = Some(lasso);
    }

    pub fn lasso(&self) -> Option<Rectangle> {
        self.lasso
    }

    pub fn deactivate_lasso(&mut self) {
        self.lasso = None;
    }

    /// The rubberband is a transient visual only; it never mutates the
    /// selection. Gesture end turns it into an edge-creation request.
    pub fn activate_rubberband(&mut self, line: Line) {
        self.rubberband = Some(line);
    }

    pub fn rubberband(&self) -> Option<Line> {
        self.rubberband
    }

    pub fn deactivate_rubberband(&mut self) {
        self.rubberband = None;
    }
}
