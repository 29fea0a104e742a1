// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;

use crate::geom::{Line, Point, Rectangle};

use super::edge::{Edge, EdgeKind, EdgeLabels};
use super::keys::{EdgeKey, NodeKey};
use super::node::Node;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Re-parenting conflict, containment cycle, or variant mismatch.
    InvalidContainment { parent: NodeKey, child: NodeKey },
    /// Edge creation referencing a node not reachable from any root.
    DanglingEndpoint { node: NodeKey },
    /// Self-loop on a variant that declares no support for it.
    SelfReference { node: NodeKey, kind: &'static str },
    /// Operation addressed a removed entry.
    StaleKey { node: NodeKey },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidContainment { parent, child } => {
                write!(f, "invalid containment of node {child} under node {parent}")
            }
            Self::DanglingEndpoint { node } => {
                write!(f, "edge endpoint {node} is not reachable from any root")
            }
            Self::SelfReference { node, kind } => {
                write!(f, "edge kind '{kind}' does not allow a self-loop on node {node}")
            }
            Self::StaleKey { node } => write!(f, "node {node} was removed"),
        }
    }
}

impl std::error::Error for GraphError {}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeEntry {
    node: Node,
    parent: Option<NodeKey>,
    children: SmallVec<[NodeKey; 4]>,
}

/// The aggregate root: an arena of nodes and edges plus the ordered root
/// sequence. Root order is z-order for hit-testing and the identity anchor
/// for serialization; edge order is creation order.
///
/// Every live node is reachable from a root by construction: nodes enter the
/// arena through `add_root`/`add_child` and only move via `adopt`, which
/// keeps the containment relation a forest rooted in `roots`.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    nodes: Vec<Option<NodeEntry>>,
    roots: Vec<NodeKey>,
    edges: Vec<Option<Edge>>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, key: NodeKey) -> Option<&NodeEntry> {
        self.nodes.get(key.index()).and_then(Option::as_ref)
    }

    fn entry_mut(&mut self, key: NodeKey) -> Option<&mut NodeEntry> {
        self.nodes.get_mut(key.index()).and_then(Option::as_mut)
    }

    fn alloc(&mut self, node: Node, parent: Option<NodeKey>) -> NodeKey {
        let key = NodeKey::new(self.nodes.len() as u32);
        self.nodes.push(Some(NodeEntry { node, parent, children: SmallVec::new() }));
        key
    }

    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.entry(key).map(|entry| &entry.node)
    }

    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.entry_mut(key).map(|entry| &mut entry.node)
    }

    pub fn edge(&self, key: EdgeKey) -> Option<&Edge> {
        self.edges.get(key.index()).and_then(Option::as_ref)
    }

    pub fn edge_mut(&mut self, key: EdgeKey) -> Option<&mut Edge> {
        self.edges.get_mut(key.index()).and_then(Option::as_mut)
    }

    pub fn contains_node(&self, key: NodeKey) -> bool {
        self.entry(key).is_some()
    }

    pub fn contains_edge(&self, key: EdgeKey) -> bool {
        self.edge(key).is_some()
    }

    pub fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    pub fn parent(&self, key: NodeKey) -> Option<NodeKey> {
        self.entry(key).and_then(|entry| entry.parent)
    }

    pub fn children(&self, key: NodeKey) -> &[NodeKey] {
        self.entry(key).map(|entry| entry.children.as_slice()).unwrap_or(&[])
    }

    /// Live edges with their keys, in creation order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeKey, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|edge| (EdgeKey::new(index as u32), edge)))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().filter(|slot| slot.is_some()).count()
    }

    /// All live nodes in draw order: roots in sequence, each followed by its
    /// children recursively (children draw above their parents).
    pub fn nodes_in_draw_order(&self) -> Vec<NodeKey> {
        let mut order = Vec::with_capacity(self.nodes.len());
        for &root in &self.roots {
            self.push_subtree(root, &mut order);
        }
        order
    }

    fn push_subtree(&self, key: NodeKey, out: &mut Vec<NodeKey>) {
        out.push(key);
        if let Some(entry) = self.entry(key) {
            for &child in &entry.children {
                self.push_subtree(child, out);
            }
        }
    }

    pub fn add_root(&mut self, node: Node) -> NodeKey {
        let key = self.alloc(node, None);
        self.roots.push(key);
        key
    }

    /// Creates `node` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeKey, node: Node) -> Result<NodeKey, GraphError> {
        let Some(parent_entry) = self.entry(parent) else {
            return Err(GraphError::StaleKey { node: parent });
        };
        if !parent_entry.node.kind().can_contain(node.kind()) {
            // The child does not exist yet; report it under the key it would get.
            let child = NodeKey::new(self.nodes.len() as u32);
            return Err(GraphError::InvalidContainment { parent, child });
        }

        let key = self.alloc(node, Some(parent));
        self.entry_mut(parent)
            .expect("parent checked live above")
            .children
            .push(key);
        Ok(key)
    }

    /// Moves an existing root under `parent`. Fails with `InvalidContainment`
    /// when `child` already has a different parent, when the move would
    /// create a containment cycle (including `child == parent`), or when the
    /// variants are incompatible. The model is unchanged on failure.
    pub fn adopt(&mut self, parent: NodeKey, child: NodeKey) -> Result<(), GraphError> {
        let Some(parent_entry) = self.entry(parent) else {
            return Err(GraphError::StaleKey { node: parent });
        };
        let Some(child_entry) = self.entry(child) else {
            return Err(GraphError::StaleKey { node: child });
        };

        if child_entry.parent == Some(parent) {
            return Ok(());
        }
        if child_entry.parent.is_some() {
            return Err(GraphError::InvalidContainment { parent, child });
        }
        if child == parent || self.is_ancestor(child, parent) {
            return Err(GraphError::InvalidContainment { parent, child });
        }
        if !parent_entry.node.kind().can_contain(child_entry.node.kind()) {
            return Err(GraphError::InvalidContainment { parent, child });
        }

        self.roots.retain(|&root| root != child);
        self.entry_mut(child).expect("child checked live above").parent = Some(parent);
        self.entry_mut(parent)
            .expect("parent checked live above")
            .children
            .push(child);
        Ok(())
    }

    /// Whether `ancestor` appears on the parent chain of `node`.
    pub fn is_ancestor(&self, ancestor: NodeKey, node: NodeKey) -> bool {
        let mut cursor = self.parent(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// Creates a new edge. Endpoints must be live (and therefore reachable
    /// from a root); self-loops require the kind to support them.
    pub fn connect(
        &mut self,
        start: NodeKey,
        end: NodeKey,
        kind: EdgeKind,
        labels: EdgeLabels,
    ) -> Result<EdgeKey, GraphError> {
        if !self.contains_node(start) {
            return Err(GraphError::DanglingEndpoint { node: start });
        }
        if !self.contains_node(end) {
            return Err(GraphError::DanglingEndpoint { node: end });
        }
        if start == end && !kind.allows_self_loop() {
            return Err(GraphError::SelfReference { node: start, kind: kind.kind_name() });
        }

        let key = EdgeKey::new(self.edges.len() as u32);
        self.edges.push(Some(Edge::new(kind, start, end, labels)));
        Ok(key)
    }

    /// Moves the node and, for containers, its transitive children.
    /// A stale key is a no-op. Containment is unaffected.
    pub fn translate(&mut self, key: NodeKey, dx: i32, dy: i32) {
        let mut pending: SmallVec<[NodeKey; 8]> = SmallVec::new();
        pending.push(key);
        while let Some(current) = pending.pop() {
            if let Some(entry) = self.entry_mut(current) {
                entry.node.translate(dx, dy);
                pending.extend(entry.children.iter().copied());
            }
        }
    }

    /// Removes the node, its transitive children, and every edge incident to
    /// any removed node. Stale keys are a no-op (removal is idempotent).
    pub fn remove_node(&mut self, key: NodeKey) {
        if !self.contains_node(key) {
            return;
        }

        let mut doomed = Vec::new();
        self.push_subtree(key, &mut doomed);

        for slot in &mut self.edges {
            let incident = slot
                .as_ref()
                .is_some_and(|edge| doomed.contains(&edge.start()) || doomed.contains(&edge.end()));
            if incident {
                *slot = None;
            }
        }

        match self.parent(key) {
            Some(parent) => {
                if let Some(entry) = self.entry_mut(parent) {
                    entry.children.retain(|&mut child| child != key);
                }
            }
            None => self.roots.retain(|&root| root != key),
        }

        for dead in doomed {
            self.nodes[dead.index()] = None;
        }
    }

    /// Removes one edge. Stale keys are a no-op.
    pub fn remove_edge(&mut self, key: EdgeKey) {
        if let Some(slot) = self.edges.get_mut(key.index()) {
            *slot = None;
        }
    }

    fn edge_bounds(&self, edge: &Edge) -> Option<Rectangle> {
        let start = self.node(edge.start())?.bounds().center();
        let end = self.node(edge.end())?.bounds().center();
        Some(Line::new(start, end).bounds())
    }

    /// Union of all node and edge bounds; the empty diagram has zero bounds.
    pub fn bounds(&self) -> Rectangle {
        let mut acc: Option<Rectangle> = None;
        for slot in self.nodes.iter().flatten() {
            let rect = slot.node.bounds();
            acc = Some(acc.map_or(rect, |current| current.union(&rect)));
        }
        for (_, edge) in self.edges() {
            if let Some(rect) = self.edge_bounds(edge) {
                acc = Some(acc.map_or(rect, |current| current.union(&rect)));
            }
        }
        acc.unwrap_or(Rectangle::ZERO)
    }

    /// The topmost node whose bounds contain `point`, or `None`.
    ///
    /// Draw order decides ties for overlapping nodes: roots later in the
    /// sequence and children (which draw above their parents) win. This is
    /// the tie-break the rubberband release relies on.
    pub fn node_at(&self, point: Point) -> Option<NodeKey> {
        let mut hit = None;
        for key in self.nodes_in_draw_order() {
            if let Some(node) = self.node(key) {
                if node.bounds().contains(point) {
                    hit = Some(key);
                }
            }
        }
        hit
    }
}
