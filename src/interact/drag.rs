// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use crate::geom::{Dimension, Line, Point, Rectangle};
use crate::model::{Diagram, NodeKey};

use super::grid;
use super::selection::{Element, SelectionModel};

/// The four gesture interpretations. Exactly one is active between
/// `begin_drag` and `end_drag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    None,
    Move,
    Lasso,
    Rubberband,
}

/// Modifier-key state at pointer-down. `multi_select` is the toggle
/// modifier; `connect` marks the press as a connection gesture (the caller's
/// edge tool or a node's connection affordance).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub multi_select: bool,
    pub connect: bool,
}

/// What the finished gesture asks of the caller. A rubberband released over
/// two nodes becomes an edge-creation request; the edge variant is the
/// caller's choice and `Diagram::connect` has the final word on validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Completed,
    Connect { start: NodeKey, end: NodeKey },
}

/// Interprets one pointer gesture against a diagram and a selection model.
///
/// `begin_drag` picks the mode from what is hit at the press point, each
/// `drag` mutates the models and returns a point to keep visible, and
/// `end_drag` finalizes and returns the machine to `None`. There is no
/// cancel; a caller adding one should issue `end_drag` at the anchor point.
#[derive(Debug, Clone)]
pub struct DragController {
    mode: DragMode,
    mouse_down: Point,
    last: Point,
    additive: bool,
    canvas: Dimension,
    grid_spacing: i32,
}

impl DragController {
    pub fn new(canvas: Dimension, grid_spacing: i32) -> Self {
        Self {
            mode: DragMode::None,
            mouse_down: Point::ORIGIN,
            last: Point::ORIGIN,
            additive: false,
            canvas,
            grid_spacing,
        }
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn begin_drag(
        &mut self,
        point: Point,
        modifiers: Modifiers,
        diagram: &Diagram,
        selection: &mut SelectionModel,
    ) {
        self.mouse_down = point;
        self.last = point;
        self.additive = modifiers.multi_select;

        self.mode = match diagram.node_at(point) {
            Some(_) if modifiers.connect => DragMode::Rubberband,
            Some(node) => {
                if modifiers.multi_select {
                    selection.toggle(Element::Node(node));
                } else if !selection.contains_node(node) {
                    selection.clear_selection();
                    selection.select(Element::Node(node));
                }
                if selection.contains_node(node) {
                    DragMode::Move
                } else {
                    // The toggle deselected the pressed node; nothing to drag.
                    DragMode::None
                }
            }
            None if modifiers.connect => DragMode::None,
            None => {
                if !modifiers.multi_select {
                    selection.clear_selection();
                }
                DragMode::Lasso
            }
        };
    }

    /// Feeds one pointer-move into the active mode. Returns the point the
    /// caller should scroll into view.
    pub fn drag(
        &mut self,
        point: Point,
        diagram: &mut Diagram,
        selection: &mut SelectionModel,
    ) -> Point {
        match self.mode {
            DragMode::None => point,
            DragMode::Move => self.drag_move(point, diagram, selection),
            DragMode::Lasso => {
                self.last = point;
                if !self.additive {
                    selection.clear_selection();
                }
                selection.activate_lasso(Rectangle::spanning(self.mouse_down, point), diagram);
                point
            }
            DragMode::Rubberband => {
                self.last = point;
                selection.activate_rubberband(Line::new(self.mouse_down, point));
                point
            }
        }
    }

    pub fn end_drag(
        &mut self,
        point: Point,
        diagram: &mut Diagram,
        selection: &mut SelectionModel,
    ) -> DragOutcome {
        let outcome = match self.mode {
            DragMode::None => DragOutcome::Completed,
            DragMode::Move => {
                self.align_move_to_grid(diagram, selection);
                DragOutcome::Completed
            }
            DragMode::Lasso => {
                selection.deactivate_lasso();
                DragOutcome::Completed
            }
            DragMode::Rubberband => {
                selection.deactivate_rubberband();
                match (diagram.node_at(self.mouse_down), diagram.node_at(point)) {
                    (Some(start), Some(end)) => DragOutcome::Connect { start, end },
                    _ => DragOutcome::Completed,
                }
            }
        };
        self.mode = DragMode::None;
        outcome
    }

    fn drag_move(
        &mut self,
        point: Point,
        diagram: &mut Diagram,
        selection: &mut SelectionModel,
    ) -> Point {
        let mut dx = point.x - self.last.x;
        let mut dy = point.y - self.last.y;

        // Clamp so the selection's bounding rectangle stays on the canvas.
        let bounds = selection.selection_bounds(diagram);
        dx = dx.max(-bounds.x);
        dy = dy.max(-bounds.y);
        dx = dx.min(self.canvas.width - bounds.max_x());
        dy = dy.min(self.canvas.height - bounds.max_y());

        let moving_left = point.x < self.last.x;
        let moving_up = point.y < self.last.y;

        for node in independent_nodes(selection, diagram) {
            diagram.translate(node, dx, dy);
        }
        self.last = point;

        // The leading corner of the moved selection in the direction of travel.
        let bounds = selection.selection_bounds(diagram);
        Point::new(
            if moving_left { bounds.x } else { bounds.max_x() },
            if moving_up { bounds.y } else { bounds.max_y() },
        )
    }

    /// Snaps the whole selection by the snap delta of the first selected
    /// node, keeping the relative layout fixed while aligning the group.
    fn align_move_to_grid(&self, diagram: &mut Diagram, selection: &mut SelectionModel) {
        selection.prune(diagram);
        let Some(first) = selection.first_selected_node() else {
            return;
        };
        let position = diagram.node(first).expect("pruned selection is live").position();
        let snapped = grid::snap(position, self.grid_spacing);
        let dx = snapped.x - position.x;
        let dy = snapped.y - position.y;
        if dx == 0 && dy == 0 {
            return;
        }
        for node in independent_nodes(selection, diagram) {
            diagram.translate(node, dx, dy);
        }
    }
}

/// Selected nodes without a selected ancestor. Containers translate their
/// subtree themselves, so a selected child of a selected container must not
/// be moved twice.
fn independent_nodes(selection: &SelectionModel, diagram: &Diagram) -> SmallVec<[NodeKey; 8]> {
    let selected = selection.selected_nodes();
    selected
        .iter()
        .copied()
        .filter(|&node| diagram.contains_node(node))
        .filter(|&node| {
            !selected
                .iter()
                .any(|&other| other != node && diagram.is_ancestor(other, node))
        })
        .collect()
}
