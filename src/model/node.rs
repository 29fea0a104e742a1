// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use crate::geom::{Dimension, Point, Rectangle};

/// The closed set of node variants, carrying only the fields relevant to
/// each variant. Width/height are not model state; [`NodeKind::default_size`]
/// supplies the content-independent box the core reasons about, and the
/// rendering collaborator may compute richer bounds on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Class { name: SmolStr, attributes: SmolStr, methods: SmolStr },
    Interface { name: SmolStr, methods: SmolStr },
    Package { name: SmolStr, contents: SmolStr },
    Note { text: SmolStr },
    Point,
    State { name: SmolStr },
    InitialState,
    FinalState,
    Actor { name: SmolStr },
    UseCase { name: SmolStr },
    Object { name: SmolStr },
    Field { name: SmolStr, value: SmolStr },
    ImplicitParameter { name: SmolStr },
    Call { open_bottom: bool },
}

impl NodeKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Class { .. } => "class",
            Self::Interface { .. } => "interface",
            Self::Package { .. } => "package",
            Self::Note { .. } => "note",
            Self::Point => "point",
            Self::State { .. } => "state",
            Self::InitialState => "initial_state",
            Self::FinalState => "final_state",
            Self::Actor { .. } => "actor",
            Self::UseCase { .. } => "use_case",
            Self::Object { .. } => "object",
            Self::Field { .. } => "field",
            Self::ImplicitParameter { .. } => "implicit_parameter",
            Self::Call { .. } => "call",
        }
    }

    /// Default content box per variant, matching the renderer's baseline sizes.
    pub fn default_size(&self) -> Dimension {
        match self {
            Self::Class { .. } | Self::Interface { .. } => Dimension::new(100, 60),
            Self::Package { .. } => Dimension::new(100, 80),
            Self::Note { .. } => Dimension::new(60, 40),
            Self::Point => Dimension::new(0, 0),
            Self::State { .. } => Dimension::new(80, 60),
            Self::InitialState | Self::FinalState => Dimension::new(20, 20),
            Self::Actor { .. } => Dimension::new(48, 88),
            Self::UseCase { .. } => Dimension::new(110, 40),
            Self::Object { .. } => Dimension::new(80, 60),
            Self::Field { .. } => Dimension::new(60, 20),
            Self::ImplicitParameter { .. } => Dimension::new(80, 120),
            Self::Call { .. } => Dimension::new(16, 30),
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Package { .. } | Self::Object { .. } | Self::ImplicitParameter { .. }
        )
    }

    /// Containment compatibility: packages nest class-diagram material,
    /// objects own fields, implicit parameters own calls.
    pub fn can_contain(&self, child: &NodeKind) -> bool {
        match self {
            Self::Package { .. } => matches!(
                child,
                NodeKind::Class { .. }
                    | NodeKind::Interface { .. }
                    | NodeKind::Package { .. }
                    | NodeKind::Note { .. }
            ),
            Self::Object { .. } => matches!(child, NodeKind::Field { .. }),
            Self::ImplicitParameter { .. } => matches!(child, NodeKind::Call { .. }),
            _ => false,
        }
    }
}

/// A graph vertex: a position plus its typed variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    position: Point,
    kind: NodeKind,
}

impl Node {
    pub fn new(kind: NodeKind, position: Point) -> Self {
        Self { position, kind }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut NodeKind {
        &mut self.kind
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::at(self.position, self.kind.default_size())
    }

    pub(crate) fn translate(&mut self, dx: i32, dy: i32) {
        self.position = self.position.translated(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use smol_str::SmolStr;

    use super::{Node, NodeKind};
    use crate::geom::{Point, Rectangle};

    fn class(name: &str) -> NodeKind {
        NodeKind::Class {
            name: SmolStr::new(name),
            attributes: SmolStr::default(),
            methods: SmolStr::default(),
        }
    }

    #[test]
    fn bounds_come_from_position_and_default_size() {
        let node = Node::new(class("A"), Point::new(30, 40));
        assert_eq!(node.bounds(), Rectangle::new(30, 40, 100, 60));

        let point = Node::new(NodeKind::Point, Point::new(5, 6));
        assert_eq!(point.bounds(), Rectangle::new(5, 6, 0, 0));
    }

    #[test]
    fn containment_compatibility_is_variant_based() {
        let package = NodeKind::Package { name: SmolStr::new("p"), contents: SmolStr::default() };
        let object = NodeKind::Object { name: SmolStr::new("o") };
        let field = NodeKind::Field { name: SmolStr::new("f"), value: SmolStr::default() };

        assert!(package.can_contain(&class("A")));
        assert!(package.can_contain(&package.clone()));
        assert!(!package.can_contain(&field));
        assert!(object.can_contain(&field));
        assert!(!object.can_contain(&class("A")));
        assert!(!field.can_contain(&field.clone()));
    }
}
