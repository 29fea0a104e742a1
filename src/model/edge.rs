// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use super::keys::NodeKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneralizationKind {
    Inheritance,
    Implementation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationKind {
    Aggregation,
    Composition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCaseDependencyKind {
    Include,
    Extend,
}

/// The closed set of edge variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Dependency,
    Generalization(GeneralizationKind),
    Aggregation(AggregationKind),
    Association,
    NoteConnector,
    Call { signal: bool },
    Return,
    StateTransition,
    ObjectReference,
    ObjectCollaboration,
    UseCaseAssociation,
    UseCaseDependency(UseCaseDependencyKind),
    UseCaseGeneralization,
}

impl EdgeKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Dependency => "dependency",
            Self::Generalization(_) => "generalization",
            Self::Aggregation(_) => "aggregation",
            Self::Association => "association",
            Self::NoteConnector => "note_connector",
            Self::Call { .. } => "call",
            Self::Return => "return",
            Self::StateTransition => "state_transition",
            Self::ObjectReference => "object_reference",
            Self::ObjectCollaboration => "object_collaboration",
            Self::UseCaseAssociation => "use_case_association",
            Self::UseCaseDependency(_) => "use_case_dependency",
            Self::UseCaseGeneralization => "use_case_generalization",
        }
    }

    /// Whether `start == end` is a legal edge for this variant.
    /// Self-transitions are a first-class state diagram feature; call edges
    /// tolerate self-calls at the wire level. Everything else rejects loops.
    pub fn allows_self_loop(&self) -> bool {
        matches!(self, Self::StateTransition | Self::Call { .. })
    }
}

/// Optional start/middle/end label text. Empty means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeLabels {
    pub start: SmolStr,
    pub middle: SmolStr,
    pub end: SmolStr,
}

impl EdgeLabels {
    pub fn middle(label: impl Into<SmolStr>) -> Self {
        Self { middle: label.into(), ..Self::default() }
    }

    pub fn new(
        start: impl Into<SmolStr>,
        middle: impl Into<SmolStr>,
        end: impl Into<SmolStr>,
    ) -> Self {
        Self { start: start.into(), middle: middle.into(), end: end.into() }
    }
}

/// A directed relationship between two nodes. Endpoints are fixed at
/// creation; reconnecting means deleting and recreating the edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    kind: EdgeKind,
    start: NodeKey,
    end: NodeKey,
    labels: EdgeLabels,
}

impl Edge {
    pub(crate) fn new(kind: EdgeKind, start: NodeKey, end: NodeKey, labels: EdgeLabels) -> Self {
        Self { kind, start, end, labels }
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn start(&self) -> NodeKey {
        self.start
    }

    pub fn end(&self) -> NodeKey {
        self.end
    }

    pub fn labels(&self) -> &EdgeLabels {
        &self.labels
    }

    pub fn set_labels(&mut self, labels: EdgeLabels) {
        self.labels = labels;
    }
}

#[cfg(test)]
mod tests {
    use super::{EdgeKind, EdgeLabels, GeneralizationKind};

    #[test]
    fn only_transitions_and_calls_allow_self_loops() {
        assert!(EdgeKind::StateTransition.allows_self_loop());
        assert!(EdgeKind::Call { signal: false }.allows_self_loop());
        assert!(!EdgeKind::Dependency.allows_self_loop());
        assert!(!EdgeKind::Generalization(GeneralizationKind::Inheritance).allows_self_loop());
        assert!(!EdgeKind::NoteConnector.allows_self_loop());
    }

    #[test]
    fn middle_label_constructor_leaves_ends_empty() {
        let labels = EdgeLabels::middle("flows");
        assert_eq!(labels.middle, "flows");
        assert!(labels.start.is_empty());
        assert!(labels.end.is_empty());
    }
}
