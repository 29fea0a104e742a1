// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Serde record types for the persisted document.
//!
//! Records are the wire shape only; they never reference model keys. Nodes
//! are addressed by their 0-based position in the document's node list, and
//! container records carry the ordered index list of their children.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

pub(crate) const DOCUMENT_VERSION: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct DocumentRecord {
    pub version: String,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct NodeRecord {
    #[serde(flatten)]
    pub kind: NodeKindRecord,
    pub x: i32,
    pub y: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum NodeKindRecord {
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct EdgeRecord {
    #[serde(flatten)]
    pub kind: EdgeKindRecord,
    pub start: usize,
    pub end: usize,
    #[serde(default, skip_serializing_if = "SmolStr::is_empty")]
    pub start_label: SmolStr,
    #[serde(default, skip_serializing_if = "SmolStr::is_empty")]
    pub middle_label: SmolStr,
    #[serde(default, skip_serializing_if = "SmolStr::is_empty")]
    pub end_label: SmolStr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum EdgeKindRecord {
    Dependency,
    Generalization { variant: GeneralizationVariant },
    Aggregation { variant: AggregationVariant },
    Association,
    NoteConnector,
    Call { signal: bool },
    Return,
    StateTransition,
    ObjectReference,
    ObjectCollaboration,
    UseCaseAssociation,
    UseCaseDependency { variant: UseCaseDependencyVariant },
    UseCaseGeneralization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum GeneralizationVariant {
    Inheritance,
    Implementation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum AggregationVariant {
    Aggregation,
    Composition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum UseCaseDependencyVariant {
    Include,
    Extend,
}
