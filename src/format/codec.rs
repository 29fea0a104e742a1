// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::fmt;

use crate::geom::Point;
use crate::model::{
    AggregationKind, Diagram, EdgeKind, EdgeLabels, GeneralizationKind, GraphError, Node, NodeKey,
    NodeKind, UseCaseDependencyKind,
};

use super::records::{
    AggregationVariant, DocumentRecord, EdgeKindRecord, EdgeRecord, GeneralizationVariant,
    NodeKindRecord, NodeRecord, UseCaseDependencyVariant, DOCUMENT_VERSION,
};

#[derive(Debug)]
pub enum DecodeError {
    /// Not well-formed JSON, an unknown discriminant, or a missing required
    /// field for a given discriminant.
    Malformed { source: serde_json::Error },
    UnsupportedVersion { version: String },
    /// A child list or edge endpoint references an index outside `0..node_count`.
    NodeIndexOutOfRange { context: &'static str, index: usize, node_count: usize },
    /// A node is claimed as a child by more than one parent.
    DuplicateChild { child: usize },
    /// A child list closes a containment cycle or pairs incompatible variants.
    InvalidContainment { parent: usize, child: usize },
    /// `start == end` on an edge whose variant declares no self-loop support.
    IllegalSelfLoop { edge: usize, kind: &'static str },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { source } => write!(f, "malformed diagram document: {source}"),
            Self::UnsupportedVersion { version } => {
                write!(f, "unsupported document version: {version:?} (expected {DOCUMENT_VERSION:?})")
            }
            Self::NodeIndexOutOfRange { context, index, node_count } => write!(
                f,
                "{context} references node index {index}, but the document has {node_count} nodes"
            ),
            Self::DuplicateChild { child } => {
                write!(f, "node index {child} is listed as a child of more than one parent")
            }
            Self::InvalidContainment { parent, child } => {
                write!(f, "node index {child} cannot be contained by node index {parent}")
            }
            Self::IllegalSelfLoop { edge, kind } => {
                write!(f, "edge {edge} of kind '{kind}' connects a node to itself")
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed { source } => Some(source),
            _ => None,
        }
    }
}

/// Serializes a diagram to the persisted document text.
///
/// Index assignment is the document's identity scheme: first every root in
/// sequence order, then, walking the roots again, their children recursively
/// in pre-order. Encoding is total for any in-memory diagram.
pub fn encode(diagram: &Diagram) -> String {
    let order = document_order(diagram);
    let mut indices = HashMap::with_capacity(order.len());
    for (index, &key) in order.iter().enumerate() {
        indices.insert(key, index);
    }

    let nodes = order
        .iter()
        .map(|&key| {
            let node = diagram.node(key).expect("document order lists live nodes");
            let children = diagram
                .children(key)
                .iter()
                .map(|child| indices[child])
                .collect();
            NodeRecord {
                kind: node_kind_record(node.kind()),
                x: node.position().x,
                y: node.position().y,
                children,
            }
        })
        .collect();

    let edges = diagram
        .edges()
        .map(|(_, edge)| {
            let labels = edge.labels();
            EdgeRecord {
                kind: edge_kind_record(edge.kind()),
                start: indices[&edge.start()],
                end: indices[&edge.end()],
                start_label: labels.start.clone(),
                middle_label: labels.middle.clone(),
                end_label: labels.end.clone(),
            }
        })
        .collect();

    let document = DocumentRecord { version: DOCUMENT_VERSION.to_owned(), nodes, edges };
    let mut text = serde_json::to_string_pretty(&document).expect("diagram records serialize");
    text.push('\n');
    text
}

/// Reconstructs a diagram from the persisted document text. Any failure
/// aborts the whole decode; no partial diagram is ever returned.
pub fn decode(text: &str) -> Result<Diagram, DecodeError> {
    let document: DocumentRecord =
        serde_json::from_str(text).map_err(|source| DecodeError::Malformed { source })?;
    if document.version != DOCUMENT_VERSION {
        return Err(DecodeError::UnsupportedVersion { version: document.version });
    }

    let mut diagram = Diagram::new();
    let node_count = document.nodes.len();

    // Pass 1: materialize every node as a root, in document order. Roots are
    // exactly the nodes no child list claims, so pass 2 re-establishes both
    // the containment tree and the persisted root sequence.
    let keys: Vec<NodeKey> = document
        .nodes
        .iter()
        .map(|record| {
            diagram.add_root(Node::new(
                node_kind_from_record(&record.kind),
                Point::new(record.x, record.y),
            ))
        })
        .collect();

    // Pass 2: wire containment.
    for (parent_index, record) in document.nodes.iter().enumerate() {
        for &child_index in &record.children {
            if child_index >= node_count {
                return Err(DecodeError::NodeIndexOutOfRange {
                    context: "child list",
                    index: child_index,
                    node_count,
                });
            }
            if diagram.parent(keys[child_index]).is_some() {
                return Err(DecodeError::DuplicateChild { child: child_index });
            }
            diagram
                .adopt(keys[parent_index], keys[child_index])
                .map_err(|_| DecodeError::InvalidContainment {
                    parent: parent_index,
                    child: child_index,
                })?;
        }
    }

    // Pass 3: edges.
    for (edge_index, record) in document.edges.iter().enumerate() {
        for (context, index) in [("edge start", record.start), ("edge end", record.end)] {
            if index >= node_count {
                return Err(DecodeError::NodeIndexOutOfRange { context, index, node_count });
            }
        }

        let kind = edge_kind_from_record(record.kind);
        if record.start == record.end && !kind.allows_self_loop() {
            return Err(DecodeError::IllegalSelfLoop {
                edge: edge_index,
                kind: kind.kind_name(),
            });
        }

        let labels = EdgeLabels::new(
            record.start_label.clone(),
            record.middle_label.clone(),
            record.end_label.clone(),
        );
        diagram
            .connect(keys[record.start], keys[record.end], kind, labels)
            .map_err(|error| match error {
                // Unreachable after the checks above; kept as a decode error
                // rather than a panic so a bug cannot take the caller down.
                GraphError::SelfReference { kind, .. } => {
                    DecodeError::IllegalSelfLoop { edge: edge_index, kind }
                }
                _ => DecodeError::NodeIndexOutOfRange {
                    context: "edge endpoint",
                    index: record.start,
                    node_count,
                },
            })?;
    }

    Ok(diagram)
}

/// Document order: all roots first, then each root's children recursively.
fn document_order(diagram: &Diagram) -> Vec<NodeKey> {
    let mut order: Vec<NodeKey> = diagram.roots().to_vec();
    for &root in diagram.roots() {
        push_descendants(diagram, root, &mut order);
    }
    order
}

fn push_descendants(diagram: &Diagram, key: NodeKey, out: &mut Vec<NodeKey>) {
    for &child in diagram.children(key) {
        out.push(child);
        push_descendants(diagram, child, out);
    }
}

fn node_kind_record(kind: &NodeKind) -> NodeKindRecord {
    match kind {
        NodeKind::Class { name, attributes, methods } => NodeKindRecord::Class {
            name: name.clone(),
            attributes: attributes.clone(),
            methods: methods.clone(),
        },
        NodeKind::Interface { name, methods } => {
            NodeKindRecord::Interface { name: name.clone(), methods: methods.clone() }
        }
        NodeKind::Package { name, contents } => {
            NodeKindRecord::Package { name: name.clone(), contents: contents.clone() }
        }
        NodeKind::Note { text } => NodeKindRecord::Note { text: text.clone() },
        NodeKind::Point => NodeKindRecord::Point,
        NodeKind::State { name } => NodeKindRecord::State { name: name.clone() },
        NodeKind::InitialState => NodeKindRecord::InitialState,
        NodeKind::FinalState => NodeKindRecord::FinalState,
        NodeKind::Actor { name } => NodeKindRecord::Actor { name: name.clone() },
        NodeKind::UseCase { name } => NodeKindRecord::UseCase { name: name.clone() },
        NodeKind::Object { name } => NodeKindRecord::Object { name: name.clone() },
        NodeKind::Field { name, value } => {
            NodeKindRecord::Field { name: name.clone(), value: value.clone() }
        }
        NodeKind::ImplicitParameter { name } => {
            NodeKindRecord::ImplicitParameter { name: name.clone() }
        }
        NodeKind::Call { open_bottom } => NodeKindRecord::Call { open_bottom: *open_bottom },
    }
}

fn node_kind_from_record(record: &NodeKindRecord) -> NodeKind {
    match record {
        NodeKindRecord::Class { name, attributes, methods } => NodeKind::Class {
            name: name.clone(),
            attributes: attributes.clone(),
            methods: methods.clone(),
        },
        NodeKindRecord::Interface { name, methods } => {
            NodeKind::Interface { name: name.clone(), methods: methods.clone() }
        }
        NodeKindRecord::Package { name, contents } => {
            NodeKind::Package { name: name.clone(), contents: contents.clone() }
        }
        NodeKindRecord::Note { text } => NodeKind::Note { text: text.clone() },
        NodeKindRecord::Point => NodeKind::Point,
        NodeKindRecord::State { name } => NodeKind::State { name: name.clone() },
        NodeKindRecord::InitialState => NodeKind::InitialState,
        NodeKindRecord::FinalState => NodeKind::FinalState,
        NodeKindRecord::Actor { name } => NodeKind::Actor { name: name.clone() },
        NodeKindRecord::UseCase { name } => NodeKind::UseCase { name: name.clone() },
        NodeKindRecord::Object { name } => NodeKind::Object { name: name.clone() },
        NodeKindRecord::Field { name, value } => {
            NodeKind::Field { name: name.clone(), value: value.clone() }
        }
        NodeKindRecord::ImplicitParameter { name } => {
            NodeKind::ImplicitParameter { name: name.clone() }
        }
        NodeKindRecord::Call { open_bottom } => NodeKind::Call { open_bottom: *open_bottom },
    }
}

fn edge_kind_record(kind: EdgeKind) -> EdgeKindRecord {
    match kind {
        EdgeKind::Dependency => EdgeKindRecord::Dependency,
        EdgeKind::Generalization(GeneralizationKind::Inheritance) => {
            EdgeKindRecord::Generalization { variant: GeneralizationVariant::Inheritance }
        }
        EdgeKind::Generalization(GeneralizationKind::Implementation) => {
            EdgeKindRecord::Generalization { variant: GeneralizationVariant::Implementation }
        }
        EdgeKind::Aggregation(AggregationKind::Aggregation) => {
            EdgeKindRecord::Aggregation { variant: AggregationVariant::Aggregation }
        }
        EdgeKind::Aggregation(AggregationKind::Composition) => {
            EdgeKindRecord::Aggregation { variant: AggregationVariant::Composition }
        }
        EdgeKind::Association => EdgeKindRecord::Association,
        EdgeKind::NoteConnector => EdgeKindRecord::NoteConnector,
        EdgeKind::Call { signal } => EdgeKindRecord::Call { signal },
        EdgeKind::Return => EdgeKindRecord::Return,
        EdgeKind::StateTransition => EdgeKindRecord::StateTransition,
        EdgeKind::ObjectReference => EdgeKindRecord::ObjectReference,
        EdgeKind::ObjectCollaboration => EdgeKindRecord::ObjectCollaboration,
        EdgeKind::UseCaseAssociation => EdgeKindRecord::UseCaseAssociation,
        EdgeKind::UseCaseDependency(UseCaseDependencyKind::Include) => {
            EdgeKindRecord::UseCaseDependency { variant: UseCaseDependencyVariant::Include }
        }
        EdgeKind::UseCaseDependency(UseCaseDependencyKind::Extend) => {
            EdgeKindRecord::UseCaseDependency { variant: UseCaseDependencyVariant::Extend }
        }
        EdgeKind::UseCaseGeneralization => EdgeKindRecord::UseCaseGeneralization,
    }
}

fn edge_kind_from_record(record: EdgeKindRecord) -> EdgeKind {
    match record {
        EdgeKindRecord::Dependency => EdgeKind::Dependency,
        EdgeKindRecord::Generalization { variant: GeneralizationVariant::Inheritance } => {
            EdgeKind::Generalization(GeneralizationKind::Inheritance)
        }
        EdgeKindRecord::Generalization { variant: GeneralizationVariant::Implementation } => {
            EdgeKind::Generalization(GeneralizationKind::Implementation)
        }
        EdgeKindRecord::Aggregation { variant: AggregationVariant::Aggregation } => {
            EdgeKind::Aggregation(AggregationKind::Aggregation)
        }
        EdgeKindRecord::Aggregation { variant: AggregationVariant::Composition } => {
            EdgeKind::Aggregation(AggregationKind::Composition)
        }
        EdgeKindRecord::Association => EdgeKind::Association,
        EdgeKindRecord::NoteConnector => EdgeKind::NoteConnector,
        EdgeKindRecord::Call { signal } => EdgeKind::Call { signal },
        EdgeKindRecord::Return => EdgeKind::Return,
        EdgeKindRecord::StateTransition => EdgeKind::StateTransition,
        EdgeKindRecord::ObjectReference => EdgeKind::ObjectReference,
        EdgeKindRecord::ObjectCollaboration => EdgeKind::ObjectCollaboration,
        EdgeKindRecord::UseCaseAssociation => EdgeKind::UseCaseAssociation,
        EdgeKindRecord::UseCaseDependency { variant: UseCaseDependencyVariant::Include } => {
            EdgeKind::UseCaseDependency(UseCaseDependencyKind::Include)
        }
        EdgeKindRecord::UseCaseDependency { variant: UseCaseDependencyVariant::Extend } => {
            EdgeKind::UseCaseDependency(UseCaseDependencyKind::Extend)
        }
        EdgeKindRecord::UseCaseGeneralization => EdgeKind::UseCaseGeneralization,
    }
}
