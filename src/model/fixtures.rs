// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deterministic diagram fixtures shared by unit tests.

use smol_str::SmolStr;

use crate::geom::Point;

use super::diagram::Diagram;
use super::edge::{EdgeKind, EdgeLabels, UseCaseDependencyKind};
use super::node::{Node, NodeKind};

fn class(name: &str, x: i32, y: i32) -> Node {
    Node::new(
        NodeKind::Class {
            name: SmolStr::new(name),
            attributes: SmolStr::default(),
            methods: SmolStr::default(),
        },
        Point::new(x, y),
    )
}

fn interface(name: &str, x: i32, y: i32) -> Node {
    Node::new(
        NodeKind::Interface { name: SmolStr::new(name), methods: SmolStr::default() },
        Point::new(x, y),
    )
}

fn package(name: &str, x: i32, y: i32) -> Node {
    Node::new(
        NodeKind::Package { name: SmolStr::new(name), contents: SmolStr::default() },
        Point::new(x, y),
    )
}

fn note(text: &str, x: i32, y: i32) -> Node {
    Node::new(NodeKind::Note { text: SmolStr::new(text) }, Point::new(x, y))
}

/// A class diagram with nested packages: four roots (three packages and a
/// note), one singly and one doubly nested containment chain, and three
/// dependency edges, one of them between packages.
pub(crate) fn class_diagram_nested() -> Diagram {
    let mut diagram = Diagram::new();

    let p1 = diagram.add_root(package("p1", 310, 230));
    let c1 = diagram.add_child(p1, class("C1", 320, 260)).expect("c1 under p1");

    let p2 = diagram.add_root(package("p2", 477, 130));

    let p3 = diagram.add_root(package("p3", 620, 270));
    let p4 = diagram.add_child(p3, package("p4", 630, 300)).expect("p4 under p3");
    let i1 = diagram.add_child(p4, interface("I1", 640, 330)).expect("i1 under p4");
    let c2 = diagram.add_child(p4, class("C2", 810, 330)).expect("c2 under p4");

    diagram.add_root(note("n1", 490, 160));

    diagram
        .connect(c1, i1, EdgeKind::Dependency, EdgeLabels::middle("e1"))
        .expect("e1");
    diagram
        .connect(c2, i1, EdgeKind::Dependency, EdgeLabels::middle("e2"))
        .expect("e2");
    diagram
        .connect(p3, p2, EdgeKind::Dependency, EdgeLabels::middle("e3"))
        .expect("e3");

    diagram
}

/// A state diagram with a start/end pair and a self-transition.
pub(crate) fn state_diagram_self_transition() -> Diagram {
    let mut diagram = Diagram::new();

    let start = diagram.add_root(Node::new(NodeKind::InitialState, Point::new(150, 70)));
    let s1 = diagram.add_root(Node::new(
        NodeKind::State { name: SmolStr::new("S1") },
        Point::new(250, 100),
    ));
    let s2 = diagram.add_root(Node::new(
        NodeKind::State { name: SmolStr::new("S2") },
        Point::new(510, 100),
    ));
    let end = diagram.add_root(Node::new(NodeKind::FinalState, Point::new(640, 230)));

    diagram
        .connect(start, s1, EdgeKind::StateTransition, EdgeLabels::middle("start"))
        .expect("start transition");
    diagram
        .connect(s1, s2, EdgeKind::StateTransition, EdgeLabels::middle("e1"))
        .expect("e1");
    diagram
        .connect(s2, s1, EdgeKind::StateTransition, EdgeLabels::middle("e2"))
        .expect("e2");
    diagram
        .connect(s2, s2, EdgeKind::StateTransition, EdgeLabels::middle("self"))
        .expect("self transition");
    diagram
        .connect(s2, end, EdgeKind::StateTransition, EdgeLabels::default())
        .expect("end transition");

    diagram
}

/// An object diagram: an object with fields, a second object, a reference
/// edge out of a field and a collaboration edge between the objects.
pub(crate) fn object_diagram_fields() -> Diagram {
    let mut diagram = Diagram::new();

    let o1 = diagram.add_root(Node::new(
        NodeKind::Object { name: SmolStr::new(":Type1") },
        Point::new(240, 130),
    ));
    let name = diagram
        .add_child(
            o1,
            Node::new(
                NodeKind::Field { name: SmolStr::new("name"), value: SmolStr::default() },
                Point::new(245, 200),
            ),
        )
        .expect("field under o1");

    let o2 = diagram.add_root(Node::new(
        NodeKind::Object { name: SmolStr::new("object2:") },
        Point::new(540, 150),
    ));

    diagram
        .connect(name, o2, EdgeKind::ObjectReference, EdgeLabels::default())
        .expect("reference");
    diagram
        .connect(o1, o2, EdgeKind::ObjectCollaboration, EdgeLabels::middle("e1"))
        .expect("collaboration");

    diagram
}

/// A sequence diagram: two implicit parameters owning call nodes, connected
/// by a call and its return.
pub(crate) fn sequence_diagram_calls() -> Diagram {
    let mut diagram = Diagram::new();

    let obj1 = diagram.add_root(Node::new(
        NodeKind::ImplicitParameter { name: SmolStr::new("object1:Type1") },
        Point::new(160, 0),
    ));
    let call1 = diagram
        .add_child(obj1, Node::new(NodeKind::Call { open_bottom: false }, Point::new(197, 80)))
        .expect("call under obj1");

    let obj2 = diagram.add_root(Node::new(
        NodeKind::ImplicitParameter { name: SmolStr::new(":Type2") },
        Point::new(370, 0),
    ));
    let call2 = diagram
        .add_child(obj2, Node::new(NodeKind::Call { open_bottom: false }, Point::new(402, 120)))
        .expect("call under obj2");

    diagram
        .connect(call1, call2, EdgeKind::Call { signal: false }, EdgeLabels::middle("call1()"))
        .expect("call edge");
    diagram
        .connect(call2, call1, EdgeKind::Return, EdgeLabels::middle("r1"))
        .expect("return edge");

    diagram
}

/// A use case diagram: two actors, three use cases, association and
/// include/extend/generalization edges.
pub(crate) fn use_case_diagram() -> Diagram {
    let mut diagram = Diagram::new();

    let actor1 = diagram.add_root(Node::new(
        NodeKind::Actor { name: SmolStr::new("Actor") },
        Point::new(270, 50),
    ));
    let actor2 = diagram.add_root(Node::new(
        NodeKind::Actor { name: SmolStr::new("Actor2") },
        Point::new(280, 230),
    ));
    let u1 = diagram.add_root(Node::new(
        NodeKind::UseCase { name: SmolStr::new("Use case 1") },
        Point::new(440, 40),
    ));
    let u2 = diagram.add_root(Node::new(
        NodeKind::UseCase { name: SmolStr::new("Use case 2") },
        Point::new(460, 130),
    ));
    let u3 = diagram.add_root(Node::new(
        NodeKind::UseCase { name: SmolStr::new("Use case 3") },
        Point::new(460, 230),
    ));

    diagram
        .connect(actor1, u1, EdgeKind::UseCaseAssociation, EdgeLabels::default())
        .expect("association");
    diagram
        .connect(actor2, actor1, EdgeKind::UseCaseGeneralization, EdgeLabels::default())
        .expect("actor generalization");
    diagram
        .connect(
            u2,
            u3,
            EdgeKind::UseCaseDependency(UseCaseDependencyKind::Include),
            EdgeLabels::default(),
        )
        .expect("include");
    diagram
        .connect(
            u2,
            u1,
            EdgeKind::UseCaseDependency(UseCaseDependencyKind::Extend),
            EdgeLabels::default(),
        )
        .expect("extend");

    diagram
}
