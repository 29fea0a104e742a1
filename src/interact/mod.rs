// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The interactive manipulation engine: selection state, the drag-mode
//! state machine driving it, and grid snapping.
//!
//! Everything here runs on the single interaction thread in response to
//! discrete pointer events; nothing blocks or suspends.

mod drag;
pub mod grid;
mod selection;

pub use drag::{DragController, DragMode, DragOutcome, Modifiers};
pub use selection::{Element, SelectionModel};
