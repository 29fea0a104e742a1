// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The persisted document codec: a pure mapping between diagrams and their
//! versioned JSON text form. File I/O lives in `store`.

mod codec;
mod records;

pub use codec::{decode, encode, DecodeError};
