// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pointer and click resolution against the static dataset.
//!
//! - `hover`: data-space x to the enclosing phase.
//! - `annotate`: phase or marker click to a structured note ready to pin.

pub mod annotate;
pub mod hover;

pub use annotate::{annotate_phase, annotate_point, Note, NoteEntry};
pub use hover::{phase_at, HoverSample};
