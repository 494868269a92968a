// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Static chart inputs.
//!
//! A dataset is the sentiment series, the phase list and the note index. All three are
//! loaded once and never mutated by the interactive view.

pub mod dataset;
pub mod notes;
pub mod phase;
pub mod sentiment;

pub use dataset::{DataError, Dataset};
pub use notes::{NoteIndex, NOTE_FALLBACK};
pub use phase::{Phase, PhaseError, PhaseList};
pub use sentiment::{SentimentPoint, SentimentSeries, SeriesError};
