// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::interaction::{CellPos, InteractionState};
use crate::model::Phase;

/// First phase with `start <= x <= end`, with its index in the list.
///
/// `PhaseList` guarantees disjoint phases, so the first match is the only one. `None` is a
/// normal outcome (the pointer is between phases or past the last one).
pub fn phase_at(phases: &[Phase], x: f64) -> Option<(usize, &Phase)> {
    phases.iter().enumerate().find(|(_, phase)| phase.contains(x))
}

/// One resolved pointer sample: the phase under the pointer (if any) and where the pointer is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverSample<'a> {
    pub phase: Option<&'a Phase>,
    pub position: CellPos,
    pub data_x: f64,
}

impl<'a> HoverSample<'a> {
    pub fn resolve(phases: &'a [Phase], data_x: f64, position: CellPos) -> Self {
        Self {
            phase: phase_at(phases, data_x).map(|(_, phase)| phase),
            position,
            data_x,
        }
    }

    pub fn apply(&self, state: &mut InteractionState) {
        state.set_hover(
            self.phase.map(|phase| phase.name.as_str()),
            self.position,
            self.data_x,
        );
    }
}
