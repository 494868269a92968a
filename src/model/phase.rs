// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named, inclusive interval of script lines (one Hero's Journey stage).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub start: u32,
    pub end: u32,
}

impl Phase {
    pub fn new(name: impl Into<String>, start: u32, end: u32) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    pub fn contains_line(&self, line: u32) -> bool {
        self.start <= line && line <= self.end
    }

    pub fn contains(&self, x: f64) -> bool {
        f64::from(self.start) <= x && x <= f64::from(self.end)
    }

    /// Right edge used for drawing: `end` clamped to `max_line`.
    ///
    /// Returns `None` when the phase starts past `max_line` and is not drawn at all. The
    /// stored `end` is never modified; note matching keeps using it.
    pub fn drawn_end(&self, max_line: u32) -> Option<u32> {
        (self.start <= max_line).then(|| self.end.min(max_line))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhaseError {
    #[error("phase {name:?} starts at {start} after its end {end}")]
    InvertedRange { name: String, start: u32, end: u32 },
    #[error("phase name {name:?} is used more than once")]
    DuplicateName { name: String },
    #[error("phase {name:?} (start {start}) is not after phase {previous:?} (end {previous_end})")]
    Overlapping {
        name: String,
        start: u32,
        previous: String,
        previous_end: u32,
    },
}

/// Phases sorted by `start`, pairwise disjoint, with unique names.
///
/// Validated once on construction so a first-match scan is also the only match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseList {
    phases: Vec<Phase>,
}

impl PhaseList {
    pub fn new(phases: Vec<Phase>) -> Result<Self, PhaseError> {
        let mut names = BTreeSet::new();
        for phase in &phases {
            if phase.start > phase.end {
                return Err(PhaseError::InvertedRange {
                    name: phase.name.clone(),
                    start: phase.start,
                    end: phase.end,
                });
            }
            if !names.insert(phase.name.as_str()) {
                return Err(PhaseError::DuplicateName {
                    name: phase.name.clone(),
                });
            }
        }

        for pair in phases.windows(2) {
            let (previous, phase) = (&pair[0], &pair[1]);
            if phase.start <= previous.end {
                return Err(PhaseError::Overlapping {
                    name: phase.name.clone(),
                    start: phase.start,
                    previous: previous.name.clone(),
                    previous_end: previous.end,
                });
            }
        }

        Ok(Self { phases })
    }

    pub fn as_slice(&self) -> &[Phase] {
        &self.phases
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Phase> {
        self.phases.iter()
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Phase> {
        self.phases.get(idx)
    }

    pub fn by_name(&self, name: &str) -> Option<(usize, &Phase)> {
        self.phases
            .iter()
            .enumerate()
            .find(|(_, phase)| phase.name == name)
    }
}

impl<'a> IntoIterator for &'a PhaseList {
    type Item = &'a Phase;
    type IntoIter = std::slice::Iter<'a, Phase>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Phase, PhaseError, PhaseList};

    #[test]
    fn accepts_adjacent_phases() {
        let phases = PhaseList::new(vec![
            Phase::new("Ordinary World", 0, 50),
            Phase::new("Call to Adventure", 51, 120),
        ])
        .expect("phases");
        assert_eq!(phases.len(), 2);
        assert_eq!(phases.by_name("Call to Adventure").map(|(idx, _)| idx), Some(1));
    }

    #[test]
    fn rejects_inverted_range() {
        let err = PhaseList::new(vec![Phase::new("Ordeal", 10, 5)]).unwrap_err();
        assert!(matches!(err, PhaseError::InvertedRange { start: 10, end: 5, .. }));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = PhaseList::new(vec![Phase::new("Reward", 0, 5), Phase::new("Reward", 6, 9)])
            .unwrap_err();
        assert_eq!(
            err,
            PhaseError::DuplicateName {
                name: "Reward".to_owned()
            }
        );
    }

    #[rstest]
    #[case::shared_boundary(vec![Phase::new("a", 0, 50), Phase::new("b", 50, 60)])]
    #[case::nested(vec![Phase::new("a", 0, 50), Phase::new("b", 10, 20)])]
    #[case::unsorted(vec![Phase::new("a", 30, 40), Phase::new("b", 0, 10)])]
    fn rejects_overlapping_or_unsorted(#[case] phases: Vec<Phase>) {
        let err = PhaseList::new(phases).unwrap_err();
        assert!(matches!(err, PhaseError::Overlapping { .. }), "got {err:?}");
    }

    #[rstest]
    #[case(Phase::new("tail", 592, 900), 684, Some(684))]
    #[case(Phase::new("inside", 10, 20), 684, Some(20))]
    #[case(Phase::new("past", 700, 800), 684, None)]
    #[case(Phase::new("edge", 684, 684), 684, Some(684))]
    fn drawn_end_clamps_without_touching_stored_end(
        #[case] phase: Phase,
        #[case] max_line: u32,
        #[case] expected: Option<u32>,
    ) {
        let stored_end = phase.end;
        assert_eq!(phase.drawn_end(max_line), expected);
        assert_eq!(phase.end, stored_end);
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let phase = Phase::new("Ordinary World", 0, 50);
        assert!(phase.contains(0.0));
        assert!(phase.contains(50.0));
        assert!(!phase.contains(50.5));
        assert!(phase.contains_line(50));
        assert!(!phase.contains_line(51));
    }
}
