// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{NoteIndex, Phase};

/// A labeled paragraph of a pinned note (`Label: body`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEntry {
    pub label: String,
    pub body: String,
}

impl NoteEntry {
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }

    fn for_line(line: u32, notes: &NoteIndex) -> Self {
        Self::new(format!("Line {line}"), notes.line_note(line))
    }
}

/// Structured pinned-note content. Markup is produced at the rendering boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    heading: NoteEntry,
    points: Vec<NoteEntry>,
}

impl Note {
    pub fn single(heading: NoteEntry) -> Self {
        Self {
            heading,
            points: Vec::new(),
        }
    }

    pub fn with_points(heading: NoteEntry, points: Vec<NoteEntry>) -> Self {
        Self { heading, points }
    }

    pub fn heading(&self) -> &NoteEntry {
        &self.heading
    }

    pub fn points(&self) -> &[NoteEntry] {
        &self.points
    }

    /// Heading first, then the point entries in ascending line order.
    pub fn entries(&self) -> impl Iterator<Item = &NoteEntry> {
        std::iter::once(&self.heading).chain(self.points.iter())
    }
}

/// Note for a click on a phase band.
///
/// Important points are matched against the stored `end`, so a phase that is clamped for
/// drawing still collects points past the last data line.
pub fn annotate_phase(phase: &Phase, notes: &NoteIndex, important_points: &BTreeSet<u32>) -> Note {
    let heading = NoteEntry::new(phase.name.as_str(), notes.phase_note(&phase.name));
    let points = if phase.start <= phase.end {
        important_points
            .range(phase.start..=phase.end)
            .map(|&line| NoteEntry::for_line(line, notes))
            .collect()
    } else {
        Vec::new()
    };
    Note::with_points(heading, points)
}

/// Note for a click on a marker. Only important lines carry a marker, so any other line
/// yields `None`.
pub fn annotate_point(line: u32, notes: &NoteIndex, important_points: &BTreeSet<u32>) -> Option<Note> {
    important_points
        .contains(&line)
        .then(|| Note::single(NoteEntry::for_line(line, notes)))
}
