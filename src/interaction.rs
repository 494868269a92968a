// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interaction state of the chart view.
//!
//! Owned by the view and changed only through the transition methods below. Nothing here is
//! persisted; a fresh process starts from `InteractionState::new`.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::resolve::Note;

/// Characters currently drawn. Membership is a set; the order of insertion picks the line
/// color, so toggling a character off and on again moves it to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    keys: Vec<SmolStr>,
}

impl Selection {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        let mut selection = Self::default();
        for key in keys {
            let key = key.into();
            if !selection.contains(&key) {
                selection.keys.push(key);
            }
        }
        selection
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|selected| selected == key)
    }

    /// Removes `key` when selected, appends it otherwise. Returns whether it is now selected.
    pub fn toggle(&mut self, key: &str) -> bool {
        if let Some(idx) = self.position(key) {
            self.keys.remove(idx);
            false
        } else {
            self.keys.push(SmolStr::new(key));
            true
        }
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|selected| selected == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SmolStr> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// A terminal cell position (column, row) in frame coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPos {
    pub column: u16,
    pub row: u16,
}

impl CellPos {
    pub const fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }
}

/// Last pointer sample inside the plot area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub phase_name: Option<String>,
    pub position: CellPos,
    /// Data-space x under the pointer.
    pub data_x: f64,
}

/// Which of the two mutually exclusive side panels is visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Panel<'a> {
    Legend,
    Note(&'a Note),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    selection: Selection,
    hover: Option<HoverState>,
    pinned: Option<Note>,
}

impl InteractionState {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            hover: None,
            pinned: None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn hover(&self) -> Option<&HoverState> {
        self.hover.as_ref()
    }

    pub fn pinned(&self) -> Option<&Note> {
        self.pinned.as_ref()
    }

    pub fn toggle_character(&mut self, key: &str) {
        let selected = self.selection.toggle(key);
        tracing::debug!(character = key, selected, "toggled character");
    }

    /// Overwrites the hover sample unconditionally; called for every pointer move.
    pub fn set_hover(&mut self, phase_name: Option<&str>, position: CellPos, data_x: f64) {
        self.hover = Some(HoverState {
            phase_name: phase_name.map(str::to_owned),
            position,
            data_x,
        });
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Replaces any pinned note; the last pin wins.
    pub fn pin(&mut self, note: Note) {
        tracing::debug!(label = %note.heading().label, "pinned note");
        self.pinned = Some(note);
    }

    pub fn unpin(&mut self) {
        if self.pinned.take().is_some() {
            tracing::debug!("unpinned note");
        }
    }

    /// The hover label text; `Some` exactly when the pointer is over a phase.
    pub fn hover_label(&self) -> Option<&str> {
        self.hover.as_ref().and_then(|hover| hover.phase_name.as_deref())
    }

    pub fn panel(&self) -> Panel<'_> {
        match &self.pinned {
            Some(note) => Panel::Note(note),
            None => Panel::Legend,
        }
    }
}
