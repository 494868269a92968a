// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Text returned for any key without a note.
pub const NOTE_FALLBACK: &str = "No note.";

/// Free-text notes keyed by phase name or by a stringified line number (`"32"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteIndex {
    notes: BTreeMap<String, String>,
}

impl NoteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.notes.insert(key.into(), text.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.notes.get(key).map(String::as_str)
    }

    pub fn phase_note(&self, phase_name: &str) -> &str {
        self.get(phase_name).unwrap_or(NOTE_FALLBACK)
    }

    pub fn line_note(&self, line: u32) -> &str {
        self.get(&line.to_string()).unwrap_or(NOTE_FALLBACK)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NoteIndex {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            notes: iter
                .into_iter()
                .map(|(key, text)| (key.into(), text.into()))
                .collect(),
        }
    }
}
