// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTML-like export of pinned notes for embedding outside the terminal. The TUI draws the
//! same `Note` structure as styled text instead.

use crate::resolve::{Note, NoteEntry};

const ENTRY_SEPARATOR: &str = "<br/><br/>";

/// HTML-like markup for a pinned note: `<strong>Label:</strong> body` per entry, entries
/// separated by a blank line (`<br/><br/>`).
///
/// Labels and bodies are escaped; the note index is free text and may contain `<` or `&`.
pub fn note_markup(note: &Note) -> String {
    note.entries()
        .map(entry_markup)
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

fn entry_markup(entry: &NoteEntry) -> String {
    format!(
        "<strong>{}:</strong> {}",
        escape(&entry.label),
        escape(&entry.body)
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
