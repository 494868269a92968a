// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal-agnostic description of one chart frame.
//!
//! `build_scene` turns the dataset, config and interaction state into plain data (bands,
//! lines, markers, side panel, hover label). The TUI draws it; tests inspect it directly.

pub mod markup;
pub mod plot;

use smol_str::SmolStr;

use crate::config::{character_data_key, ChartConfig, Rgb};
use crate::interaction::{CellPos, InteractionState, Panel};
use crate::model::Dataset;
use crate::resolve::Note;

pub use markup::note_markup;
pub use plot::PlotArea;

pub const NEUTRAL_LABEL: &str = "Neutral";
pub const NEUTRAL_LEGEND_LABEL: &str = "Neutral Line";
/// Cells between the pointer and the hover label's top-left corner.
pub const HOVER_LABEL_OFFSET: (u16, u16) = (2, 1);

const Y_PADDING_RATIO: f64 = 0.1;
const MIN_Y_PADDING: f64 = 0.1;

/// Background band for one phase, already clamped to the data range.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub phase_index: usize,
    pub name: String,
    pub start: f64,
    pub end: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterLine {
    pub name: SmolStr,
    pub color: Rgb,
    pub points: Vec<(f64, f64)>,
}

/// Clickable dot at an important line of a visible character.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub character: SmolStr,
    pub line: u32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub name: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub phases: Vec<LegendItem>,
    pub neutral: &'static str,
    pub characters: Vec<LegendItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SidePanel {
    Legend(Legend),
    Note(Note),
}

/// Floating label shown while the pointer is over a phase.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverLabel {
    pub anchor: CellPos,
    pub phase_name: String,
    /// `Line <n>` plus `<NAME>: <value>` for each selected character with data there.
    pub details: Vec<String>,
}

impl HoverLabel {
    /// Top-left corner of the label before clamping to the frame.
    pub fn origin(&self) -> CellPos {
        CellPos::new(
            self.anchor.column.saturating_add(HOVER_LABEL_OFFSET.0),
            self.anchor.row.saturating_add(HOVER_LABEL_OFFSET.1),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub title: String,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub bands: Vec<Band>,
    pub lines: Vec<CharacterLine>,
    pub markers: Vec<Marker>,
    pub panel: SidePanel,
    pub hover_label: Option<HoverLabel>,
}

impl Scene {
    /// Band drawn under data-space `x`.
    pub fn band_at(&self, x: f64) -> Option<&Band> {
        self.bands
            .iter()
            .find(|band| band.start <= x && x <= band.end)
    }
}

pub fn build_scene(dataset: &Dataset, config: &ChartConfig, state: &InteractionState) -> Scene {
    let max_line = dataset.max_line();
    let series = dataset.series();

    let bands = dataset
        .phases()
        .iter()
        .enumerate()
        .filter_map(|(phase_index, phase)| {
            let end = phase.drawn_end(max_line)?;
            Some(Band {
                phase_index,
                name: phase.name.clone(),
                start: f64::from(phase.start),
                end: f64::from(end),
                color: config.phase_color(phase_index),
            })
        })
        .collect();

    let mut lines = Vec::with_capacity(state.selection().len());
    let mut markers = Vec::new();
    for (selection_index, name) in state.selection().iter().enumerate() {
        let key = character_data_key(name);
        lines.push(CharacterLine {
            name: name.clone(),
            color: config.line_color(selection_index),
            points: series.series_for(&key),
        });
        markers.extend(config.important_points.iter().filter_map(|&line| {
            series.value_at(line, &key).map(|value| Marker {
                character: name.clone(),
                line,
                value,
            })
        }));
    }

    let panel = match state.panel() {
        Panel::Note(note) => SidePanel::Note(note.clone()),
        Panel::Legend => SidePanel::Legend(Legend {
            phases: dataset
                .phases()
                .iter()
                .enumerate()
                .map(|(idx, phase)| LegendItem {
                    name: phase.name.clone(),
                    color: config.phase_color(idx),
                })
                .collect(),
            neutral: NEUTRAL_LEGEND_LABEL,
            characters: lines
                .iter()
                .map(|line| LegendItem {
                    name: line.name.to_string(),
                    color: line.color,
                })
                .collect(),
        }),
    };

    let hover_label = state.hover().and_then(|hover| {
        let phase_name = hover.phase_name.clone()?;
        Some(HoverLabel {
            anchor: hover.position,
            phase_name,
            details: hover_details(dataset, state, hover.data_x),
        })
    });

    let keys: Vec<String> = state
        .selection()
        .iter()
        .map(|name| character_data_key(name))
        .collect();
    let y_bounds = y_bounds(series.value_range(keys.iter().map(String::as_str)));

    Scene {
        title: config.title.clone(),
        x_bounds: [0.0, f64::from(max_line)],
        y_bounds,
        bands,
        lines,
        markers,
        panel,
        hover_label,
    }
}

fn hover_details(dataset: &Dataset, state: &InteractionState, data_x: f64) -> Vec<String> {
    let Some(line) = dataset.series().nearest_line(data_x) else {
        return Vec::new();
    };
    let mut details = vec![format!("Line {line}")];
    details.extend(state.selection().iter().filter_map(|name| {
        dataset
            .series()
            .value_at(line, &character_data_key(name))
            .map(|value| format!("{name}: {value:.2}"))
    }));
    details
}

/// Data range padded on both sides and always including the neutral line.
fn y_bounds(range: Option<(f64, f64)>) -> [f64; 2] {
    let (min, max) = range.unwrap_or((-1.0, 1.0));
    let (min, max) = (min.min(0.0), max.max(0.0));
    let padding = ((max - min) * Y_PADDING_RATIO).max(MIN_Y_PADDING);
    [min - padding, max + padding]
}
