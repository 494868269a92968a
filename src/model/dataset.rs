// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::{NoteIndex, Phase, PhaseError, PhaseList, SentimentPoint, SentimentSeries, SeriesError};

pub const SENTIMENT_FILENAME: &str = "sentiment_data.json";
pub const PHASES_FILENAME: &str = "phases.json";
pub const NOTES_FILENAME: &str = "phaseNotes.json";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid sentiment series: {0}")]
    Series(#[from] SeriesError),
    #[error("invalid phase list: {0}")]
    Phases(#[from] PhaseError),
}

/// The three static inputs of the chart, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    series: SentimentSeries,
    phases: PhaseList,
    notes: NoteIndex,
}

impl Dataset {
    pub fn new(series: SentimentSeries, phases: PhaseList, notes: NoteIndex) -> Self {
        Self {
            series,
            phases,
            notes,
        }
    }

    /// Loads `sentiment_data.json`, `phases.json` and `phaseNotes.json` from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, DataError> {
        let dir = dir.as_ref();
        let points: Vec<SentimentPoint> = read_json(&dir.join(SENTIMENT_FILENAME))?;
        let phases: Vec<Phase> = read_json(&dir.join(PHASES_FILENAME))?;
        let notes: NoteIndex = read_json(&dir.join(NOTES_FILENAME))?;

        let series = SentimentSeries::new(points)?;
        let phases = PhaseList::new(phases)?;

        tracing::info!(
            dir = %dir.display(),
            records = series.len(),
            max_line = series.max_line(),
            phases = phases.len(),
            notes = notes.len(),
            "loaded dataset"
        );

        Ok(Self::new(series, phases, notes))
    }

    pub fn series(&self) -> &SentimentSeries {
        &self.series
    }

    pub fn phases(&self) -> &PhaseList {
        &self.phases
    }

    pub fn notes(&self) -> &NoteIndex {
        &self.notes
    }

    pub fn max_line(&self) -> u32 {
        self.series.max_line()
    }

    /// Built-in dataset shaped like the Nausicaä script analysis: twelve phases over 685
    /// lines (the last phase runs past the data), four characters and curated notes.
    pub fn demo() -> Result<Self, DataError> {
        const LAST_LINE: u32 = 684;

        let phases = [
            ("Ordinary World", 0, 50),
            ("Call to Adventure", 51, 120),
            ("Refusal of the Call", 121, 160),
            ("Meeting the Mentor", 161, 241),
            ("Crossing the Threshold", 242, 277),
            ("Tests, Allies, Enemies", 278, 325),
            ("Approach to the Inmost Cave", 326, 400),
            ("The Ordeal", 401, 470),
            ("Reward", 471, 520),
            ("The Road Back", 521, 559),
            ("Resurrection", 560, 591),
            ("Return with the Elixir", 592, 900),
        ]
        .into_iter()
        .map(|(name, start, end)| Phase::new(name, start, end))
        .collect();

        let points = (0..=LAST_LINE)
            .map(|line| {
                let x = f64::from(line);
                let mut point =
                    SentimentPoint::new(line).with_value("nausicaa", demo_wave(x, 37.0, 0.0));
                if line >= 90 && line % 3 == 0 {
                    point = point.with_value("kushana", demo_wave(x, 53.0, 2.1) - 0.2);
                }
                if line % 4 == 0 || line == 3 {
                    point = point.with_value("yupa", demo_wave(x, 71.0, 1.3) + 0.15);
                }
                if line % 5 == 2 || line == 32 {
                    point = point.with_value("mito", demo_wave(x, 29.0, 4.0) * 0.8);
                }
                point
            })
            .collect();

        let notes = [
            ("Ordinary World", "Nausicaä tends the Valley of the Wind beside the Sea of Corruption."),
            ("Call to Adventure", "A Tolmekian airship crashes and the Giant Warrior embryo arrives."),
            ("Refusal of the Call", "She hopes to keep the valley out of the war."),
            ("Meeting the Mentor", "Lord Yupa shares what he has learned of the jungle."),
            ("Crossing the Threshold", "Taken hostage, she leaves the valley."),
            ("Tests, Allies, Enemies", "Asbel, the Pejite survivors and the gunship battle."),
            ("Approach to the Inmost Cave", "Beneath the jungle the soil is clean."),
            ("The Ordeal", "The Pejite plot to lure the Ohmu into the valley."),
            ("Reward", "She understands the jungle is healing the world."),
            ("The Road Back", "A race to turn the stampede."),
            ("Resurrection", "Struck down before the herd, then raised by the Ohmu."),
            ("3", "First line of the script; the world is introduced."),
            ("32", "Nausicaä calms a frightened insect."),
            ("120", "The embryo is revealed."),
            ("242", "Kushana takes the valley's elders captive."),
            ("326", "Falling through the jungle floor."),
            ("592", "The golden fields of the prophecy."),
            ("638", "The valley rebuilds."),
        ]
        .into_iter()
        .collect();

        let series = SentimentSeries::new(points)?;
        let phases = PhaseList::new(phases)?;
        Ok(Self::new(series, phases, notes))
    }
}

fn demo_wave(x: f64, period: f64, shift: f64) -> f64 {
    let value = (x / period + shift).sin() * 0.6 + (x / 11.0).cos() * 0.2;
    (value * 100.0).round() / 100.0
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let raw = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}
