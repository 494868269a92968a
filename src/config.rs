// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Chart configuration constants and their optional JSON override.
//!
//! Defaults reproduce the Nausicaä chart: four tracked characters, eight curated important
//! lines and the twelve/four color palettes. A `journeyplot.json` next to the data files
//! (or `--config <file>`) may replace any field.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "journeyplot.json";

pub const DEFAULT_TITLE: &str = "Sentiment Analysis of Nausicaä with Hero's Journey Phases";
pub const DEFAULT_CHARACTERS: [&str; 4] = ["NAUSICAA", "KUSHANA", "YUPA", "MITO"];
pub const DEFAULT_IMPORTANT_POINTS: [u32; 8] = [3, 32, 120, 242, 278, 326, 592, 638];
pub const PHASE_PALETTE: [Rgb; 12] = [
    Rgb(0x6b, 0xae, 0xd6),
    Rgb(0xfd, 0x8d, 0x3c),
    Rgb(0x74, 0xc4, 0x76),
    Rgb(0xe3, 0x77, 0x77),
    Rgb(0x9e, 0x9a, 0xc8),
    Rgb(0x8c, 0x6d, 0x31),
    Rgb(0xc9, 0x94, 0xc7),
    Rgb(0x96, 0x96, 0x96),
    Rgb(0xbc, 0xbd, 0x22),
    Rgb(0x17, 0xbe, 0xcf),
    Rgb(0x9e, 0xca, 0xe1),
    Rgb(0xfd, 0xd0, 0xa2),
];
pub const LINE_PALETTE: [Rgb; 4] = [
    Rgb(0x00, 0x00, 0x00),
    Rgb(0xd6, 0x27, 0x28),
    Rgb(0x2c, 0xa0, 0x2c),
    Rgb(0xff, 0x7f, 0x0e),
];

/// `palette[index mod len]`, or `None` for an empty palette.
pub fn palette_color<T: Copy>(index: usize, palette: &[T]) -> Option<T> {
    if palette.is_empty() {
        return None;
    }
    Some(palette[index % palette.len()])
}

/// A 24-bit color written as `#RRGGBB` in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let hex = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor {
                value: trimmed.to_owned(),
            });
        }
        let rgb = u32::from_str_radix(hex, 16).map_err(|_| ConfigError::InvalidColor {
            value: trimmed.to_owned(),
        })?;
        Ok(Self((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid config {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid color {value:?} (expected #RRGGBB)")]
    InvalidColor { value: String },
    #[error("{which} palette must not be empty")]
    EmptyPalette { which: &'static str },
    #[error("initial selection names unknown character {name:?}")]
    UnknownCharacter { name: SmolStr },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub title: String,
    /// Display names; the data key is the lower-cased name.
    pub characters: Vec<SmolStr>,
    pub initial_selection: Vec<SmolStr>,
    pub important_points: BTreeSet<u32>,
    pub phase_palette: Vec<Rgb>,
    pub line_palette: Vec<Rgb>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            characters: DEFAULT_CHARACTERS.iter().map(|name| SmolStr::new(name)).collect(),
            initial_selection: vec![SmolStr::new(DEFAULT_CHARACTERS[0])],
            important_points: DEFAULT_IMPORTANT_POINTS.into_iter().collect(),
            phase_palette: PHASE_PALETTE.to_vec(),
            line_palette: LINE_PALETTE.to_vec(),
        }
    }
}

impl ChartConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded chart config");
        Ok(config)
    }

    /// Loads `journeyplot.json` from `dir` when present, defaults otherwise.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = dir.as_ref().join(CONFIG_FILENAME);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no chart config; using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phase_palette.is_empty() {
            return Err(ConfigError::EmptyPalette { which: "phase" });
        }
        if self.line_palette.is_empty() {
            return Err(ConfigError::EmptyPalette { which: "line" });
        }
        if let Some(name) = self
            .initial_selection
            .iter()
            .find(|name| !self.characters.contains(name))
        {
            return Err(ConfigError::UnknownCharacter { name: name.clone() });
        }
        Ok(())
    }

    pub fn is_important(&self, line: u32) -> bool {
        self.important_points.contains(&line)
    }

    pub fn phase_color(&self, phase_index: usize) -> Rgb {
        palette_color(phase_index, &self.phase_palette).unwrap_or(PHASE_PALETTE[0])
    }

    pub fn line_color(&self, selection_index: usize) -> Rgb {
        palette_color(selection_index, &self.line_palette).unwrap_or(LINE_PALETTE[0])
    }
}

/// Key under which a character's values are stored in the sentiment records.
pub fn character_data_key(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rstest::rstest;

    use super::{
        character_data_key, palette_color, ChartConfig, ConfigError, Rgb, CONFIG_FILENAME,
        LINE_PALETTE, PHASE_PALETTE,
    };

    #[rstest]
    #[case(0, 0)]
    #[case(11, 11)]
    #[case(12, 0)]
    #[case(25, 1)]
    fn palette_color_cycles(#[case] index: usize, #[case] expected: usize) {
        assert_eq!(palette_color(index, &PHASE_PALETTE), Some(PHASE_PALETTE[expected]));
    }

    #[test]
    fn palette_color_of_empty_palette_is_none() {
        assert_eq!(palette_color::<Rgb>(3, &[]), None);
    }

    #[test]
    fn line_colors_cycle_over_four_entries() {
        let config = ChartConfig::default();
        assert_eq!(config.line_color(4), LINE_PALETTE[0]);
        assert_eq!(config.line_color(5), LINE_PALETTE[1]);
    }

    #[test]
    fn rgb_parses_and_prints_hex() {
        let color: Rgb = "#6baed6".parse().expect("color");
        assert_eq!(color, Rgb(0x6b, 0xae, 0xd6));
        assert_eq!(color.to_string(), "#6baed6");
        assert!(matches!(
            "#6bae".parse::<Rgb>(),
            Err(ConfigError::InvalidColor { .. })
        ));
    }

    #[test]
    fn default_important_points_match_demo_notes() {
        let config = ChartConfig::default();
        assert!(config.is_important(3));
        assert!(config.is_important(592));
        assert!(!config.is_important(593));
    }

    #[test]
    fn data_key_is_lower_case() {
        assert_eq!(character_data_key("NAUSICAA"), "nausicaa");
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r##"{"important_points": [10, 5], "line_palette": ["#112233"]}"##,
        )
        .expect("write config");

        let config = ChartConfig::load_from_dir(dir.path()).expect("config");
        assert_eq!(config.important_points.iter().copied().collect::<Vec<_>>(), vec![5, 10]);
        assert_eq!(config.line_palette, vec![Rgb(0x11, 0x22, 0x33)]);
        assert_eq!(config.phase_palette, PHASE_PALETTE.to_vec());
        assert_eq!(config.characters.len(), 4);
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = ChartConfig::load_from_dir(dir.path()).expect("config");
        assert_eq!(config, ChartConfig::default());
    }

    #[test]
    fn rejects_empty_palette_and_unknown_selection() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILENAME);

        fs::write(&path, r#"{"phase_palette": []}"#).expect("write config");
        assert!(matches!(
            ChartConfig::load(&path),
            Err(ConfigError::EmptyPalette { which: "phase" })
        ));

        fs::write(&path, r#"{"initial_selection": ["ASBEL"]}"#).expect("write config");
        assert!(matches!(
            ChartConfig::load(&path),
            Err(ConfigError::UnknownCharacter { .. })
        ));
    }

    #[test]
    fn rejects_bad_color_in_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"{"line_palette": ["red"]}"#).expect("write config");

        let err = ChartConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
        assert!(err.to_string().contains("red"));
    }
}
