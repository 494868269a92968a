// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One record of the sentiment series: a script line plus one value per character key
/// that speaks (or is scored) on that line.
///
/// Keys are the lower-cased character names as they appear in the source JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentPoint {
    line: u32,
    #[serde(flatten)]
    values: BTreeMap<String, f64>,
}

impl SentimentPoint {
    pub fn new(line: u32) -> Self {
        Self {
            line,
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("duplicate sentiment record for line {line}")]
    DuplicateLine { line: u32 },
}

/// Sentiment records ordered by ascending `line`, one record per line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentimentSeries {
    points: Vec<SentimentPoint>,
}

impl SentimentSeries {
    /// Sorts the records by line and rejects duplicate lines.
    pub fn new(mut points: Vec<SentimentPoint>) -> Result<Self, SeriesError> {
        points.sort_by_key(SentimentPoint::line);
        if let Some(pair) = points.windows(2).find(|pair| pair[0].line == pair[1].line) {
            return Err(SeriesError::DuplicateLine { line: pair[0].line });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[SentimentPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Largest line number in the series, `0` for an empty series.
    pub fn max_line(&self) -> u32 {
        self.points.last().map_or(0, SentimentPoint::line)
    }

    pub fn point_at(&self, line: u32) -> Option<&SentimentPoint> {
        self.points
            .binary_search_by_key(&line, SentimentPoint::line)
            .ok()
            .map(|idx| &self.points[idx])
    }

    pub fn value_at(&self, line: u32, key: &str) -> Option<f64> {
        self.point_at(line).and_then(|point| point.value(key))
    }

    /// `(line, value)` pairs for one character, skipping records without that key.
    pub fn series_for(&self, key: &str) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter_map(|point| point.value(key).map(|value| (f64::from(point.line), value)))
            .collect()
    }

    /// The recorded line closest to `x` (ties resolve to the lower line).
    pub fn nearest_line(&self, x: f64) -> Option<u32> {
        let idx = self.points.partition_point(|point| f64::from(point.line) < x);
        let after = self.points.get(idx);
        let before = idx.checked_sub(1).and_then(|idx| self.points.get(idx));
        match (before, after) {
            (Some(before), Some(after)) => {
                if x - f64::from(before.line) <= f64::from(after.line) - x {
                    Some(before.line)
                } else {
                    Some(after.line)
                }
            }
            (Some(only), None) | (None, Some(only)) => Some(only.line),
            (None, None) => None,
        }
    }

    /// Min/max over every value of the given keys, `None` when no key has data.
    pub fn value_range<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Option<(f64, f64)> {
        let keys: Vec<&str> = keys.into_iter().collect();
        self.points
            .iter()
            .flat_map(|point| keys.iter().filter_map(|key| point.value(key)))
            .fold(None, |acc, value| match acc {
                None => Some((value, value)),
                Some((min, max)) => Some((f64::min(min, value), f64::max(max, value))),
            })
    }
}
