// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::interaction::CellPos;

/// Maps between terminal cells of the plotting rectangle and data space.
///
/// The leftmost column is `x_bounds[0]` and the rightmost column is `x_bounds[1]`; rows run
/// top (`y_bounds[1]`) to bottom (`y_bounds[0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl PlotArea {
    pub fn contains(&self, pos: CellPos) -> bool {
        pos.column >= self.left
            && pos.column < self.left.saturating_add(self.width)
            && pos.row >= self.top
            && pos.row < self.top.saturating_add(self.height)
    }

    pub fn column_to_x(&self, column: u16) -> f64 {
        let offset = f64::from(column.saturating_sub(self.left));
        let span = f64::from(self.width.saturating_sub(1).max(1));
        self.x_bounds[0] + offset / span * (self.x_bounds[1] - self.x_bounds[0])
    }

    /// Script line under `column`. Phase lookups must use this, not the raw x: adjacent
    /// phases touch at whole lines and a fractional x can fall between them.
    pub fn column_to_line(&self, column: u16) -> f64 {
        self.column_to_x(column).round()
    }

    pub fn row_to_y(&self, row: u16) -> f64 {
        let offset = f64::from(row.saturating_sub(self.top));
        let span = f64::from(self.height.saturating_sub(1).max(1));
        self.y_bounds[1] - offset / span * (self.y_bounds[1] - self.y_bounds[0])
    }

    /// Column nearest to `x`, or `None` outside the x bounds.
    pub fn x_to_column(&self, x: f64) -> Option<u16> {
        let fraction = axis_fraction(x, self.x_bounds)?;
        let span = f64::from(self.width.saturating_sub(1));
        Some(self.left + (fraction * span).round() as u16)
    }

    /// Row nearest to `y`, or `None` outside the y bounds.
    pub fn y_to_row(&self, y: f64) -> Option<u16> {
        let fraction = axis_fraction(y, self.y_bounds)?;
        let span = f64::from(self.height.saturating_sub(1));
        Some(self.top + ((1.0 - fraction) * span).round() as u16)
    }

    pub fn project(&self, x: f64, y: f64) -> Option<CellPos> {
        Some(CellPos::new(self.x_to_column(x)?, self.y_to_row(y)?))
    }
}

fn axis_fraction(value: f64, bounds: [f64; 2]) -> Option<f64> {
    let [min, max] = bounds;
    if !(min..=max).contains(&value) {
        return None;
    }
    if max <= min {
        return Some(0.0);
    }
    Some((value - min) / (max - min))
}
