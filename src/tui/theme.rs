// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;

use ratatui::style::{Color, Modifier, Style};
use thiserror::Error;

use crate::config::{ConfigError, Rgb};

pub(crate) const PALETTE_ENV: &str = "JOURNEYPLOT_TUI_PALETTE";
const ROLE_COUNT: usize = 9;

/// Colors of the chart chrome. Band and line colors are not theme; they come from
/// `ChartConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Fg,
    Bg,
    Border,
    Muted,
    Key,
    Selected,
    Label,
    Marker,
    Close,
}

impl Role {
    /// CSV order of `JOURNEYPLOT_TUI_PALETTE`.
    const ALL: [Role; ROLE_COUNT] = [
        Role::Fg,
        Role::Bg,
        Role::Border,
        Role::Muted,
        Role::Key,
        Role::Selected,
        Role::Label,
        Role::Marker,
        Role::Close,
    ];

    fn name(self) -> &'static str {
        match self {
            Role::Fg => "fg",
            Role::Bg => "bg",
            Role::Border => "border",
            Role::Muted => "muted",
            Role::Key => "key",
            Role::Selected => "selected",
            Role::Label => "label",
            Role::Marker => "marker",
            Role::Close => "close",
        }
    }

    fn terminal_default(self) -> Color {
        match self {
            Role::Fg | Role::Bg => Color::Reset,
            Role::Border => Color::DarkGray,
            Role::Muted => Color::Gray,
            Role::Key => Color::Cyan,
            Role::Selected => Color::LightGreen,
            Role::Label => Color::LightYellow,
            Role::Marker => Color::White,
            Role::Close => Color::LightRed,
        }
    }
}

type Palette = [Color; ROLE_COUNT];

#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<Palette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        let palette = match env::var(PALETTE_ENV) {
            Ok(value) if value.trim().is_empty() => None,
            Ok(value) => Some(parse_palette(&value)?),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::NotUnicode { name: PALETTE_ENV });
            }
        };
        if palette.is_some() {
            tracing::debug!(env = PALETTE_ENV, "using palette override");
        }
        Ok(Self { palette })
    }

    fn color(&self, role: Role) -> Color {
        self.palette
            .map_or_else(|| role.terminal_default(), |palette| palette[role as usize])
    }

    pub(crate) fn base_style(&self) -> Style {
        match self.palette {
            Some(_) => Style::default().fg(self.color(Role::Fg)).bg(self.color(Role::Bg)),
            None => Style::default(),
        }
    }

    pub(crate) fn border_style(&self) -> Style {
        self.base_style().fg(self.color(Role::Border))
    }

    pub(crate) fn title_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::BOLD)
    }

    pub(crate) fn muted_style(&self) -> Style {
        self.base_style().fg(self.color(Role::Muted))
    }

    pub(crate) fn key_style(&self) -> Style {
        self.base_style().fg(self.color(Role::Key))
    }

    pub(crate) fn checkbox_style(&self, selected: bool) -> Style {
        if selected {
            self.base_style()
                .fg(self.color(Role::Selected))
                .add_modifier(Modifier::BOLD)
        } else {
            self.muted_style()
        }
    }

    /// Inverted box: label color behind, background color (black without a palette) in front.
    pub(crate) fn hover_label_style(&self) -> Style {
        let fg = match self.palette {
            Some(_) => self.color(Role::Bg),
            None => Color::Black,
        };
        Style::default().fg(fg).bg(self.color(Role::Label))
    }

    /// No background, so markers keep the band color of their cell.
    pub(crate) fn marker_style(&self) -> Style {
        Style::default()
            .fg(self.color(Role::Marker))
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn close_button_style(&self) -> Style {
        self.base_style()
            .fg(self.color(Role::Close))
            .add_modifier(Modifier::BOLD)
    }
}

pub(crate) fn rgb_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn parse_palette(value: &str) -> Result<Palette, ThemeError> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != ROLE_COUNT {
        return Err(ThemeError::WrongLength {
            name: PALETTE_ENV,
            expected: ROLE_COUNT,
            found: parts.len(),
        });
    }

    let mut palette = [Color::Reset; ROLE_COUNT];
    for (role, part) in Role::ALL.into_iter().zip(parts) {
        let rgb: Rgb = part.parse().map_err(|source| ThemeError::InvalidColor {
            name: PALETTE_ENV,
            role: role.name(),
            source,
        })?;
        palette[role as usize] = rgb_color(rgb);
    }
    Ok(palette)
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("{name} is not valid unicode")]
    NotUnicode { name: &'static str },
    #[error(
        "{name} expects {expected} comma-separated colors \
         (fg,bg,border,muted,key,selected,label,marker,close), got {found}"
    )]
    WrongLength {
        name: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{name}: invalid {role} color: {source}")]
    InvalidColor {
        name: &'static str,
        role: &'static str,
        #[source]
        source: ConfigError,
    },
}
