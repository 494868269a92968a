// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Journeyplot: script sentiment against annotated Hero's Journey phases, in the terminal.
//!
//! The library half is terminal-agnostic: `model` loads the static inputs, `interaction`
//! holds the view state, `resolve` answers hover and click questions and `render` builds a
//! plain scene. `tui` draws that scene with ratatui.

pub mod config;
pub mod interaction;
pub mod model;
pub mod render;
pub mod resolve;
pub mod tui;
