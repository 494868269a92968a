// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Draws the chart scene with ratatui and maps crossterm key and mouse events onto the
//! interaction state. Events are handled one at a time in arrival order; there is no
//! background work and no timer.

use std::{error::Error, io};

use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    buffer::Buffer,
    prelude::*,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Clear, Paragraph, Wrap,
    },
};
use smol_str::SmolStr;

use crate::config::{character_data_key, ChartConfig};
use crate::interaction::{CellPos, InteractionState, Selection};
use crate::model::Dataset;
use crate::render::{
    build_scene, HoverLabel, Legend, PlotArea, Scene, SidePanel, NEUTRAL_LABEL,
};
use crate::resolve::{annotate_phase, annotate_point, phase_at, HoverSample, Note};

mod theme;

pub use theme::ThemeError;
use theme::{rgb_color, TuiTheme};

const Y_LABEL_WIDTH: u16 = 7;
const CURSOR_STEP: u32 = 1;
const CURSOR_STEP_FAST: u32 = 10;
const MARKER_SYMBOL: &str = "●";
const CLOSE_BUTTON: &str = "[X]";
const NEUTRAL_COLOR: Color = Color::DarkGray;

/// Runs the interactive chart until the user quits.
pub fn run(dataset: Dataset, config: ChartConfig) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(dataset, config, theme);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;
        app.handle_event(event::read()?);
    }

    Ok(())
}

/// Screen regions recorded by the last draw, used to resolve clicks.
#[derive(Debug, Default)]
struct HitMap {
    plot: Option<PlotArea>,
    markers: Vec<(CellPos, u32)>,
    checkboxes: Vec<(Rect, SmolStr)>,
    close_button: Option<Rect>,
}

pub(crate) struct App {
    dataset: Dataset,
    config: ChartConfig,
    theme: TuiTheme,
    state: InteractionState,
    cursor_line: Option<u32>,
    hits: HitMap,
    should_quit: bool,
}

impl App {
    fn new(dataset: Dataset, config: ChartConfig, theme: TuiTheme) -> Self {
        let state = InteractionState::new(Selection::new(config.initial_selection.iter().cloned()));
        Self {
            dataset,
            config,
            theme,
            state,
            cursor_line: None,
            hits: HitMap::default(),
            should_quit: false,
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => self.state.clear_hover(),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
            CURSOR_STEP_FAST
        } else {
            CURSOR_STEP
        };

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('x') => self.state.unpin(),
            KeyCode::Char(digit @ '1'..='9') => {
                let idx = digit as usize - '1' as usize;
                if let Some(name) = self.config.characters.get(idx).cloned() {
                    self.state.toggle_character(&name);
                }
            }
            KeyCode::Left => {
                let line = self.cursor_line.unwrap_or(0).saturating_sub(step);
                self.move_cursor(line);
            }
            KeyCode::Right => {
                let line = self
                    .cursor_line
                    .map_or(0, |line| line.saturating_add(step))
                    .min(self.dataset.max_line());
                self.move_cursor(line);
            }
            KeyCode::Enter => {
                if let Some(line) = self.cursor_line {
                    self.pin_at_line(line);
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pos = CellPos::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.hover_at(pos),
            MouseEventKind::Down(MouseButton::Left) => self.click_at(pos),
            _ => {}
        }
    }

    fn hover_at(&mut self, pos: CellPos) {
        match self.hits.plot.filter(|plot| plot.contains(pos)) {
            Some(plot) => {
                let line = plot.column_to_line(pos.column);
                HoverSample::resolve(self.dataset.phases().as_slice(), line, pos)
                    .apply(&mut self.state);
            }
            None => self.state.clear_hover(),
        }
    }

    fn click_at(&mut self, pos: CellPos) {
        if self.hits.close_button.is_some_and(|rect| rect_contains(rect, pos)) {
            self.state.unpin();
            return;
        }

        if let Some(name) = self
            .hits
            .checkboxes
            .iter()
            .find(|(rect, _)| rect_contains(*rect, pos))
            .map(|(_, name)| name.clone())
        {
            self.state.toggle_character(&name);
            return;
        }

        let Some(plot) = self.hits.plot.filter(|plot| plot.contains(pos)) else {
            return;
        };

        if let Some(line) = self.marker_near(pos) {
            if let Some(note) = self.point_note(line) {
                self.state.pin(note);
            }
            return;
        }

        if let Some(note) = self.phase_note(plot.column_to_line(pos.column)) {
            self.state.pin(note);
        }
    }

    /// Closest marker within one cell of `pos`.
    fn marker_near(&self, pos: CellPos) -> Option<u32> {
        self.hits
            .markers
            .iter()
            .map(|(cell, line)| {
                let dc = cell.column.abs_diff(pos.column);
                let dr = cell.row.abs_diff(pos.row);
                (dc.max(dr), dc + dr, *line)
            })
            .filter(|(distance, _, _)| *distance <= 1)
            .min_by_key(|(distance, manhattan, _)| (*distance, *manhattan))
            .map(|(_, _, line)| line)
    }

    fn point_note(&self, line: u32) -> Option<Note> {
        annotate_point(line, self.dataset.notes(), &self.config.important_points)
    }

    fn phase_note(&self, data_x: f64) -> Option<Note> {
        let (_, phase) = phase_at(self.dataset.phases().as_slice(), data_x)?;
        Some(annotate_phase(
            phase,
            self.dataset.notes(),
            &self.config.important_points,
        ))
    }

    fn move_cursor(&mut self, line: u32) {
        self.cursor_line = Some(line);
        let Some(plot) = self.hits.plot else {
            return;
        };
        let data_x = f64::from(line);
        let Some(column) = plot.x_to_column(data_x) else {
            self.state.clear_hover();
            return;
        };
        let pos = CellPos::new(column, plot.top + plot.height / 2);
        HoverSample::resolve(self.dataset.phases().as_slice(), data_x, pos).apply(&mut self.state);
    }

    /// Keyboard equivalent of a click: a visible marker at `line` wins over its phase.
    fn pin_at_line(&mut self, line: u32) {
        let has_marker = self.config.is_important(line)
            && self.state.selection().iter().any(|name| {
                self.dataset
                    .series()
                    .value_at(line, &character_data_key(name))
                    .is_some()
            });

        let note = if has_marker {
            self.point_note(line)
        } else {
            self.phase_note(f64::from(line))
        };
        if let Some(note) = note {
            self.state.pin(note);
        }
    }
}

fn rect_contains(rect: Rect, pos: CellPos) -> bool {
    pos.column >= rect.x && pos.column < rect.right() && pos.row >= rect.y && pos.row < rect.bottom()
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let scene = build_scene(&app.dataset, &app.config, &app.state);
    let area = frame.area();

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);
    let panes = Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(rows[2]);

    frame.render_widget(
        Paragraph::new(Line::from(scene.title.as_str()).style(app.theme.title_style()))
            .alignment(Alignment::Center),
        rows[0],
    );
    app.hits.checkboxes = draw_selector(frame, rows[1], &app.config, &app.state, &app.theme);

    let plot = draw_chart(frame, panes[0], &scene, &app.theme);
    app.hits.markers = plot
        .map(|plot| draw_markers(frame.buffer_mut(), &plot, &scene, &app.theme))
        .unwrap_or_default();
    app.hits.plot = plot;

    app.hits.close_button = draw_panel(frame, panes[1], &scene.panel, &app.theme);
    frame.render_widget(Paragraph::new(footer_line(&app.theme)), rows[3]);

    if let Some(label) = &scene.hover_label {
        draw_hover_label(frame, area, label, &app.theme);
    }
}

fn draw_selector(
    frame: &mut Frame<'_>,
    area: Rect,
    config: &ChartConfig,
    state: &InteractionState,
    theme: &TuiTheme,
) -> Vec<(Rect, SmolStr)> {
    let mut spans = vec![Span::styled("Characters: ", theme.muted_style())];
    let mut hits = Vec::with_capacity(config.characters.len());
    let mut x = area.x.saturating_add(Span::raw("Characters: ").width() as u16);

    for (idx, name) in config.characters.iter().enumerate() {
        let selected = state.selection().contains(name);
        let mark = if selected { "[x]" } else { "[ ]" };
        let item = Span::styled(format!("{mark} {} {name}", idx + 1), theme.checkbox_style(selected));
        let width = item.width() as u16;
        if x < area.right() {
            let clipped = width.min(area.right() - x);
            hits.push((Rect::new(x, area.y, clipped, 1), name.clone()));
        }
        x = x.saturating_add(width + 2);
        spans.push(item);
        spans.push(Span::raw("  "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
    hits
}

fn draw_chart(frame: &mut Frame<'_>, area: Rect, scene: &Scene, theme: &TuiTheme) -> Option<PlotArea> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Line::from(" Sentiment Polarity ").style(theme.muted_style()))
        .title_bottom(
            Line::from(" Script Line Number ")
                .style(theme.muted_style())
                .right_aligned(),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width <= Y_LABEL_WIDTH + 2 || inner.height < 3 {
        return None;
    }

    let columns = Layout::horizontal([Constraint::Length(Y_LABEL_WIDTH), Constraint::Min(0)])
        .split(inner);
    let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(columns[1]);
    let plot_rect = rows[0];
    let plot = PlotArea {
        left: plot_rect.x,
        top: plot_rect.y,
        width: plot_rect.width,
        height: plot_rect.height,
        x_bounds: scene.x_bounds,
        y_bounds: scene.y_bounds,
    };

    let [x_min, x_max] = scene.x_bounds;
    let canvas = Canvas::default()
        .x_bounds(scene.x_bounds)
        .y_bounds(scene.y_bounds)
        .marker(symbols::Marker::Braille)
        .paint(|ctx| {
            ctx.draw(&CanvasLine::new(x_min, 0.0, x_max, 0.0, NEUTRAL_COLOR));
            ctx.print(x_min, 0.0, Span::styled(NEUTRAL_LABEL, Style::default().fg(NEUTRAL_COLOR)));
            ctx.layer();
            for line in &scene.lines {
                let color = rgb_color(line.color);
                for pair in line.points.windows(2) {
                    let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
                }
            }
        });
    frame.render_widget(canvas, plot_rect);
    paint_bands(frame.buffer_mut(), &plot, scene);

    draw_y_labels(frame, columns[0], &plot, theme);
    draw_x_labels(frame, rows[1], scene.x_bounds, theme);

    Some(plot)
}

/// Phase bands are cell backgrounds under the already drawn lines.
fn paint_bands(buf: &mut Buffer, plot: &PlotArea, scene: &Scene) {
    for column in plot.left..plot.left.saturating_add(plot.width) {
        let Some(band) = scene.band_at(plot.column_to_line(column)) else {
            continue;
        };
        let color = rgb_color(band.color);
        for row in plot.top..plot.top.saturating_add(plot.height) {
            if let Some(cell) = buf.cell_mut((column, row)) {
                cell.set_bg(color);
            }
        }
    }
}

fn draw_markers(buf: &mut Buffer, plot: &PlotArea, scene: &Scene, theme: &TuiTheme) -> Vec<(CellPos, u32)> {
    let mut hits = Vec::with_capacity(scene.markers.len());
    for marker in &scene.markers {
        let Some(pos) = plot.project(f64::from(marker.line), marker.value) else {
            continue;
        };
        if let Some(cell) = buf.cell_mut((pos.column, pos.row)) {
            cell.set_symbol(MARKER_SYMBOL).set_style(theme.marker_style());
        }
        hits.push((pos, marker.line));
    }
    hits
}

fn draw_y_labels(frame: &mut Frame<'_>, area: Rect, plot: &PlotArea, theme: &TuiTheme) {
    let [y_min, y_max] = plot.y_bounds;
    let mut labels = vec![(plot.top, y_max), (plot.top + plot.height.saturating_sub(1), y_min)];
    if let Some(row) = plot.y_to_row(0.0) {
        labels.push((row, 0.0));
    }
    for (row, value) in labels {
        let rect = Rect::new(area.x, row, area.width, 1);
        frame.render_widget(
            Paragraph::new(format!("{value:.2} ")).style(theme.muted_style()).alignment(Alignment::Right),
            rect,
        );
    }
}

fn draw_x_labels(frame: &mut Frame<'_>, area: Rect, x_bounds: [f64; 2], theme: &TuiTheme) {
    let [x_min, x_max] = x_bounds;
    for (text, alignment) in [
        (format!("{x_min:.0}"), Alignment::Left),
        (format!("{:.0}", (x_min + x_max) / 2.0), Alignment::Center),
        (format!("{x_max:.0}"), Alignment::Right),
    ] {
        frame.render_widget(
            Paragraph::new(text).style(theme.muted_style()).alignment(alignment),
            area,
        );
    }
}

/// Draws the legend or the pinned note; returns the close button area for a note.
fn draw_panel(frame: &mut Frame<'_>, area: Rect, panel: &SidePanel, theme: &TuiTheme) -> Option<Rect> {
    match panel {
        SidePanel::Legend(legend) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Legend ");
            frame.render_widget(Paragraph::new(legend_text(legend)).block(block), area);
            None
        }
        SidePanel::Note(note) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Note ");
            frame.render_widget(
                Paragraph::new(note_text(note))
                    .block(block)
                    .wrap(Wrap { trim: false }),
                area,
            );

            let width = CLOSE_BUTTON.len() as u16;
            if area.width < width + 2 || area.height == 0 {
                return None;
            }
            let rect = Rect::new(area.right() - width - 1, area.y, width, 1);
            frame.render_widget(
                Paragraph::new(CLOSE_BUTTON).style(theme.close_button_style()),
                rect,
            );
            Some(rect)
        }
    }
}

fn legend_text(legend: &Legend) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = legend
        .phases
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled("██ ", Style::default().fg(rgb_color(item.color))),
                Span::raw(item.name.clone()),
            ])
        })
        .collect();
    lines.push(Line::from(vec![
        Span::styled("── ", Style::default().fg(NEUTRAL_COLOR)),
        Span::raw(legend.neutral),
    ]));
    lines.extend(legend.characters.iter().map(|item| {
        Line::from(vec![
            Span::styled("━━ ", Style::default().fg(rgb_color(item.color))),
            Span::raw(item.name.clone()),
        ])
    }));
    Text::from(lines)
}

/// Rich note text: bold `Label:` prefix per entry, a blank line between entries.
fn note_text(note: &Note) -> Text<'static> {
    let mut lines = Vec::new();
    for (idx, entry) in note.entries().enumerate() {
        if idx > 0 {
            lines.push(Line::default());
        }
        let mut body = entry.body.lines();
        lines.push(Line::from(vec![
            Span::styled(format!("{}:", entry.label), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::raw(body.next().unwrap_or_default().to_owned()),
        ]));
        lines.extend(body.map(|rest| Line::from(rest.to_owned())));
    }
    Text::from(lines)
}

fn draw_hover_label(frame: &mut Frame<'_>, area: Rect, label: &HoverLabel, theme: &TuiTheme) {
    let mut lines = vec![Line::from(Span::styled(
        label.phase_name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.extend(label.details.iter().map(|detail| Line::from(detail.clone())));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(2).min(area.width);
    let height = (lines.len() as u16).saturating_add(2).min(area.height);
    let origin = label.origin();
    let x = origin.column.min(area.right().saturating_sub(width));
    let y = origin.row.min(area.bottom().saturating_sub(height));
    let rect = Rect::new(x, y, width, height);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .style(theme.hover_label_style())
            .block(Block::default().borders(Borders::ALL)),
        rect,
    );
}

fn footer_line(theme: &TuiTheme) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, label) in [
        ("q", "quit"),
        ("1-9", "toggle character"),
        ("←/→", "cursor"),
        ("Enter", "pin note"),
        ("Esc", "close note"),
    ] {
        spans.push(Span::styled(format!(" {key} "), theme.key_style()));
        spans.push(Span::styled(format!("{label} "), theme.muted_style()));
    }
    Line::from(spans)
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange).map_err(
            |err| {
                teardown_terminal();
                err
            },
        )?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableFocusChange, DisableMouseCapture, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests;
