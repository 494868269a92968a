// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, style::Color, Terminal};

use super::{draw, note_text, App, TuiTheme};
use crate::config::ChartConfig;
use crate::interaction::{CellPos, Panel};
use crate::model::Dataset;
use crate::resolve::{Note, NoteEntry};

fn demo_app() -> App {
    App::new(Dataset::demo().expect("demo dataset"), ChartConfig::default(), TuiTheme::default())
}

fn render(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    terminal
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer();
    (0..buf.area.height)
        .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn mouse(kind: MouseEventKind, pos: CellPos) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column: pos.column,
        row: pos.row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

/// A cell inside the plot over `line`, on the top row.
fn plot_cell(app: &App, line: f64) -> CellPos {
    let plot = app.hits.plot.expect("plot drawn");
    CellPos::new(plot.x_to_column(line).expect("column"), plot.top)
}

#[test]
fn initial_frame_shows_title_selector_and_legend() {
    let mut app = demo_app();
    let text = screen_text(&render(&mut app, 140, 40));

    assert!(text.contains("Sentiment Analysis of Nausic"));
    assert!(text.contains("[x] 1 NAUSICAA"));
    assert!(text.contains("[ ] 2 KUSHANA"));
    assert!(text.contains("Legend"));
    assert!(text.contains("Return with the Elixir"));
    assert!(text.contains("Neutral Line"));
    assert!(!text.contains("Note"));
    assert!(app.hits.plot.is_some());
    assert!(!app.hits.markers.is_empty());
}

#[test]
fn hover_label_follows_pointer_and_disappears_outside_plot() {
    let mut app = demo_app();
    render(&mut app, 140, 40);

    let pos = plot_cell(&app, 200.0);
    app.handle_event(mouse(MouseEventKind::Moved, pos));
    assert_eq!(app.state.hover_label(), Some("Meeting the Mentor"));
    let text = screen_text(&render(&mut app, 140, 40));
    assert!(text.contains("NAUSICAA: "));

    app.handle_event(mouse(MouseEventKind::Moved, CellPos::new(0, 0)));
    assert_eq!(app.state.hover_label(), None);
    assert!(app.state.hover().is_none());
    let text = screen_text(&render(&mut app, 140, 40));
    assert!(!text.contains("NAUSICAA: "));
}

#[test]
fn focus_loss_clears_hover() {
    let mut app = demo_app();
    render(&mut app, 140, 40);
    app.handle_event(mouse(MouseEventKind::Moved, plot_cell(&app, 200.0)));

    app.handle_event(Event::FocusLost);
    assert!(app.state.hover().is_none());
}

#[test]
fn clicking_a_band_pins_phase_note_and_close_button_unpins() {
    let mut app = demo_app();
    render(&mut app, 140, 40);

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), plot_cell(&app, 200.0)));
    let pinned = app.state.pinned().expect("pinned note");
    assert_eq!(pinned.heading().label, "Meeting the Mentor");
    assert!(pinned.points().is_empty());

    let text = screen_text(&render(&mut app, 140, 40));
    assert!(text.contains("Note"));
    assert!(text.contains("[X]"));
    assert!(!text.contains("Legend"));

    let close = app.hits.close_button.expect("close button");
    app.handle_event(mouse(
        MouseEventKind::Down(MouseButton::Left),
        CellPos::new(close.x, close.y),
    ));
    assert_eq!(app.state.panel(), Panel::Legend);
    let text = screen_text(&render(&mut app, 140, 40));
    assert!(text.contains("Legend"));
}

#[test]
fn every_plot_column_hovers_clicks_and_paints_a_phase() {
    let mut app = demo_app();
    let terminal = render(&mut app, 140, 40);
    let plot = app.hits.plot.expect("plot drawn");
    let bottom = plot.top + plot.height - 1;

    for column in plot.left..plot.left + plot.width {
        let pos = CellPos::new(column, plot.top);
        app.handle_event(mouse(MouseEventKind::Moved, pos));
        assert!(
            app.state.hover_label().is_some(),
            "no phase under column {column} (line {})",
            plot.column_to_line(column)
        );

        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), pos));
        assert!(app.state.pinned().is_some(), "click at column {column} pinned nothing");
        app.handle_event(key(KeyCode::Esc, KeyModifiers::NONE));

        assert_ne!(
            terminal.backend().buffer()[(column, bottom)].bg,
            Color::Reset,
            "column {column} has no band"
        );
    }
}

#[test]
fn adjacent_phases_meet_without_a_gap_column() {
    let mut app = demo_app();
    render(&mut app, 140, 40);
    let plot = app.hits.plot.expect("plot drawn");

    let labels: Vec<String> = (plot.left..plot.left + plot.width)
        .filter_map(|column| {
            app.handle_event(mouse(MouseEventKind::Moved, CellPos::new(column, plot.top)));
            app.state.hover_label().map(str::to_owned)
        })
        .collect();
    assert_eq!(labels.len(), usize::from(plot.width));
    assert!(labels.iter().any(|label| label == "Reward"));
    assert!(labels.iter().any(|label| label == "The Road Back"));
    assert!(labels.iter().any(|label| label == "Resurrection"));
}

#[test]
fn clicking_a_marker_pins_single_point_note() {
    let mut app = demo_app();
    render(&mut app, 140, 40);
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), plot_cell(&app, 200.0)));

    let (pos, line) = app.hits.markers[0];
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), pos));

    let pinned = app.state.pinned().expect("pinned note");
    assert_eq!(pinned.heading().label, format!("Line {line}"));
    assert!(pinned.points().is_empty());
}

#[test]
fn clicking_outside_everything_changes_nothing() {
    let mut app = demo_app();
    render(&mut app, 140, 40);

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), CellPos::new(139, 39)));
    assert!(app.state.pinned().is_none());
    assert_eq!(app.state.selection().len(), 1);
}

#[test]
fn checkbox_click_and_digit_keys_toggle_characters() {
    let mut app = demo_app();
    render(&mut app, 140, 40);

    let (rect, name) = app.hits.checkboxes[1].clone();
    assert_eq!(name, "KUSHANA");
    app.handle_event(mouse(
        MouseEventKind::Down(MouseButton::Left),
        CellPos::new(rect.x, rect.y),
    ));
    assert!(app.state.selection().contains("KUSHANA"));

    app.handle_event(key(KeyCode::Char('2'), KeyModifiers::NONE));
    assert!(!app.state.selection().contains("KUSHANA"));

    app.handle_event(key(KeyCode::Char('1'), KeyModifiers::NONE));
    assert!(app.state.selection().is_empty());
    app.handle_event(key(KeyCode::Char('9'), KeyModifiers::NONE));
    assert!(app.state.selection().is_empty());

    render(&mut app, 140, 40);
    assert!(app.hits.markers.is_empty());
}

#[test]
fn keyboard_cursor_hovers_and_pins() {
    let mut app = demo_app();
    render(&mut app, 140, 40);

    app.handle_event(key(KeyCode::Right, KeyModifiers::NONE));
    for _ in 0..3 {
        app.handle_event(key(KeyCode::Right, KeyModifiers::SHIFT));
    }
    app.handle_event(key(KeyCode::Right, KeyModifiers::NONE));
    app.handle_event(key(KeyCode::Right, KeyModifiers::NONE));
    assert_eq!(app.cursor_line, Some(32));
    assert_eq!(app.state.hover_label(), Some("Ordinary World"));

    app.handle_event(key(KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(
        app.state.pinned().map(|note| note.heading().label.as_str()),
        Some("Line 32")
    );

    app.handle_event(key(KeyCode::Left, KeyModifiers::NONE));
    app.handle_event(key(KeyCode::Enter, KeyModifiers::NONE));
    let pinned = app.state.pinned().expect("pinned note");
    assert_eq!(pinned.heading().label, "Ordinary World");
    let labels: Vec<&str> = pinned.points().iter().map(|entry| entry.label.as_str()).collect();
    assert_eq!(labels, vec!["Line 3", "Line 32"]);

    app.handle_event(key(KeyCode::Esc, KeyModifiers::NONE));
    assert!(app.state.pinned().is_none());
}

#[test]
fn cursor_stops_at_last_line() {
    let mut app = demo_app();
    render(&mut app, 140, 40);

    for _ in 0..100 {
        app.handle_event(key(KeyCode::Right, KeyModifiers::SHIFT));
    }
    assert_eq!(app.cursor_line, Some(684));
    assert_eq!(app.state.hover_label(), Some("Return with the Elixir"));
}

#[test]
fn quit_keys_stop_the_loop() {
    let mut app = demo_app();
    app.handle_event(key(KeyCode::Char('q'), KeyModifiers::NONE));
    assert!(app.should_quit);

    let mut app = demo_app();
    app.handle_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[test]
fn tiny_terminal_skips_plot() {
    let mut app = demo_app();
    render(&mut app, 16, 4);
    assert!(app.hits.plot.is_none());

    app.handle_event(mouse(MouseEventKind::Moved, CellPos::new(5, 2)));
    assert!(app.state.hover().is_none());
}

#[test]
fn note_text_separates_entries_with_blank_line() {
    let note = Note::with_points(
        NoteEntry::new("Ordinary World", "Home."),
        vec![NoteEntry::new("Line 3", "Opening.")],
    );
    let text = note_text(&note);

    let rendered: Vec<String> = text
        .lines
        .iter()
        .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
        .collect();
    assert_eq!(
        rendered,
        vec!["Ordinary World: Home.", "", "Line 3: Opening."]
    );
}
