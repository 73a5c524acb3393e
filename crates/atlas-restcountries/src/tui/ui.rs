//! UI rendering

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::{App, View};
use crate::display::{CountryDetailDisplay, CountryListDisplay};

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Output region (list or detail)
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Toast line (notifications)
            Constraint::Length(1), // Search input (single line, minimal)
        ])
        .split(frame.area());

    render_output(frame, app, chunks[0]);
    render_status_line(frame, app, chunks[1]);
    render_toast_line(frame, app, chunks[2]);
    render_search_input(frame, app, chunks[3]);
}

/// Render the output region: idle hint, in-flight spinner, country list or
/// country detail, depending on the current view.
fn render_output(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM))
        .title(" Countries ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Add 2 char left padding
    let padded = Rect {
        x: inner.x + 2,
        y: inner.y,
        width: inner.width.saturating_sub(2),
        height: inner.height,
    };

    match &app.view {
        View::Idle => {
            let hint = Paragraph::new("Type a country name to search")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(hint, inner);
        }
        View::Searching { started_at } => {
            let line = Line::from(Span::styled(
                format!("{} Searching...", spinner_frame(*started_at)),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::DIM),
            ));
            frame.render_widget(Paragraph::new(line), padded);
        }
        View::List(countries) => {
            let items: Vec<ListItem> = CountryListDisplay::new(countries)
                .to_tui_lines()
                .into_iter()
                .map(ListItem::new)
                .collect();
            frame.render_widget(List::new(items), padded);
        }
        View::Detail(detail) => {
            let lines = CountryDetailDisplay::new(detail).to_tui_lines();
            frame.render_widget(Paragraph::new(lines), padded);
        }
    }
}

/// Render the match count + query time line (subtle)
fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.view {
        View::List(countries) => Line::from(vec![
            Span::styled(
                format!("  {} matches ", countries.len()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("({})", format_duration(app.last_duration.unwrap_or_default())),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::DIM),
            ),
        ]),
        View::Detail(_) => Line::from(vec![
            Span::styled("  1 match ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("({})", format_duration(app.last_duration.unwrap_or_default())),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::DIM),
            ),
        ]),
        _ => Line::from(Span::styled(
            "  Esc to quit",
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_toast_line(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(ref toast) = app.toast {
        let bracket = Style::default().fg(Color::DarkGray);
        let toast_style = if toast.is_error {
            Style::default().fg(Color::Red).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Blue).add_modifier(Modifier::DIM)
        };

        let spans = vec![
            Span::styled("  [", bracket),
            Span::styled(&toast.message, toast_style),
            Span::styled("]", bracket),
        ];

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
    // If no toast, leave the line empty
}

/// Render the search input (minimal, thick bar on left)
fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let cursor_style = Style::default().fg(Color::White).bg(Color::DarkGray);
    let text_style = Style::default().fg(Color::White);

    // Split the input at cursor position
    let (before, after) = app.input.text.split_at(app.input.cursor);
    let cursor_char = after.chars().next();
    let after_cursor = if let Some(c) = cursor_char {
        &after[c.len_utf8()..]
    } else {
        ""
    };

    let mut spans = vec![Span::styled("▌ ", Style::default().fg(Color::Yellow))];

    if !before.is_empty() {
        spans.push(Span::styled(before, text_style));
    }

    // Cursor: block cursor over the character at the cursor, or a solid
    // block when at the end of the line
    if let Some(c) = cursor_char {
        spans.push(Span::styled(c.to_string(), cursor_style));
    } else {
        spans.push(Span::styled("█", Style::default().fg(Color::White)));
    }

    if !after_cursor.is_empty() {
        spans.push(Span::styled(after_cursor, text_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn spinner_frame(started_at: Instant) -> &'static str {
    const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let elapsed = started_at.elapsed().as_millis() / 80;
    let idx = (elapsed as usize) % FRAMES.len();
    FRAMES[idx]
}

fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else {
        format!("{:.1}ms", micros as f64 / 1000.0)
    }
}
