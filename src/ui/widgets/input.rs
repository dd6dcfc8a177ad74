// src/ui/widgets/input.rs
use crate::app::{App, Focus};
use crate::ui::layout;
use crate::ui::widgets::usage;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

const PLACEHOLDER: &str = "Type or paste a movie review...";

/// Renders the submission form: review box, inline error, submit control
/// and, once known, the usage line.
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let form = layout::create_form_layout(area, app.usage.is_some());

    render_review(frame, app, form.review);
    render_error(frame, app, form.error);
    render_submit(frame, app, form.submit);
    usage::render_usage(frame, app, form.usage);
}

fn render_review(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.invalid {
        Style::default().fg(Color::Red)
    } else if app.focus == Focus::Review {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Your Review")
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if app.input.is_empty() {
        frame.render_widget(
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray)),
            inner,
        );
    } else {
        let width = inner.width as usize;
        let lines = hard_wrap(&app.input, width);
        // Leave room for the cursor row, which may start past the last line.
        let rows = app.input.chars().count() / width + 1;
        let skip = rows.saturating_sub(inner.height as usize);
        let visible: Vec<Line> = lines.into_iter().skip(skip).map(Line::from).collect();
        frame.render_widget(Paragraph::new(visible), inner);
    }

    if app.focus == Focus::Review && !app.is_busy() {
        let (col, row) = cursor_offset(app.input.chars().count(), inner.width, inner.height);
        frame.set_cursor_position((inner.x + col, inner.y + row));
    }
}

fn render_error(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = app.error_message() {
        let line = Line::from(Span::styled(message, Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_submit(frame: &mut Frame, app: &App, area: Rect) {
    let style = if app.is_busy() {
        Style::default().fg(Color::Cyan)
    } else if app.submit_disabled() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::new().fg(Color::Black).bg(Color::Green).bold()
    };
    let button = Line::from(Span::styled(format!("[ {} ]", app.submit_label()), style));
    frame.render_widget(Paragraph::new(button), area);
}

/// Splits text into rows of exactly `width` characters (the last may be
/// shorter). Predictable rows keep the cursor position easy to compute.
fn hard_wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().collect();
    chars.chunks(width).map(|row| row.iter().collect()).collect()
}

/// Cursor position inside the review box after `len` characters, accounting
/// for the rows scrolled off the top.
fn cursor_offset(len: usize, width: u16, height: u16) -> (u16, u16) {
    let width = width.max(1) as usize;
    let height = height.max(1) as usize;
    let row = len / width;
    let col = len % width;
    let rows_shown = row + 1;
    let scrolled = rows_shown.saturating_sub(height);
    (col as u16, (row - scrolled) as u16)
}
