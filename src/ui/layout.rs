// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level screen areas: a title bar, the active view and the key hints.
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
}

/// Areas of the submission form, top to bottom.
///
/// `usage` has zero height until the first usage snapshot exists, so the
/// line appears beneath the submit control only once there is something
/// to show.
pub struct FormLayout {
    pub review: Rect,
    pub error: Rect,
    pub submit: Rect,
    pub usage: Rect,
}

/// Areas of the results view.
pub struct ResultsLayout {
    pub badge: Rect,
    pub confidence_title: Rect,
    pub confidence_bar: Rect,
    pub analysis: Rect,
    pub timestamp: Rect,
}

pub fn create_layout(frame_size: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

pub fn create_form_layout(area: Rect, show_usage: bool) -> FormLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(if show_usage { 1 } else { 0 }),
        ])
        .split(area);

    FormLayout {
        review: chunks[0],
        error: chunks[1],
        submit: chunks[2],
        usage: chunks[3],
    }
}

pub fn create_results_layout(inner: Rect) -> ResultsLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // badge
            Constraint::Length(1), // "Confidence"
            Constraint::Length(1), // bar
            Constraint::Length(1), // spacer
            Constraint::Min(0),    // analysis text
            Constraint::Length(1), // timestamp
        ])
        .split(inner);

    ResultsLayout {
        badge: chunks[0],
        confidence_title: chunks[1],
        confidence_bar: chunks[2],
        analysis: chunks[4],
        timestamp: chunks[5],
    }
}
