// src/ui/widgets/footer.rs

use crate::app::{App, View};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let key = |label: &'static str| Span::styled(label, Style::new().bold().fg(Color::Yellow));

    let spans = match app.view() {
        View::Form if app.is_busy() => Line::from(vec![
            Span::raw("Analyzing... Press "),
            key("Esc"),
            Span::raw(" to quit."),
        ]),
        View::Form if app.usage_exhausted() => Line::from(vec![
            Span::raw("Analysis limit reached. Press "),
            key("Esc"),
            Span::raw(" to quit."),
        ]),
        View::Form => Line::from(vec![
            Span::raw("Press "),
            key("Enter"),
            Span::raw(" to analyze, "),
            key("Esc"),
            Span::raw(" to quit."),
        ]),
        View::Results => Line::from(vec![
            key("[N]"),
            Span::raw(" Analyze another, "),
            key("[Q]"),
            Span::raw("uit"),
        ]),
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
