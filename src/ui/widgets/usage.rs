// src/ui/widgets/usage.rs

use crate::app::{App, UsageTier};
use ratatui::{prelude::*, widgets::Paragraph};

pub fn tier_color(tier: UsageTier) -> Color {
    match tier {
        UsageTier::Info => Color::Cyan,
        UsageTier::Warning => Color::Yellow,
        UsageTier::Danger => Color::Red,
    }
}

/// Renders the remaining-analyses line. Draws nothing before the first
/// usage snapshot.
pub fn render_usage(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = app.usage_notice() else {
        return;
    };

    let style = Style::default().fg(tier_color(notice.tier));
    let line = Line::from(vec![
        Span::styled(notice.prefix, style),
        Span::styled(notice.emphasis, style.bold()),
        Span::styled(notice.suffix, style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
