// src/ui/widgets/header.rs

use ratatui::{prelude::*, widgets::Paragraph};

pub fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled("Movie Review Sentiment", Style::new().bold().fg(Color::Cyan)),
        Span::styled(concat!("  v", env!("CARGO_PKG_VERSION")), Style::new().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), area);
}
