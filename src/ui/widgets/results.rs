// src/ui/widgets/results.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

/// Terminal color for a badge style class. Unknown classes stay unstyled.
fn badge_color(badge_class: &str) -> Option<Color> {
    match badge_class {
        "positive" => Some(Color::Green),
        "negative" => Some(Color::Red),
        "neutral" => Some(Color::Yellow),
        _ => None,
    }
}

fn bar_color(bar_class: &str) -> Option<Color> {
    match bar_class {
        "success" => Some(Color::Green),
        "danger" => Some(Color::Red),
        "warning" => Some(Color::Yellow),
        _ => None,
    }
}

fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "smile" => ":)",
        "frown" => ":(",
        "meh" => ":|",
        _ => "",
    }
}

fn styled(color: Option<Color>) -> Style {
    color.map_or_else(Style::default, |c| Style::default().fg(c))
}

/// Renders the results view for the last analysis.
pub fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let main_block = Block::default().borders(Borders::ALL).title("Analysis Results");

    let Some(result) = &app.result else {
        frame.render_widget(main_block, area);
        return;
    };

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);
    let chunks = crate::ui::layout::create_results_layout(inner_area);

    // --- Badge ---
    let badge_style = styled(badge_color(result.presentation.badge_class));
    let icon = icon_glyph(result.presentation.icon);
    let mut badge_spans = Vec::new();
    if !icon.is_empty() {
        badge_spans.push(Span::styled(format!("{icon}  "), badge_style.bold()));
    }
    badge_spans.push(Span::styled(result.sentiment_label.clone(), badge_style.bold()));
    let badge = Paragraph::new(Line::from(badge_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(badge_style));
    frame.render_widget(badge, chunks.badge);

    // --- Confidence ---
    frame.render_widget(Paragraph::new(Line::from("Confidence".bold())), chunks.confidence_title);
    let gauge = Gauge::default()
        .ratio(result.confidence_ratio)
        .label(result.confidence_label.clone())
        .gauge_style(styled(bar_color(result.presentation.bar_class)));
    frame.render_widget(gauge, chunks.confidence_bar);

    // --- Analysis text ---
    if let Some(analysis) = &result.analysis {
        let text = Text::from(vec![
            Line::from("WHY:".yellow().bold()),
            Line::from(analysis.as_str()),
        ]);
        frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), chunks.analysis);
    }

    let stamp = format!("Analyzed at {}", result.analyzed_at.format("%H:%M:%S"));
    frame.render_widget(
        Paragraph::new(stamp)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right),
        chunks.timestamp,
    );
}
