// src/ui/mod.rs

use crate::app::{App, View};
use ratatui::prelude::*;

mod layout;
mod widgets;

/// Draws the whole screen from the view-model. The only place that decides
/// which view is visible.
pub fn render(app: &App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area());

    widgets::header::render_header(frame, layout.header);

    match app.view() {
        View::Form => widgets::input::render_form(frame, app, layout.main),
        View::Results => widgets::results::render_results(frame, app, layout.main),
    }

    widgets::footer::render_footer(frame, app, layout.footer);
}
