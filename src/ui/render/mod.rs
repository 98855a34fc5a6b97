//! UI rendering with ratatui.
//!
//! The editor chrome stays muted so the theme's own swatches carry the color.

mod bars;
mod helpers;
mod list;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use super::app::{App, Mode};

pub use helpers::{swatch_style, to_color, Chrome, CHROME};

/// Main render function.
pub fn render(frame: &mut Frame, app: &mut App) {
    let _timer = crate::metrics::Timer::start("render_frame");

    let bg_block = Block::default().style(Style::default().bg(CHROME.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Top bar
            Constraint::Min(0),    // Control list
            Constraint::Length(1), // Bottom bar
        ])
        .split(frame.area());

    bars::render_top_bar(frame, app, chunks[0]);
    list::render_control_list(frame, app, chunks[1]);
    bars::render_bottom_bar(frame, app, chunks[2]);

    // Overlays
    match app.ui.mode {
        Mode::Picker => overlays::render_picker_overlay(frame, app),
        Mode::Prompt => overlays::render_prompt_overlay(frame, app),
        Mode::ConfirmReset => overlays::render_confirm_reset_overlay(frame, app),
        Mode::Help => overlays::render_help_overlay(frame),
        Mode::Normal | Mode::Filter => {}
    }
}
