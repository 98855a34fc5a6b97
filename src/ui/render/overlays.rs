//! Modal overlay rendering (color picker, prompts, reset confirmation, help).

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::{named_colors, Rgb};
use crate::ui::app::{App, Channel};

use super::helpers::{centered_rect, swatch_style, truncate_str, CHROME};

/// Width of the channel gauges in the picker.
const GAUGE_WIDTH: usize = 24;

fn overlay_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CHROME.accent))
        .title(Span::styled(
            title,
            Style::default()
                .fg(CHROME.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(CHROME.bg_elevated))
}

/// Open an overlay of the given size and return its inner area.
fn open_overlay(frame: &mut Frame, title: String, width: u16, height: u16) -> Rect {
    let overlay_area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, overlay_area);
    let block = overlay_block(title);
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);
    inner
}

fn elevated() -> Style {
    Style::default().bg(CHROME.bg_elevated)
}

fn channel_color(channel: Channel) -> Color {
    match channel {
        Channel::Red => Color::Rgb(215, 85, 85),
        Channel::Green => Color::Rgb(85, 185, 105),
        Channel::Blue => Color::Rgb(90, 140, 230),
    }
}

fn swatch_span(rgb: Rgb, width: usize) -> Span<'static> {
    Span::styled(format!("{:^width$}", rgb.to_hex()), swatch_style(rgb))
}

/// Render the color picker overlay.
pub fn render_picker_overlay(frame: &mut Frame, app: &App) {
    let picker = &app.picker;
    let title = format!(" Choose color for {} ", truncate_str(&picker.control, 30));
    let inner = open_overlay(frame, title, 50, 13);
    if inner.height == 0 {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();

    // Before / after preview
    lines.push(Line::from(vec![
        Span::styled(" before ", elevated().fg(CHROME.text_muted)),
        swatch_span(picker.initial, 12),
        Span::styled("   after ", elevated().fg(CHROME.text_muted)),
        swatch_span(picker.rgb, 12),
    ]));
    lines.push(Line::from(vec![
        Span::styled("        ", elevated()),
        Span::styled(" ".repeat(12), swatch_style(picker.initial)),
        Span::styled("         ", elevated()),
        Span::styled(" ".repeat(12), swatch_style(picker.rgb)),
    ]));
    lines.push(Line::from(Span::styled("", elevated())));

    for channel in Channel::ALL {
        let value = channel.get(picker.rgb);
        let is_focused = channel == picker.channel && picker.hex_input.is_none();
        let filled = usize::from(value) * GAUGE_WIDTH / 255;
        let row_bg = if is_focused {
            CHROME.bg_selected
        } else {
            CHROME.bg_elevated
        };
        let label_style = Style::default()
            .fg(if is_focused {
                CHROME.text_bright
            } else {
                CHROME.text_normal
            })
            .bg(row_bg);

        lines.push(Line::from(vec![
            Span::styled(
                if is_focused { " ▶ " } else { "   " },
                Style::default().fg(CHROME.accent).bg(row_bg),
            ),
            Span::styled(format!("{} {:>3} ", channel.label(), value), label_style),
            Span::styled(
                "█".repeat(filled),
                Style::default().fg(channel_color(channel)).bg(row_bg),
            ),
            Span::styled(
                "·".repeat(GAUGE_WIDTH - filled),
                Style::default().fg(CHROME.text_faint).bg(row_bg),
            ),
            Span::styled(" ", Style::default().bg(row_bg)),
        ]));
    }

    lines.push(Line::from(Span::styled("", elevated())));

    match &picker.hex_input {
        Some(input) => lines.push(Line::from(vec![
            Span::styled(" Hex: #", elevated().fg(CHROME.accent)),
            Span::styled(input.as_str(), elevated().fg(CHROME.text_bright)),
            Span::styled("█", elevated().fg(CHROME.accent)),
            Span::styled("  Enter: use  Esc: back", elevated().fg(CHROME.text_muted)),
        ])),
        None => lines.push(Line::from(vec![
            Span::styled(
                format!(" {}  {}", picker.rgb, picker.rgb.to_hex()),
                elevated().fg(CHROME.text_normal),
            ),
            Span::styled(
                format!("  text: {}", picker.rgb.contrasting_text()),
                elevated().fg(CHROME.text_muted),
            ),
        ])),
    }

    let para = Paragraph::new(lines).style(elevated());
    frame.render_widget(para, inner);
}

/// Render a text prompt overlay.
pub fn render_prompt_overlay(frame: &mut Frame, app: &App) {
    let inner = open_overlay(frame, app.prompt.kind.title().to_string(), 60, 5);
    if inner.height == 0 {
        return;
    }

    let max_input = (inner.width as usize).saturating_sub(3);
    let input = &app.prompt.input;
    let char_count = input.chars().count();
    // Keep the cursor end visible
    let shown: String = if char_count > max_input {
        input.chars().skip(char_count - max_input).collect()
    } else {
        input.clone()
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" ", elevated()),
            Span::styled(shown, elevated().fg(CHROME.text_bright)),
            Span::styled("█", elevated().fg(CHROME.accent)),
        ]),
        Line::from(Span::styled("", elevated())),
        Line::from(Span::styled(
            " Enter: confirm  Esc: cancel",
            elevated().fg(CHROME.text_muted),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).style(elevated()), inner);
}

/// Render the reset confirmation overlay.
pub fn render_confirm_reset_overlay(frame: &mut Frame, app: &App) {
    let inner = open_overlay(frame, " Reset Theme ".to_string(), 56, 6);
    if inner.height == 0 {
        return;
    }

    let original = app.session.original();
    let lines = vec![
        Line::from(Span::styled(
            " Are you sure you want to reset to the original theme?",
            elevated().fg(CHROME.text_bright),
        )),
        Line::from(Span::styled(
            format!(" '{}' with {} controls", original.name, original.len()),
            elevated().fg(CHROME.text_muted),
        )),
        Line::from(Span::styled("", elevated())),
        Line::from(vec![
            Span::styled(" y", elevated().fg(CHROME.accent).add_modifier(Modifier::BOLD)),
            Span::styled(": reset   ", elevated().fg(CHROME.text_normal)),
            Span::styled("n", elevated().fg(CHROME.accent).add_modifier(Modifier::BOLD)),
            Span::styled(": keep editing", elevated().fg(CHROME.text_normal)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).style(elevated()), inner);
}

/// Render the help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let entries = [
        ("j/k or ↑/↓", "Move between controls"),
        ("g / G", "Jump to first / last control"),
        ("Enter", "Pick a new color for the control"),
        ("n", "Edit theme name"),
        ("e", "Export theme to a file"),
        ("i", "Load a theme file"),
        ("R", "Reset to the original theme"),
        ("/", "Fuzzy filter controls"),
        ("y", "Copy color hex to clipboard"),
        ("?", "Close this help overlay"),
        ("q or Ctrl+C", "Quit"),
    ];
    let colors = named_colors();

    let needed_height = (entries.len() + colors.len().div_ceil(3) + 7) as u16;
    let inner = open_overlay(frame, " Help ".to_string(), 64, needed_height);
    if inner.height == 0 {
        return;
    }

    let heading = elevated().fg(CHROME.accent).add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled("Keybindings", heading)));
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<16}", key), elevated().fg(CHROME.accent)),
            Span::styled(desc, elevated().fg(CHROME.text_normal)),
        ]));
    }

    lines.push(Line::from(Span::styled("", elevated())));
    lines.push(Line::from(Span::styled("Named colors", heading)));
    for row in colors.chunks(3) {
        let mut spans = Vec::new();
        for (name, rgb) in row {
            spans.push(Span::styled(format!(" {:<10}", name), swatch_style(*rgb)));
            spans.push(Span::styled(" ", elevated()));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(Span::styled("", elevated())));
    lines.push(Line::from(Span::styled(
        "Press ? again, Esc, or q to close.",
        elevated().fg(CHROME.text_muted),
    )));

    frame.render_widget(Paragraph::new(lines).style(elevated()), inner);
}
