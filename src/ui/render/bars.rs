//! Top and bottom bar rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::app::{App, Mode};

use super::helpers::CHROME;

/// Render the top bar: theme name, modified marker, source file.
pub fn render_top_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bar = Style::default().bg(CHROME.bg_elevated);

    let mut spans = vec![
        Span::styled("  ", bar),
        Span::styled(
            app.document().name.as_str(),
            bar.fg(CHROME.text_bright).add_modifier(Modifier::BOLD),
        ),
    ];

    if app.session.is_modified() {
        spans.push(Span::styled("  ● modified", bar.fg(CHROME.warning)));
    }

    let malformed = app.document().malformed_count();
    if malformed > 0 {
        spans.push(Span::styled(
            format!("  {} invalid", malformed),
            bar.fg(CHROME.error),
        ));
    }

    let right_text = app
        .session
        .source_path()
        .map(|p| format!("{}  ", p.display()))
        .unwrap_or_else(|| "(no file)  ".to_string());
    let right_len = right_text.chars().count();

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(right_len);
    spans.push(Span::styled(" ".repeat(padding_len), bar));
    spans.push(Span::styled(right_text, bar.fg(CHROME.text_muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the bottom bar with mode-specific hints and messages.
pub fn render_bottom_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bar = Style::default().bg(CHROME.bg_elevated);

    // Filter mode
    if app.ui.mode == Mode::Filter {
        let total = app.document().len();
        let match_count = app.visible_indices().len();
        let line = Line::from(vec![
            Span::styled(" Filter: ", bar.fg(CHROME.accent)),
            Span::styled(app.list.filter.as_str(), bar.fg(CHROME.text_bright)),
            Span::styled("█", bar.fg(CHROME.accent)),
            Span::styled(
                format!(" ({}/{})  Enter: apply  Esc: cancel", match_count, total),
                bar.fg(CHROME.text_muted),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).style(bar), area);
        return;
    }

    let line = if let Some(error) = &app.ui.error {
        Line::from(Span::styled(format!(" {}", error), bar.fg(CHROME.error)))
    } else if let Some(status) = &app.ui.status {
        Line::from(Span::styled(format!(" {}", status), bar.fg(CHROME.success)))
    } else {
        Line::from(Span::styled(hints(app.ui.mode), bar.fg(CHROME.text_muted)))
    };

    frame.render_widget(Paragraph::new(line).style(bar), area);
}

fn hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Picker => " ←/→ channel  ↑/↓ ±1  PgUp/PgDn ±16  0-9 type  # hex  Enter apply  Esc cancel",
        Mode::Prompt => " Enter: confirm  Esc: cancel",
        Mode::ConfirmReset => " y: reset  n: keep editing",
        Mode::Help => " ?/Esc: close help",
        Mode::Normal | Mode::Filter => {
            " Enter edit  n name  e export  i import  R reset  / filter  y copy  ? help  q quit"
        }
    }
}
