//! Control list rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::{display_label, swatch_label};
use crate::ui::app::App;

use super::helpers::{
    pad_swatch_label, spec_swatch_style, truncate_str, CHROME, CONTROL_NAME_WIDTH,
};

/// Render the list of controls with their swatches.
pub fn render_control_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let doc_len = app.document().len();
    let visible_indices = app.visible_indices();

    let title = if app.list.filter.is_empty() {
        format!(" Controls ({}) ", doc_len)
    } else {
        format!(
            " Controls ({}/{}) [filter: {}] ",
            visible_indices.len(),
            doc_len,
            app.list.filter
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CHROME.border_dim))
        .title(Span::styled(title, Style::default().fg(CHROME.text_muted)))
        .style(Style::default().bg(CHROME.bg_surface));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = inner.height as usize;
    if height < 2 {
        return;
    }

    // Header row
    let name_width = app
        .document()
        .controls()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(8, CONTROL_NAME_WIDTH);
    let header_style = Style::default()
        .fg(CHROME.text_bright)
        .bg(CHROME.bg_surface)
        .add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = Vec::with_capacity(height);
    lines.push(Line::from(vec![
        Span::styled("  ", header_style),
        Span::styled(format!("{:<name_width$}", "Control"), header_style),
        Span::styled("  Color", header_style),
    ]));
    let rows = height - 1;

    if visible_indices.is_empty() {
        let msg = if doc_len == 0 {
            "No controls in this theme"
        } else {
            "No matches"
        };
        lines.push(Line::from(Span::styled(
            msg,
            Style::default().fg(CHROME.text_muted).bg(CHROME.bg_surface),
        )));
        frame.render_widget(Paragraph::new(lines), inner);
        return;
    }

    let selected_pos = visible_indices
        .iter()
        .position(|&idx| idx == app.list.selected_idx)
        .unwrap_or(0);

    // Keep selection visible
    let max_scroll = visible_indices.len().saturating_sub(rows);
    app.list.scroll = app.list.scroll.min(max_scroll);
    if selected_pos < app.list.scroll {
        app.list.scroll = selected_pos;
    } else if selected_pos >= app.list.scroll + rows {
        app.list.scroll = selected_pos + 1 - rows;
    }

    let doc = app.session.document();
    let label_width = visible_indices
        .iter()
        .filter_map(|&idx| doc.get_index(idx))
        .map(|(_, spec)| swatch_label(spec).chars().count())
        .max()
        .unwrap_or(0);

    for &idx in visible_indices.iter().skip(app.list.scroll).take(rows) {
        let Some((control, spec)) = doc.get_index(idx) else {
            continue;
        };
        let is_selected = idx == app.list.selected_idx;
        let row_bg = if is_selected {
            CHROME.bg_selected
        } else {
            CHROME.bg_surface
        };

        let indicator = if is_selected { "▌ " } else { "  " };
        let text_color = if is_selected {
            CHROME.text_bright
        } else {
            CHROME.text_normal
        };
        let name = format!(
            "{:<name_width$}",
            truncate_str(control, CONTROL_NAME_WIDTH)
        );

        let mut spans = vec![
            Span::styled(indicator, Style::default().fg(CHROME.accent).bg(row_bg)),
            Span::styled(name, Style::default().fg(text_color).bg(row_bg)),
            Span::styled("  ", Style::default().bg(row_bg)),
            Span::styled(
                pad_swatch_label(&swatch_label(spec), label_width),
                spec_swatch_style(spec),
            ),
            Span::styled("  ", Style::default().bg(row_bg)),
        ];
        if spec.is_malformed() {
            spans.push(Span::styled(
                "! ",
                Style::default().fg(CHROME.warning).bg(row_bg),
            ));
        }
        spans.push(Span::styled(
            display_label(spec),
            Style::default().fg(CHROME.text_muted).bg(row_bg),
        ));
        lines.push(Line::from(spans));
    }

    let para = Paragraph::new(lines).style(Style::default().bg(CHROME.bg_surface));
    frame.render_widget(para, inner);
}
