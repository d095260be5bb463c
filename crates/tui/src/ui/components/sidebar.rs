use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    app::{AppState, Section},
    i18n,
    ui::theme::Theme,
};

/// Navigation rail. Expanded it shows translated labels; collapsed it drops
/// to icons. The footer glyph mirrors the collapse direction (◀ to
/// collapse, ▶ to expand).
pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // App name
            Constraint::Min(0),    // Nav entries
            Constraint::Length(1), // Collapse glyph
        ])
        .split(inner);

    let title = if state.sidebar_collapsed { "৳" } else { "hishab" };
    frame.render_widget(
        Paragraph::new(Span::styled(
            title,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        rows[0],
    );

    let entries: Vec<Line> = Section::ALL
        .iter()
        .map(|section| {
            let active = *section == state.section;
            let style = if active {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.dim)
            };

            let text = if state.sidebar_collapsed {
                section.icon().to_string()
            } else {
                // Missing dictionary keys are skipped, leaving the row blank.
                i18n::lookup(state.language, section.label_key())
                    .unwrap_or_default()
                    .to_string()
            };

            let marker = if active { "▌" } else { " " };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled(format!(" {text}"), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(entries), rows[1]);

    let glyph = if state.sidebar_collapsed { "▶" } else { "◀" };
    frame.render_widget(
        Paragraph::new(Span::styled(glyph, Style::default().fg(theme.dim))),
        rows[2],
    );
}
