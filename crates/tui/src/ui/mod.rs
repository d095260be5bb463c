pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{AppState, SIDEBAR_BREAKPOINT, Section};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::for_mode(state.theme);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    // Responsive sidebar: narrow viewports slide it in/out, wide ones
    // collapse it in place.
    let narrow = area.width < SIDEBAR_BREAKPOINT;
    let sidebar_width = if narrow {
        if state.sidebar_visible { 18 } else { 0 }
    } else if state.sidebar_collapsed {
        4
    } else {
        18
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(area);

    if sidebar_width > 0 {
        components::sidebar::render(frame, columns[0], state, &theme);
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Min(0),    // Section content
            Constraint::Length(1), // Bottom bar
        ])
        .split(columns[1]);

    render_info_bar(frame, rows[0], state, &theme);

    match state.section {
        Section::Dashboard => screens::dashboard::render(frame, rows[1], state),
        Section::Transactions => screens::transactions::render(frame, rows[1], state),
        Section::Add => screens::add::render(frame, rows[1], state),
        Section::Chat => screens::chat::render(frame, rows[1], state),
    }

    render_bottom_bar(frame, rows[2], state, &theme);
    render_confirm(frame, area, state, &theme);
    components::toast::render(frame, area, state.toast.as_ref(), &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let theme_label = match state.theme {
        crate::local_state::ThemeMode::Light => "light",
        crate::local_state::ThemeMode::Dark => "dark",
    };

    let mut parts = vec![
        Span::styled(
            " hishab ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("lang", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", state.language.label())),
        Span::styled("theme", Style::default().fg(theme.dim)),
        Span::raw(format!(": {theme_label}")),
    ];

    if let Some(error) = &state.summary_error {
        parts.push(Span::raw("  "));
        parts.push(Span::styled(error.clone(), Style::default().fg(theme.error)));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let accent = Style::default().fg(theme.accent);
    let sep = Span::styled("  │  ", Style::default().fg(theme.border));

    let mut parts = vec![
        Span::styled("Tab", accent),
        Span::raw(" section"),
        sep.clone(),
        Span::styled("^L", accent),
        Span::raw(" lang"),
        Span::raw("  "),
        Span::styled("^T", accent),
        Span::raw(" theme"),
        Span::raw("  "),
        Span::styled("^B", accent),
        Span::raw(" sidebar"),
        Span::raw("  "),
        Span::styled("^R", accent),
        Span::raw(" refresh"),
    ];

    let hints: &[(&str, &str)] = match state.section {
        Section::Dashboard => &[("t", "transactions"), ("a", "add"), ("c", "chat")],
        Section::Transactions => &[("j/k", "move"), ("x", "delete"), ("f", "filter")],
        Section::Add => &[("Enter", "submit"), ("Esc", "dismiss error")],
        Section::Chat => &[("Enter", "send")],
    };
    for (key, label) in hints {
        parts.push(sep.clone());
        parts.push(Span::styled(*key, accent));
        parts.push(Span::raw(format!(" {label}")));
    }

    parts.push(sep);
    parts.push(Span::styled("q", accent));
    parts.push(Span::raw(" quit"));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// Blocking delete confirmation: `y`/Enter confirms, `n`/Esc cancels.
fn render_confirm(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    if state.confirm_delete.is_none() {
        return;
    }

    let rect = centered_box(36, 5, area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.error))
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let lines = vec![
        Line::from(Span::styled(
            "Delete this transaction?",
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(theme.accent)),
            Span::raw("/"),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" confirm   "),
            Span::styled("n", Style::default().fg(theme.accent)),
            Span::raw("/"),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" cancel"),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}
