use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    app::AppState,
    i18n,
    ui::{
        components::{card::Card, money::styled_amount},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::for_mode(state.theme);

    let title = i18n::lookup(state.language, "recent_history")
        .unwrap_or_default()
        .to_string();
    let card = Card::new(&title, &theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    render_header(frame, rows[0], state, &theme);
    render_list(frame, rows[1], state, &theme);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let filter = i18n::lookup(state.language, state.filter.label_key()).unwrap_or_default();

    let mut line = vec![
        Span::styled("Filter", Style::default().fg(theme.dim)),
        Span::raw(format!(": {filter}   ")),
        Span::styled("f", Style::default().fg(theme.accent)),
        Span::raw(" cycle"),
    ];

    if let Some(err) = &state.transactions.error {
        line.push(Span::raw("   "));
        line.push(Span::styled(err.clone(), Style::default().fg(theme.error)));
    }

    frame.render_widget(Paragraph::new(Line::from(line)), area);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    // Server order, no client-side sort. An empty list renders nothing.
    let items = state
        .transactions
        .items
        .iter()
        .map(|tx| {
            let note = tx.note.as_deref().unwrap_or("");
            let line = Line::from(vec![
                Span::styled(tx.date.to_string(), Style::default().fg(theme.dim)),
                Span::raw("  "),
                Span::styled(
                    format!("{:<16}", tx.category),
                    Style::default().fg(theme.text),
                ),
                styled_amount(tx.kind, tx.amount, theme),
                Span::raw("  "),
                Span::styled(note.to_string(), Style::default().fg(theme.dim)),
            ]);
            ListItem::new(line)
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    if !items.is_empty() {
        list_state.select(Some(state.transactions.selected));
    }

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}
