use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use api_types::transaction::TransactionKind;

use crate::{
    app::{AddField, AppState},
    i18n,
    ui::{components::card::Card, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::for_mode(state.theme);

    let title = i18n::lookup(state.language, "add_transaction")
        .unwrap_or_default()
        .to_string();
    let card = Card::new(&title, &theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Kind selector
            Constraint::Length(2), // Amount
            Constraint::Length(2), // Category
            Constraint::Length(2), // Date
            Constraint::Length(2), // Note
            Constraint::Length(1), // Submit hint
            Constraint::Min(0),    // Error message
        ])
        .margin(1)
        .split(inner);

    let form = &state.add_form;

    render_kind_row(frame, rows[0], state, &theme);
    render_input_row(
        frame,
        rows[1],
        translated(state, "placeholder_amount"),
        &form.amount,
        form.focus == AddField::Amount,
        &theme,
    );
    render_input_row(
        frame,
        rows[2],
        translated(state, "placeholder_category"),
        &form.category,
        form.focus == AddField::Category,
        &theme,
    );
    render_input_row(
        frame,
        rows[3],
        "YYYY-MM-DD".to_string(),
        &form.date,
        form.focus == AddField::Date,
        &theme,
    );
    render_input_row(
        frame,
        rows[4],
        translated(state, "placeholder_note"),
        &form.note,
        form.focus == AddField::Note,
        &theme,
    );

    let submit = translated(state, "btn_add_transaction");
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(format!(" {submit}   ")),
            Span::styled("Tab", Style::default().fg(theme.accent)),
            Span::raw(" next field"),
        ])),
        rows[5],
    );

    if let Some(message) = &form.message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.clone(),
                Style::default().fg(theme.error),
            )),
            rows[6],
        );
    }
}

fn render_kind_row(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let form = &state.add_form;
    let focused = form.focus == AddField::Kind;

    let option_style = |selected: bool| {
        if selected {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim)
        }
    };

    let marker = if focused { "│ " } else { "  " };
    let expense = translated(state, "opt_expense");
    let income = translated(state, "opt_income");

    let line = Line::from(vec![
        Span::styled(marker, Style::default().fg(theme.accent)),
        Span::styled(
            format!("[{expense}]"),
            option_style(form.kind == TransactionKind::Expense),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{income}]"),
            option_style(form.kind == TransactionKind::Income),
        ),
        Span::styled("   e/i or ◂▸", Style::default().fg(theme.dim)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Single-line input: placeholder when empty, cursor bar when focused.
fn render_input_row(
    frame: &mut Frame<'_>,
    area: Rect,
    placeholder: String,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };

    let (display, style) = if value.is_empty() && !focused {
        (placeholder, Style::default().fg(theme.dim))
    } else {
        let style = if focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text)
        };
        (format!("{value}{cursor}"), style)
    };

    frame.render_widget(Paragraph::new(Span::styled(display, style)), area);
}

fn translated(state: &AppState, key: &str) -> String {
    i18n::lookup(state.language, key)
        .unwrap_or_default()
        .to_string()
}
