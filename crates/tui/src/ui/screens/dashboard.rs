use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use api_types::{summary::Summary, transaction::TransactionKind};

use crate::{
    app::AppState,
    i18n,
    series::{self, DAILY_WINDOW},
    ui::{
        components::{
            card::{Card, StatCard},
            charts,
            money::{format_taka, styled_amount},
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::for_mode(state.theme);

    let Some(summary) = &state.summary else {
        render_placeholder(frame, area, state, &theme);
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Totals
            Constraint::Length(9),  // Expense breakdown + yearly overview
            Constraint::Length(11), // Monthly overview
            Constraint::Min(7),     // Daily activity
        ])
        .split(area);

    render_totals(frame, layout[0], state, summary, &theme);
    render_breakdown_row(frame, layout[1], state, summary, &theme);
    render_monthly(frame, layout[2], state, summary, &theme);
    render_daily(frame, layout[3], state, summary, &theme);
}

fn render_placeholder(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let title = translated(state, "dashboard_overview");
    let card = Card::new(&title, theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let line = match &state.summary_error {
        Some(error) => Line::from(vec![
            Span::styled(error.clone(), Style::default().fg(theme.error)),
            Span::raw("  Press "),
            Span::styled("r", Style::default().fg(theme.accent)),
            Span::raw(" to retry."),
        ]),
        None => Line::from(vec![
            Span::raw("Loading… press "),
            Span::styled("r", Style::default().fg(theme.accent)),
            Span::raw(" to refresh."),
        ]),
    };
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        inner,
    );
}

fn render_totals(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    summary: &Summary,
    theme: &Theme,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let income_title = translated(state, "total_income");
    StatCard::new(&income_title, format_taka(summary.total_income), theme)
        .value_style(Style::default().fg(theme.positive))
        .render(frame, cols[0]);

    let expense_title = translated(state, "total_expense");
    StatCard::new(&expense_title, format_taka(summary.total_expense), theme)
        .value_style(Style::default().fg(theme.negative))
        .render(frame, cols[1]);

    let balance_title = translated(state, "current_balance");
    StatCard::new(&balance_title, format_taka(summary.balance), theme)
        .value_style(Style::default().fg(theme.accent))
        .render(frame, cols[2]);
}

fn render_breakdown_row(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    summary: &Summary,
    theme: &Theme,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(3, 5), Constraint::Ratio(2, 5)])
        .split(area);

    let categories = series::category_series(&summary.category_expense);
    let title = translated(state, "expense_breakdown");
    let card = Card::new(&title, theme);
    let inner = card.inner(cols[0]);
    card.render_frame(frame, cols[0]);
    charts::render_category_rows(frame, inner, &categories, theme);

    render_yearly(frame, cols[1], state, summary, theme);
}

fn render_yearly(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    summary: &Summary,
    theme: &Theme,
) {
    let title = translated(state, "yearly_overview");
    let card = Card::new(&title, theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let yearly = series::aligned_series(
        &summary.breakdown.yearly.income,
        &summary.breakdown.yearly.expense,
    );
    if yearly.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No data yet", Style::default().fg(theme.dim))),
            inner,
        );
        return;
    }

    let rows: Vec<Line> = yearly
        .labels
        .iter()
        .enumerate()
        .take(inner.height as usize)
        .map(|(index, year)| {
            Line::from(vec![
                Span::styled(format!("{year}  "), Style::default().fg(theme.text)),
                styled_amount(TransactionKind::Income, yearly.income[index], theme),
                Span::raw("  "),
                styled_amount(TransactionKind::Expense, yearly.expense[index], theme),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(rows), inner);
}

fn render_monthly(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    summary: &Summary,
    theme: &Theme,
) {
    let monthly = series::aligned_series(
        &summary.breakdown.monthly.income,
        &summary.breakdown.monthly.expense,
    );

    let title = translated(state, "monthly_overview");
    let card = Card::new(&title, theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);
    charts::render_grouped_bars(frame, inner, &monthly, theme);
}

fn render_daily(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    summary: &Summary,
    theme: &Theme,
) {
    // Trailing two-week window, regardless of how much history exists.
    let daily = series::aligned_series(
        &summary.breakdown.daily.income,
        &summary.breakdown.daily.expense,
    )
    .tail(DAILY_WINDOW);

    let title = translated(state, "daily_activity");
    let card = Card::new(&title, theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);
    charts::render_trend_lines(frame, inner, &daily, theme);
}

fn translated(state: &AppState, key: &str) -> String {
    i18n::lookup(state.language, key)
        .unwrap_or_default()
        .to_string()
}
