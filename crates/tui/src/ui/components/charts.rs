use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph},
};

use crate::series::TrendSeries;
use crate::ui::components::money::format_taka;
use crate::ui::theme::Theme;

/// Grouped income/expense bars, one group per period label (the monthly
/// overview). The chart is rebuilt from the series every frame.
pub fn render_grouped_bars(frame: &mut Frame<'_>, area: Rect, series: &TrendSeries, theme: &Theme) {
    if series.is_empty() {
        render_empty(frame, area, theme);
        return;
    }

    let mut chart = BarChart::default()
        .bar_width(4)
        .bar_gap(0)
        .group_gap(2)
        .label_style(Style::default().fg(theme.dim))
        .value_style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD));

    for (index, label) in series.labels.iter().enumerate() {
        let income = series.income[index].max(0.0).round() as u64;
        let expense = series.expense[index].max(0.0).round() as u64;
        let group = BarGroup::default()
            .label(Line::from(short_period(label)))
            .bars(&[
                Bar::default()
                    .value(income)
                    .style(Style::default().fg(theme.positive)),
                Bar::default()
                    .value(expense)
                    .style(Style::default().fg(theme.negative)),
            ]);
        chart = chart.data(group);
    }

    frame.render_widget(chart, area);
}

/// Dual-line income/expense trend (the daily activity view).
pub fn render_trend_lines(frame: &mut Frame<'_>, area: Rect, series: &TrendSeries, theme: &Theme) {
    if series.is_empty() {
        render_empty(frame, area, theme);
        return;
    }

    let income_points: Vec<(f64, f64)> = series
        .income
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect();
    let expense_points: Vec<(f64, f64)> = series
        .expense
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("Income")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.positive))
            .data(&income_points),
        Dataset::default()
            .name("Expense")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.negative))
            .data(&expense_points),
    ];

    let max_x = (series.len().saturating_sub(1)) as f64;
    let max_y = series.max_value().max(1.0);

    let x_labels = vec![
        Span::styled(
            series.labels.first().cloned().unwrap_or_default(),
            Style::default().fg(theme.dim),
        ),
        Span::styled(
            series.labels.last().cloned().unwrap_or_default(),
            Style::default().fg(theme.dim),
        ),
    ];
    let y_labels = vec![
        Span::styled("0", Style::default().fg(theme.dim)),
        Span::styled(format_taka(max_y), Style::default().fg(theme.dim)),
    ];

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme.border))
                .bounds([0.0, max_x.max(1.0)])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme.border))
                .bounds([0.0, max_y])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Proportional category rows: label, total and a percentage bar. The
/// terminal stand-in for the doughnut, with labels kept in server insertion
/// order.
pub fn render_category_rows(
    frame: &mut Frame<'_>,
    area: Rect,
    categories: &[(String, f64)],
    theme: &Theme,
) {
    if categories.is_empty() {
        render_empty(frame, area, theme);
        return;
    }

    let total: f64 = categories.iter().map(|(_, v)| *v).sum();

    let rows: Vec<Line> = categories
        .iter()
        .take(area.height as usize)
        .map(|(label, value)| {
            let pct = if total > 0.0 {
                ((*value / total) * 100.0).round() as u16
            } else {
                0
            };

            let bar_width = 16usize;
            let filled = ((pct as usize * bar_width) / 100).min(bar_width);
            let empty = bar_width.saturating_sub(filled);
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(empty));

            Line::from(vec![
                Span::styled(
                    format!("{:<14}", truncate(label, 13)),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("{:>10}", format_taka(*value)),
                    Style::default().fg(theme.negative),
                ),
                Span::raw("  "),
                Span::styled(bar, Style::default().fg(theme.negative)),
                Span::styled(format!(" {pct:>3}%"), Style::default().fg(theme.dim)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(rows), area);
}

fn render_empty(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Span::styled("No data yet", Style::default().fg(theme.dim))),
        area,
    );
}

/// Bars get narrow labels: `YYYY-MM` becomes `MM`, `YYYY-MM-DD` becomes
/// `DD`, bare years stay as-is.
fn short_period(label: &str) -> String {
    match label.rsplit_once('-') {
        Some((_, tail)) => tail.to_string(),
        None => label.to_string(),
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_period_keeps_the_trailing_component() {
        assert_eq!(short_period("2025-08"), "08");
        assert_eq!(short_period("2025-08-25"), "25");
        assert_eq!(short_period("2025"), "2025");
    }

    #[test]
    fn truncate_is_safe_for_multibyte_labels() {
        assert_eq!(truncate("খাবার", 13), "খাবার");
        assert_eq!(truncate("abcdefghijklmnop", 5), "abcd…");
    }
}
