use api_types::transaction::TransactionKind;
use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// Formats an amount the way the server sends it: whole numbers without a
/// decimal point, fractions as-is.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    }
}

/// Taka-prefixed amount, e.g. `৳500`.
#[must_use]
pub fn format_taka(amount: f64) -> String {
    format!("৳{}", format_amount(amount))
}

/// Signed, colored amount for a transaction row: income green with `+`,
/// expense red with `-`.
#[must_use]
pub fn styled_amount(kind: TransactionKind, amount: f64, theme: &Theme) -> Span<'static> {
    let (sign, color) = match kind {
        TransactionKind::Income => ("+", theme.positive),
        TransactionKind::Expense => ("-", theme.negative),
    };
    Span::styled(
        format!("{sign}{}", format_taka(amount)),
        Style::default().fg(color),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_drop_the_decimal_point() {
        assert_eq!(format_amount(500.0), "500");
        assert_eq!(format_taka(500.0), "৳500");
    }

    #[test]
    fn fractional_amounts_keep_their_digits() {
        assert_eq!(format_amount(500.5), "500.5");
        assert_eq!(format_amount(12.25), "12.25");
    }

    #[test]
    fn signed_rendering_by_kind() {
        let theme = Theme::dark();
        assert_eq!(
            styled_amount(TransactionKind::Income, 100.0, &theme).content,
            "+৳100"
        );
        assert_eq!(
            styled_amount(TransactionKind::Expense, 42.5, &theme).content,
            "-৳42.5"
        );
    }
}
