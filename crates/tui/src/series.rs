//! Reshapes the summary's sparse date-keyed maps into aligned label/value
//! arrays for the charts. This is the only data transformation done on the
//! client; everything else arrives pre-aggregated.

use indexmap::IndexMap;

/// Trailing window for the daily trend: the dashboard never shows more than
/// two weeks of daily history.
pub const DAILY_WINDOW: usize = 14;

/// Aligned two-series chart data. `income[i]` and `expense[i]` belong to
/// `labels[i]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub income: Vec<f64>,
    pub expense: Vec<f64>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Keeps only the last `n` labels. Labels are zero-padded ISO periods,
    /// so the lexicographically last ones are the chronologically latest.
    pub fn tail(mut self, n: usize) -> Self {
        let len = self.labels.len();
        if len > n {
            self.labels.drain(..len - n);
            self.income.drain(..len - n);
            self.expense.drain(..len - n);
        }
        self
    }

    /// Largest value across both series, for chart axis bounds.
    pub fn max_value(&self) -> f64 {
        self.income
            .iter()
            .chain(self.expense.iter())
            .copied()
            .fold(0.0, f64::max)
    }
}

/// Aligns two sparse period maps onto one label axis.
///
/// The axis is the deduplicated union of both key sets, sorted
/// lexicographically; a period present in only one map contributes zero to
/// the other series.
pub fn aligned_series(
    income: &IndexMap<String, f64>,
    expense: &IndexMap<String, f64>,
) -> TrendSeries {
    let mut labels: Vec<String> = income.keys().chain(expense.keys()).cloned().collect();
    labels.sort();
    labels.dedup();

    let income_values = labels
        .iter()
        .map(|label| income.get(label).copied().unwrap_or(0.0))
        .collect();
    let expense_values = labels
        .iter()
        .map(|label| expense.get(label).copied().unwrap_or(0.0))
        .collect();

    TrendSeries {
        labels,
        income: income_values,
        expense: expense_values,
    }
}

/// Category labels and totals, preserving the server's insertion order.
pub fn category_series(category_expense: &IndexMap<String, f64>) -> Vec<(String, f64)> {
    category_expense
        .iter()
        .map(|(label, total)| (label.clone(), *total))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, f64)]) -> IndexMap<String, f64> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn labels_are_the_deduplicated_union_of_both_maps() {
        let income = map(&[("2025-01", 100.0), ("2025-03", 50.0)]);
        let expense = map(&[("2025-02", 30.0), ("2025-03", 20.0)]);

        let series = aligned_series(&income, &expense);
        assert_eq!(series.labels, ["2025-01", "2025-02", "2025-03"]);
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn one_sided_keys_zero_fill_the_other_series() {
        let income = map(&[("2025-01", 100.0)]);
        let expense = map(&[("2025-02", 30.0)]);

        let series = aligned_series(&income, &expense);
        assert_eq!(series.income, [100.0, 0.0]);
        assert_eq!(series.expense, [0.0, 30.0]);
    }

    #[test]
    fn sort_is_lexicographic_hence_chronological() {
        // Keys arrive in server map order, not sorted.
        let income = map(&[("2025-12", 1.0), ("2025-02", 2.0), ("2025-10", 3.0)]);
        let expense = map(&[]);

        let series = aligned_series(&income, &expense);
        assert_eq!(series.labels, ["2025-02", "2025-10", "2025-12"]);
    }

    #[test]
    fn empty_maps_yield_an_empty_series() {
        let series = aligned_series(&map(&[]), &map(&[]));
        assert!(series.is_empty());
        assert_eq!(series.max_value(), 0.0);
    }

    #[test]
    fn daily_window_keeps_the_latest_fourteen_labels() {
        let entries: Vec<(String, f64)> = (1..=20)
            .map(|day| (format!("2025-08-{day:02}"), day as f64))
            .collect();
        let income: IndexMap<String, f64> = entries.into_iter().collect();

        let series = aligned_series(&income, &map(&[])).tail(DAILY_WINDOW);
        assert_eq!(series.len(), DAILY_WINDOW);
        assert_eq!(series.labels.first().map(String::as_str), Some("2025-08-07"));
        assert_eq!(series.labels.last().map(String::as_str), Some("2025-08-20"));
        assert_eq!(series.income.first(), Some(&7.0));
    }

    #[test]
    fn tail_is_a_no_op_when_shorter_than_the_window() {
        let income = map(&[("2025-08-24", 5.0), ("2025-08-25", 6.0)]);
        let series = aligned_series(&income, &map(&[])).tail(DAILY_WINDOW);
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn category_series_preserves_insertion_order() {
        let categories = map(&[("Food", 500.0), ("Salary", 0.0)]);
        let series = category_series(&categories);
        let labels: Vec<&str> = series.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(labels, ["Food", "Salary"]);
        assert_eq!(series[0].1, 500.0);
    }

    #[test]
    fn max_value_spans_both_series() {
        let income = map(&[("2025-01", 10.0)]);
        let expense = map(&[("2025-01", 40.0)]);
        let series = aligned_series(&income, &expense);
        assert_eq!(series.max_value(), 40.0);
    }
}
