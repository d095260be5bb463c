use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Income,
        Expense,
    }

    impl TransactionKind {
        /// Returns the wire string, also used for the `?type=` query filter.
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Income => "income",
                Self::Expense => "expense",
            }
        }
    }

    /// A single income or expense record.
    ///
    /// The id is generated client-side before the create request; the server
    /// owns the record afterwards. Records are never edited, only deleted.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Transaction {
        pub id: Uuid,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub amount: f64,
        pub category: String,
        /// Calendar date, serialized as ISO `YYYY-MM-DD`.
        pub date: NaiveDate,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub note: Option<String>,
    }
}

pub mod summary {
    use super::*;

    /// Server-computed aggregate, re-fetched after every mutation.
    ///
    /// Every map may be sparse; absent periods or categories contribute
    /// nothing. Missing maps deserialize as empty rather than failing.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct Summary {
        #[serde(default)]
        pub total_income: f64,
        #[serde(default)]
        pub total_expense: f64,
        #[serde(default)]
        pub balance: f64,
        /// Expense total per category, in server insertion order.
        #[serde(default)]
        pub category_expense: IndexMap<String, f64>,
        #[serde(default)]
        pub breakdown: Breakdown,
    }

    /// Period × direction aggregation: daily `YYYY-MM-DD`, monthly
    /// `YYYY-MM`, yearly `YYYY`. Zero-padded, so lexicographic order is
    /// chronological order.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct Breakdown {
        #[serde(default)]
        pub daily: TrendMaps,
        #[serde(default)]
        pub monthly: TrendMaps,
        #[serde(default)]
        pub yearly: TrendMaps,
    }

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct TrendMaps {
        #[serde(default)]
        pub income: IndexMap<String, f64>,
        #[serde(default)]
        pub expense: IndexMap<String, f64>,
    }
}

pub mod chat {
    use super::*;
    use crate::transaction::TransactionKind;

    /// Request body for the natural-language add endpoint.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ChatRequest {
        pub text: String,
    }

    /// Success body from `/chat`: the record the server extracted and saved.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ChatReply {
        #[serde(default)]
        pub message: Option<String>,
        pub data: ChatExtraction,
    }

    /// The interpreted transaction. Only kind, amount and category are shown
    /// in the transcript confirmation; the rest rides along.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ChatExtraction {
        #[serde(default)]
        pub id: Option<Uuid>,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub amount: f64,
        pub category: String,
        #[serde(default)]
        pub date: Option<NaiveDate>,
        #[serde(default)]
        pub note: Option<String>,
    }

    /// Failure body: server-reported parse/validation detail.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ApiError {
        pub detail: String,
    }
}

#[cfg(test)]
mod tests {
    use super::chat::ChatReply;
    use super::summary::Summary;
    use super::transaction::{Transaction, TransactionKind};
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn transaction_serializes_with_wire_field_names() {
        let tx = Transaction {
            id: Uuid::nil(),
            kind: TransactionKind::Expense,
            amount: 450.0,
            category: "Food".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 10, 12).unwrap(),
            note: None,
        };

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "expense");
        assert_eq!(value["date"], "2024-10-12");
        assert!(value.get("note").is_none());
    }

    #[test]
    fn transaction_roundtrips_ignoring_extra_server_fields() {
        let raw = r#"{
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "type": "income",
            "amount": 1200.5,
            "category": "Salary",
            "date": "2025-01-31",
            "note": "January",
            "created_at": "2025-01-31T10:00:00"
        }"#;

        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.kind, TransactionKind::Income);
        assert_eq!(tx.amount, 1200.5);
        assert_eq!(tx.note.as_deref(), Some("January"));
    }

    #[test]
    fn summary_defaults_missing_maps_to_empty() {
        let raw = r#"{"total_income": 10.0, "total_expense": 4.0, "balance": 6.0}"#;
        let summary: Summary = serde_json::from_str(raw).unwrap();

        assert!(summary.category_expense.is_empty());
        assert!(summary.breakdown.monthly.income.is_empty());
        assert!(summary.breakdown.daily.expense.is_empty());
    }

    #[test]
    fn category_expense_preserves_insertion_order() {
        let raw = r#"{"category_expense": {"Food": 500, "Salary": 0, "Transport": 120}}"#;
        let summary: Summary = serde_json::from_str(raw).unwrap();
        let labels: Vec<&str> = summary.category_expense.keys().map(String::as_str).collect();
        assert_eq!(labels, ["Food", "Salary", "Transport"]);
    }

    #[test]
    fn chat_reply_parses_extraction() {
        let raw = r#"{
            "message": "Processed successfully",
            "data": {"type": "expense", "amount": 500, "category": "Food", "date": "2025-08-25"}
        }"#;
        let reply: ChatReply = serde_json::from_str(raw).unwrap();
        assert_eq!(reply.data.kind, TransactionKind::Expense);
        assert_eq!(reply.data.amount, 500.0);
        assert_eq!(reply.data.category, "Food");
    }
}
