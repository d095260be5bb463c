use api_types::{
    chat::{ApiError, ChatReply, ChatRequest},
    summary::Summary,
    transaction::{Transaction, TransactionKind},
};
use chrono::NaiveDate;
use reqwest::{Method, Url};
use uuid::Uuid;

use crate::error::{AppError, Result};

/// Header carrying the per-session pseudo-user id. Injected by the client on
/// every request; callers cannot override it.
const USER_ID_HEADER: &str = "X-User-ID";

#[derive(Debug)]
pub enum ClientError {
    /// Application-level rejection with a server-supplied detail message
    /// (the `/chat` parse/validation errors).
    Rejected(String),
    /// Non-success status without a usable error body.
    Status(u16),
    Transport(reqwest::Error),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(detail) => write!(f, "{detail}"),
            Self::Status(code) => write!(f, "server returned status {code}"),
            Self::Transport(err) => write!(f, "server unreachable: {err}"),
        }
    }
}

/// Thin wrapper over the bookkeeping service.
///
/// Intentionally minimal: no retries, no timeouts, no backoff. Any failure
/// propagates to the caller, which decides how to surface it.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
    user_id: Uuid,
}

impl Client {
    pub fn new(base_url: &str, user_id: Uuid) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| AppError::Terminal(format!("invalid base_url: {err}")))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
            user_id,
        })
    }

    pub async fn summary(&self) -> std::result::Result<Summary, ClientError> {
        let endpoint = self.endpoint("api/summary")?;
        let res = self
            .request(Method::GET, endpoint)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if res.status().is_success() {
            return res.json::<Summary>().await.map_err(ClientError::Transport);
        }
        Err(Self::rejection(res).await)
    }

    /// Lists transactions in server order (date-descending). The optional
    /// date bounds mirror the server's `start_date`/`end_date` filters.
    pub async fn transactions(
        &self,
        kind: Option<TransactionKind>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> std::result::Result<Vec<Transaction>, ClientError> {
        let endpoint = self.transactions_endpoint(kind, start_date, end_date)?;
        let res = self
            .request(Method::GET, endpoint)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if res.status().is_success() {
            return res
                .json::<Vec<Transaction>>()
                .await
                .map_err(ClientError::Transport);
        }
        Err(Self::rejection(res).await)
    }

    /// Creates a transaction. The id is client-supplied; the response body
    /// is ignored, only the status matters.
    pub async fn create_transaction(
        &self,
        transaction: &Transaction,
    ) -> std::result::Result<(), ClientError> {
        let endpoint = self.endpoint("api/transactions")?;
        let res = self
            .request(Method::POST, endpoint)
            .json(transaction)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if res.status().is_success() {
            return Ok(());
        }
        Err(Self::rejection(res).await)
    }

    /// Deletes by id. Status only, body ignored.
    pub async fn delete_transaction(&self, id: Uuid) -> std::result::Result<(), ClientError> {
        let endpoint = self.endpoint(&format!("api/transactions/{id}"))?;
        let res = self
            .request(Method::DELETE, endpoint)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if res.status().is_success() {
            return Ok(());
        }
        Err(Self::rejection(res).await)
    }

    /// Sends raw user text for natural-language extraction. On success the
    /// server has already saved the interpreted transaction.
    pub async fn chat(&self, text: &str) -> std::result::Result<ChatReply, ClientError> {
        let endpoint = self.endpoint("api/chat")?;
        let payload = ChatRequest {
            text: text.to_string(),
        };
        let res = self
            .request(Method::POST, endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if res.status().is_success() {
            return res.json::<ChatReply>().await.map_err(ClientError::Transport);
        }
        Err(Self::rejection(res).await)
    }

    fn request(&self, method: Method, endpoint: Url) -> reqwest::RequestBuilder {
        self.http
            .request(method, endpoint)
            .header(USER_ID_HEADER, self.user_id.to_string())
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Rejected(format!("invalid base_url: {err}")))
    }

    fn transactions_endpoint(
        &self,
        kind: Option<TransactionKind>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> std::result::Result<Url, ClientError> {
        let mut endpoint = self.endpoint("api/transactions")?;
        {
            let mut query = endpoint.query_pairs_mut();
            if let Some(kind) = kind {
                query.append_pair("type", kind.as_str());
            }
            if let Some(start) = start_date {
                query.append_pair("start_date", &start.to_string());
            }
            if let Some(end) = end_date {
                query.append_pair("end_date", &end.to_string());
            }
        }
        // An empty serializer leaves a dangling `?` behind.
        if endpoint.query() == Some("") {
            endpoint.set_query(None);
        }
        Ok(endpoint)
    }

    async fn rejection(res: reqwest::Response) -> ClientError {
        let status = res.status().as_u16();
        match res.json::<ApiError>().await {
            Ok(body) => ClientError::Rejected(body.detail),
            Err(_) => ClientError::Status(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new("http://127.0.0.1:8000/", Uuid::nil()).unwrap()
    }

    #[test]
    fn transactions_endpoint_without_filter_has_no_query() {
        let url = client().transactions_endpoint(None, None, None).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/api/transactions");
    }

    #[test]
    fn transactions_endpoint_carries_type_filter() {
        let url = client()
            .transactions_endpoint(Some(TransactionKind::Income), None, None)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/api/transactions?type=income"
        );
    }

    #[test]
    fn transactions_endpoint_carries_date_bounds() {
        let start = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
        let url = client()
            .transactions_endpoint(Some(TransactionKind::Expense), Some(start), Some(end))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/api/transactions?type=expense&start_date=2025-08-01&end_date=2025-08-25"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(Client::new("not a url", Uuid::nil()).is_err());
    }
}
