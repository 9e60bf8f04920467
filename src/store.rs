//! Persistence collaborator: a put-by-key record store.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::types::StoredRecord;

#[derive(Debug, Error)]
pub enum PlanStoreError {
    #[error("plan store throttled the write: {0}")]
    Throttled(String),

    #[error("plan store rejected the write with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("plan store request failed: {0}")]
    Request(String),
}

/// Unconditional single write per invocation; no read-modify-write.
#[async_trait]
pub trait PlanStore: Send + Sync {
    async fn put(&self, table: &str, record: &StoredRecord) -> Result<(), PlanStoreError>;
}

/// HTTP-backed table store client.
///
/// Writes `PUT {base}/tables/{table}/records/{plan_id}` with the record as
/// the JSON body and optional bearer auth.
pub struct HttpPlanStore {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpPlanStore {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self, PlanStoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| PlanStoreError::Request(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }
}

#[async_trait]
impl PlanStore for HttpPlanStore {
    async fn put(&self, table: &str, record: &StoredRecord) -> Result<(), PlanStoreError> {
        let url = format!(
            "{}/tables/{}/records/{}",
            self.base_url, table, record.plan_id
        );
        let mut request = self.http.put(&url).json(record);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PlanStoreError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        if status.as_u16() == 429 {
            Err(PlanStoreError::Throttled(body))
        } else {
            Err(PlanStoreError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
