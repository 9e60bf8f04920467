//! Secret-lookup collaborator: a key-value store holding API credentials.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretStoreError {
    #[error("parameter not found: {0}")]
    NotFound(String),

    #[error("unauthorized access to parameter: {0}")]
    Unauthorized(String),

    #[error("secret store request failed: {0}")]
    Request(String),
}

/// Lookup of a credential by configured parameter name.
#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn get(&self, name: &str) -> Result<String, SecretStoreError>;
}

#[derive(Debug, Deserialize)]
struct ParameterValue {
    value: String,
}

/// HTTP-backed parameter store client.
///
/// Fetches `GET {base}/parameters/{name}` with optional bearer auth and
/// expects a `{"value": "..."}` body.
pub struct HttpSecretStore {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpSecretStore {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
    ) -> Result<Self, SecretStoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| SecretStoreError::Request(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }
}

#[async_trait]
impl SecretStore for HttpSecretStore {
    async fn get(&self, name: &str) -> Result<String, SecretStoreError> {
        let url = format!("{}/parameters/{}", self.base_url, name.trim_start_matches('/'));
        let mut request = self.http.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SecretStoreError::Request(e.to_string()))?;

        match response.status().as_u16() {
            200 => {
                let parameter: ParameterValue = response
                    .json()
                    .await
                    .map_err(|e| SecretStoreError::Request(e.to_string()))?;
                Ok(parameter.value)
            }
            401 | 403 => Err(SecretStoreError::Unauthorized(name.to_string())),
            404 => Err(SecretStoreError::NotFound(name.to_string())),
            status => Err(SecretStoreError::Request(format!(
                "unexpected status {} for {}",
                status, name
            ))),
        }
    }
}
