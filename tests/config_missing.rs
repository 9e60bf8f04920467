//! Missing deployment configuration must surface as an internal error in
//! the envelope, never as a crash.
//!
//! This lives in its own test binary so removing the variables cannot race
//! with tests that set them.

use std::sync::Arc;

use async_trait::async_trait;

use nutriplan::generator::GeneratorPolicy;
use nutriplan::handler::PlanRequestHandler;
use nutriplan::openai::OpenAiClient;
use nutriplan::secrets::{SecretStore, SecretStoreError};
use nutriplan::store::{PlanStore, PlanStoreError};
use nutriplan::types::{GatewayEvent, StoredRecord};

struct FakeSecrets;

#[async_trait]
impl SecretStore for FakeSecrets {
    async fn get(&self, _name: &str) -> Result<String, SecretStoreError> {
        Ok("test-api-key".to_string())
    }
}

struct RejectingStore;

#[async_trait]
impl PlanStore for RejectingStore {
    async fn put(&self, _table: &str, _record: &StoredRecord) -> Result<(), PlanStoreError> {
        panic!("nothing should be persisted without configuration");
    }
}

#[tokio::test]
async fn missing_config_surfaces_as_internal_error() {
    std::env::remove_var("OPENAI_PARAM");
    std::env::remove_var("TABLE_NAME");

    let handler = PlanRequestHandler::new(
        Arc::new(FakeSecrets),
        Arc::new(RejectingStore),
        GeneratorPolicy::new(OpenAiClient::with_url("http://127.0.0.1:9").unwrap()),
    );

    let response = handler
        .handle(GatewayEvent {
            body: Some(r#"{"calories": 2000}"#.to_string()),
        })
        .await;

    assert_eq!(response.status_code, 200);
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["error"], "internal_error");
    assert!(body["detail"].as_str().unwrap().contains("OPENAI_PARAM"));
}
