//! The single request-handling operation.

use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::config::HandlerConfig;
use crate::generator::{GeneratorOutcome, GeneratorPolicy};
use crate::prompt;
use crate::secrets::SecretStore;
use crate::store::PlanStore;
use crate::types::{GatewayEvent, GatewayResponse, Request, ResponseEnvelope, StoredRecord};

/// Label reported alongside every successful plan. The caller distinguishes
/// a degraded outcome by inspecting the plan's `notes`, not this field.
pub const PLAN_SOURCE: &str = "openai_or_fallback";

/// Handles one transport event end to end: parse, prompt, secret lookup,
/// generation, validation, persistence, response.
///
/// Collaborators are injected at construction and held for the handler's
/// lifetime; nothing is mutated between requests, so one handler instance
/// serves any number of invocations.
pub struct PlanRequestHandler {
    secrets: Arc<dyn SecretStore>,
    store: Arc<dyn PlanStore>,
    generator: GeneratorPolicy,
}

impl PlanRequestHandler {
    pub fn new(
        secrets: Arc<dyn SecretStore>,
        store: Arc<dyn PlanStore>,
        generator: GeneratorPolicy,
    ) -> Self {
        Self {
            secrets,
            store,
            generator,
        }
    }

    /// Handle one event. Never fails: every error from the guarded path is
    /// flattened into an error envelope behind transport status 200.
    pub async fn handle(&self, event: GatewayEvent) -> GatewayResponse {
        let envelope = match self.process(&event).await {
            Ok(envelope) => envelope,
            Err(err) => {
                error!(error = %err, tier = err.label(), "plan request failed");
                ResponseEnvelope::Error {
                    error: err.label().to_string(),
                    detail: err.to_string(),
                }
            }
        };
        GatewayResponse::ok(&envelope)
    }

    async fn process(&self, event: &GatewayEvent) -> crate::Result<ResponseEnvelope> {
        let request = Request::from_body(event.body.as_deref())?;
        info!(
            calories = request.calories,
            protein_g = request.protein_g,
            "building plan"
        );

        let config = HandlerConfig::from_env()?;
        let prompt_text = prompt::compose(&request);

        let api_key = self.secrets.get(&config.secret_param).await?;

        let outcome = self
            .generator
            .generate(
                &api_key,
                prompt::system_prompt(),
                &prompt_text,
                request.calories,
                request.protein_g,
            )
            .await;

        // Remote content must at least parse as JSON before it is persisted
        // or returned; its shape is not checked.
        let plan: serde_json::Value = match outcome {
            GeneratorOutcome::Remote(content) => serde_json::from_str(&content)?,
            GeneratorOutcome::Degraded { plan, .. } => serde_json::to_value(plan)?,
        };

        let plan_id = Uuid::new_v4().to_string();
        let record = StoredRecord {
            plan_id: plan_id.clone(),
            request: serde_json::to_string(&request)?,
            plan: serde_json::to_string(&plan)?,
        };
        self.store.put(&config.table_name, &record).await?;
        info!(plan_id = %plan_id, table = %config.table_name, "plan persisted");

        Ok(ResponseEnvelope::Success {
            plan_id,
            plan,
            source: PLAN_SOURCE.to_string(),
        })
    }
}
