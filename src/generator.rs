//! Remote-call-with-fallback policy.
//!
//! Exactly one attempt against the remote planner. Every transport failure
//! is swallowed, logged as a warning, and replaced with the deterministic
//! fallback plan; nothing in this module ever fails.

use tracing::warn;

use crate::fallback::fallback_plan;
use crate::openai::{GenerationError, OpenAiClient};
use crate::types::Plan;

/// Why a fallback plan was substituted for remote content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradeReason {
    /// The endpoint answered 429.
    RateLimited,
    /// Any other non-success status.
    BadStatus(u16),
    /// The attempt hit the client timeout.
    Timeout,
    /// Connection-level failure.
    Network,
    /// A 2xx answer that did not carry the expected response shape.
    MalformedResponse,
}

impl DegradeReason {
    fn classify(err: &GenerationError) -> Self {
        match err {
            GenerationError::Status { status: 429, .. } => DegradeReason::RateLimited,
            GenerationError::Status { status, .. } => DegradeReason::BadStatus(*status),
            GenerationError::Http(e) if e.is_timeout() => DegradeReason::Timeout,
            GenerationError::Http(_) => DegradeReason::Network,
            GenerationError::MalformedResponse(_) => DegradeReason::MalformedResponse,
        }
    }
}

/// Outcome of one generation attempt. Both arms carry usable plan content;
/// the tag records whether the remote call succeeded and, if not, why.
#[derive(Debug)]
pub enum GeneratorOutcome {
    /// Content returned by the remote planner, verbatim.
    Remote(String),
    /// Deterministic fallback substituted after a swallowed failure.
    Degraded { reason: DegradeReason, plan: Plan },
}

pub struct GeneratorPolicy {
    client: OpenAiClient,
}

impl GeneratorPolicy {
    pub fn new(client: OpenAiClient) -> Self {
        Self { client }
    }

    /// Attempt exactly one remote call; no retry, no backoff. The two
    /// numeric targets scale the fallback when the call fails.
    pub async fn generate(
        &self,
        api_key: &str,
        system: &str,
        prompt: &str,
        calories: i64,
        protein_g: i64,
    ) -> GeneratorOutcome {
        match self.client.chat_json(api_key, system, prompt).await {
            Ok(content) => GeneratorOutcome::Remote(content),
            Err(err) => {
                let reason = DegradeReason::classify(&err);
                warn!(?reason, error = %err, "remote generation failed, using fallback plan");
                GeneratorOutcome::Degraded {
                    reason,
                    plan: fallback_plan(calories, protein_g),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_status_classifies_separately() {
        let err = GenerationError::Status {
            status: 429,
            body: "slow down".to_string(),
        };
        assert_eq!(DegradeReason::classify(&err), DegradeReason::RateLimited);
    }

    #[test]
    fn other_statuses_keep_their_code() {
        let err = GenerationError::Status {
            status: 503,
            body: String::new(),
        };
        assert_eq!(DegradeReason::classify(&err), DegradeReason::BadStatus(503));
    }

    #[test]
    fn shape_errors_classify_as_malformed() {
        let err = GenerationError::MalformedResponse("no choices".to_string());
        assert_eq!(
            DegradeReason::classify(&err),
            DegradeReason::MalformedResponse
        );
    }
}
