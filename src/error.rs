use crate::secrets::SecretStoreError;
use crate::store::PlanStoreError;
use thiserror::Error;

/// Unified error type for the service.
///
/// This aggregates the failures that can surface from the guarded request
/// path. Two tiers exist for reporting: provider/infrastructure errors
/// (secret lookup, persistence) and everything else. Remote generation
/// errors are a lower tier handled entirely inside
/// [`GeneratorPolicy`](crate::generator::GeneratorPolicy) and never appear
/// here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("secret store error: {0}")]
    Secrets(#[from] SecretStoreError),

    #[error("plan store error: {0}")]
    Store(#[from] PlanStoreError),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error originated in an infrastructure collaborator
    /// (secret lookup or persistence) rather than in the handler itself.
    pub fn is_provider(&self) -> bool {
        matches!(self, Error::Secrets(_) | Error::Store(_))
    }

    /// Stable label reported in the error envelope's `error` field.
    pub fn label(&self) -> &'static str {
        if self.is_provider() {
            "provider_error"
        } else {
            "internal_error"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_carry_the_provider_label() {
        let err = Error::Secrets(SecretStoreError::NotFound("param".to_string()));
        assert!(err.is_provider());
        assert_eq!(err.label(), "provider_error");

        let err = Error::Store(PlanStoreError::Throttled("slow down".to_string()));
        assert_eq!(err.label(), "provider_error");
    }

    #[test]
    fn other_errors_are_internal() {
        let err = Error::Configuration("OPENAI_PARAM is not set".to_string());
        assert!(!err.is_provider());
        assert_eq!(err.label(), "internal_error");

        let parse = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(Error::Serialization(parse).label(), "internal_error");
    }
}
