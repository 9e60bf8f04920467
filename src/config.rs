//! Environment-style configuration.

use std::env;

/// Variable naming the secret parameter that holds the planner API key.
pub const OPENAI_PARAM_VAR: &str = "OPENAI_PARAM";

/// Variable naming the persistence table.
pub const TABLE_NAME_VAR: &str = "TABLE_NAME";

/// Per-request handler configuration.
///
/// Resolved inside the guarded request path: a missing variable is a
/// deployment error that surfaces as an `internal_error` envelope, not a
/// crash.
#[derive(Debug, Clone)]
pub struct HandlerConfig {
    pub secret_param: String,
    pub table_name: String,
}

impl HandlerConfig {
    pub fn from_env() -> crate::Result<Self> {
        Ok(Self {
            secret_param: require(OPENAI_PARAM_VAR)?,
            table_name: require(TABLE_NAME_VAR)?,
        })
    }
}

fn require(name: &str) -> crate::Result<String> {
    env::var(name).map_err(|_| crate::Error::Configuration(format!("{} is not set", name)))
}
