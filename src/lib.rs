//! # nutriplan
//!
//! Daily meal-plan generation service with a deterministic fallback path.
//!
//! ## Overview
//!
//! The service exposes a single operation: given a JSON request carrying a
//! calorie target, a protein target, disliked foods, and a daily budget, it
//! asks a remote chat-completions planner for a structured one-day meal plan,
//! persists the result, and returns it in a uniform response envelope.
//!
//! The load-bearing contract is the degradation policy: the handler never
//! propagates an error to its caller, always answers with transport status
//! 200, and transparently substitutes a deterministic static plan whenever
//! the remote planner is unreachable, rate limited, or returns garbage.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Request, plan, and envelope data model |
//! | [`handler`] | [`PlanRequestHandler`], the request-handling operation |
//! | [`generator`] | Remote-call-with-fallback policy |
//! | [`openai`] | Chat-completions HTTP client |
//! | [`fallback`] | Deterministic static plan generator |
//! | [`prompt`] | Prompt composition |
//! | [`secrets`] | Secret-lookup collaborator |
//! | [`store`] | Persistence collaborator |
//! | [`config`] | Environment-style configuration |

pub mod config;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod handler;
pub mod openai;
pub mod prompt;
pub mod secrets;
pub mod store;
pub mod types;

// Re-export main types for convenience
pub use generator::{DegradeReason, GeneratorOutcome, GeneratorPolicy};
pub use handler::PlanRequestHandler;
pub use openai::OpenAiClient;
pub use types::{
    GatewayEvent, GatewayResponse, Macros, Meal, Plan, Request, ResponseEnvelope, StoredRecord,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

pub use error::Error;
