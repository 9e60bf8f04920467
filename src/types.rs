//! Data model: requests, plans, stored records, and the transport envelope.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound plan request. Missing fields take the documented defaults; a body
/// that is not valid JSON is treated as an empty object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    #[serde(default = "default_calories")]
    pub calories: i64,
    #[serde(default = "default_protein_g")]
    pub protein_g: i64,
    #[serde(default = "default_dislikes")]
    pub dislikes: Vec<String>,
    #[serde(default = "default_budget")]
    pub budget_per_day_usd: f64,
}

fn default_calories() -> i64 {
    2000
}

fn default_protein_g() -> i64 {
    180
}

fn default_dislikes() -> Vec<String> {
    vec!["pickles".to_string()]
}

fn default_budget() -> f64 {
    8.0
}

impl Default for Request {
    fn default() -> Self {
        Self {
            calories: default_calories(),
            protein_g: default_protein_g(),
            dislikes: default_dislikes(),
            budget_per_day_usd: default_budget(),
        }
    }
}

impl Request {
    /// Parse a transport body into a request.
    ///
    /// A missing or syntactically malformed body is treated as an empty
    /// object, so every field defaults. A body that parses as JSON but
    /// carries wrong-typed fields is an error and surfaces through the
    /// internal error path.
    pub fn from_body(body: Option<&str>) -> crate::Result<Self> {
        let raw = body.unwrap_or("");
        let value: serde_json::Value =
            serde_json::from_str(raw).unwrap_or_else(|_| serde_json::json!({}));
        Ok(serde_json::from_value(value)?)
    }
}

/// Calorie/protein/carb/fat breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub kcal: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

/// One meal within a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub ingredients: Vec<String>,
    pub macros: Macros,
    pub prep: String,
}

/// Structured daily meal recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub meals: Vec<Meal>,
    pub totals: Macros,
    pub shopping_list: Vec<String>,
    pub notes: String,
}

/// Record written once per invocation, never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub plan_id: String,
    pub request: String,
    pub plan: String,
}

/// Body of every response, success or failure. Both arms travel behind
/// transport status 200; the caller distinguishes them by the `error` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseEnvelope {
    Success {
        plan_id: String,
        // Remote content is only checked for JSON well-formedness, not for
        // plan shape, so the success arm carries an untyped value.
        plan: serde_json::Value,
        source: String,
    },
    Error {
        error: String,
        detail: String,
    },
}

/// Transport event: a JSON body, or nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayEvent {
    pub body: Option<String>,
}

/// Transport response. The status is always 200 so an HTTP gateway in front
/// of the handler never masks the body, error envelopes included.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl GatewayResponse {
    pub fn ok(envelope: &ResponseEnvelope) -> Self {
        let body = serde_json::to_string(envelope).unwrap_or_else(|_| {
            r#"{"error":"internal_error","detail":"response serialization failed"}"#.to_string()
        });
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status_code: 200,
            headers,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_body_takes_all_defaults() {
        let request = Request::from_body(None).unwrap();
        assert_eq!(request.calories, 2000);
        assert_eq!(request.protein_g, 180);
        assert_eq!(request.dislikes, vec!["pickles".to_string()]);
        assert_eq!(request.budget_per_day_usd, 8.0);
    }

    #[test]
    fn malformed_body_is_treated_as_empty_object() {
        let request = Request::from_body(Some("{{not json")).unwrap();
        assert_eq!(request.calories, 2000);
    }

    #[test]
    fn partial_body_keeps_defaults_for_missing_fields() {
        let request = Request::from_body(Some(r#"{"calories": 3000}"#)).unwrap();
        assert_eq!(request.calories, 3000);
        assert_eq!(request.protein_g, 180);
    }

    #[test]
    fn wrong_typed_field_is_an_error() {
        let result = Request::from_body(Some(r#"{"calories": "lots"}"#));
        assert!(result.is_err());
    }

    #[test]
    fn success_envelope_serializes_flat() {
        let envelope = ResponseEnvelope::Success {
            plan_id: "abc".to_string(),
            plan: serde_json::json!({"notes": "n"}),
            source: "openai_or_fallback".to_string(),
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["plan_id"], "abc");
        assert_eq!(value["source"], "openai_or_fallback");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn error_envelope_serializes_flat() {
        let envelope = ResponseEnvelope::Error {
            error: "internal_error".to_string(),
            detail: "boom".to_string(),
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["error"], "internal_error");
        assert_eq!(value["detail"], "boom");
    }

    #[test]
    fn gateway_response_is_always_200_json() {
        let envelope = ResponseEnvelope::Error {
            error: "provider_error".to_string(),
            detail: "throttled".to_string(),
        };
        let response = GatewayResponse::ok(&envelope);
        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("statusCode").is_some());
    }
}
