//! HTTP front end for the plan handler.
//!
//! Adapts `POST /plan` onto the transport-agnostic event boundary. The
//! handler itself decides every status and body; this binary only moves
//! bytes.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nutriplan::generator::GeneratorPolicy;
use nutriplan::handler::PlanRequestHandler;
use nutriplan::openai::OpenAiClient;
use nutriplan::secrets::HttpSecretStore;
use nutriplan::store::HttpPlanStore;
use nutriplan::types::GatewayEvent;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let secrets_url =
        env::var("SECRETS_URL").unwrap_or_else(|_| "http://localhost:8200".to_string());
    let plans_url = env::var("PLANS_URL").unwrap_or_else(|_| "http://localhost:8300".to_string());
    let secrets_token = env::var("SECRETS_TOKEN").ok();
    let plans_token = env::var("PLANS_TOKEN").ok();

    let client = match env::var("OPENAI_URL") {
        Ok(url) => OpenAiClient::with_url(url)?,
        Err(_) => OpenAiClient::new()?,
    };

    let handler = Arc::new(PlanRequestHandler::new(
        Arc::new(HttpSecretStore::new(secrets_url, secrets_token)?),
        Arc::new(HttpPlanStore::new(plans_url, plans_token)?),
        GeneratorPolicy::new(client),
    ));

    let app = Router::new().route("/plan", post(plan)).with_state(handler);

    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;
    info!(%addr, "nutriplan server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn plan(State(handler): State<Arc<PlanRequestHandler>>, body: String) -> impl IntoResponse {
    let event = GatewayEvent { body: Some(body) };
    let response = handler.handle(event).await;
    (
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::OK),
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
}
