mod error;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use llm::LlmChat;
use llm::types::SamplingParams;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
        .map_or(Ok(state::DEFAULT_MAX_UPLOAD_BYTES), |raw| raw.parse())
        .expect("invalid MAX_UPLOAD_BYTES");

    // Initialize LLM client (non-fatal: chat answers 503 if config missing).
    let (llm, sampling) = match llm::config::LlmConfig::from_env() {
        Ok(config) => {
            let client = llm::LlmClient::from_config(&config).expect("LLM http client build failed");
            tracing::info!(model = client.model(), base_url = %config.base_url, "LLM client initialized");
            (Some(Arc::new(client) as Arc<dyn LlmChat>), config.sampling)
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured, chat disabled");
            (None, SamplingParams::default())
        }
    };

    let state = state::AppState::new(llm, sampling).with_max_upload_bytes(max_upload_bytes);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "chat gateway listening");
    axum::serve(listener, app).await.expect("server failed");
}
