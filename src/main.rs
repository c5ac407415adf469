use std::sync::Arc;

use mailsift::config::Config;
use mailsift::engine::DecisionEngine;
use mailsift::llm::{LlmConfig, create_provider};
use mailsift::server::app_routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install rustls crypto provider before any TLS usage
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env()?;

    // The remote classifier is optional: no credential (or a client that
    // fails to build) leaves the engine in keyword-fallback mode.
    let llm = match &config.api_key {
        Some(api_key) => {
            let llm_config = LlmConfig {
                api_key: api_key.clone(),
                model: config.model.clone(),
                base_url: config.base_url.clone(),
            };
            match create_provider(&llm_config) {
                Ok(provider) => Some(provider),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Remote provider construction failed — keyword-fallback mode"
                    );
                    None
                }
            }
        }
        None => None,
    };

    let engine = Arc::new(DecisionEngine::new(llm, config.arbitration_policy()));

    eprintln!("📬 Mailsift v{}", env!("CARGO_PKG_VERSION"));
    eprintln!(
        "   Mode: {}",
        if engine.remote_available() {
            format!("hybrid (model: {})", config.model)
        } else {
            "keyword-fallback only".to_string()
        }
    );
    eprintln!("   API: http://0.0.0.0:{}/classify", config.port);
    eprintln!("   UI:  http://0.0.0.0:{}/", config.port);

    let app = app_routes(Arc::clone(&engine), &config.static_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "HTTP server started");
    axum::serve(listener, app).await?;

    Ok(())
}
