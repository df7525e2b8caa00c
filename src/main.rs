//! PPL SOAP Translator Server
//!
//! HTTP front end that turns legacy PPL SOAP/XML requests into REST call
//! descriptors

use anyhow::{Context, Result};
use ppl_soap_translator::config::settings::LoggingConfig;
use ppl_soap_translator::{create_router, AppConfig, Settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let mut settings = Settings::new().context("Failed to load server settings")?;

    // Initialize logging
    init_logging(&settings.logging)?;

    // Optional file overrides
    if let Some(file_config) =
        AppConfig::load_default().context("Failed to load configuration file")?
    {
        file_config.apply_to(&mut settings);
        settings
            .validate()
            .context("Invalid configuration after applying configuration file")?;
        info!("Configuration file applied");
    }
    info!("Server settings loaded");

    let app = create_router(settings.clone())?;

    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("PPL SOAP translator started on {}", addr);
    info!("Health check: http://{}/health", addr);
    info!("Translate endpoint: http://{}/v1/translate", addr);
    info!("REST base URL: {}", settings.translator.rest_base_url);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

    Ok(())
}

/// Initialize logging system
fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&logging.level)
        .with_context(|| format!("Invalid log level: {}", logging.level))?;

    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if logging.format == "json" {
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .finish(),
        )
    } else {
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Logging system initialized");
    Ok(())
}
