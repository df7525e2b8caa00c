//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod health;
pub mod translate;

use crate::config::Settings;
use crate::middleware::request_logging_middleware;
use crate::services::RequestTranslator;
use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit, http::HeaderValue, middleware, routing::get, routing::post, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub translator: RequestTranslator,
}

/// Create application router
pub fn create_router(settings: Settings) -> Result<Router> {
    let translator = RequestTranslator::new(settings.translator.rest_base_url.clone());

    let app_state = Arc::new(AppState {
        settings: settings.clone(),
        translator,
    });

    let router = Router::new()
        .route(
            "/v1/translate",
            post(translate::handle_translate)
                .layer(DefaultBodyLimit::max(settings.request.max_input_size)),
        )
        .route("/v1/operations", get(translate::list_operations))
        .route("/health", get(health::health_check))
        .with_state(app_state);

    let router = if settings.security.cors_enabled {
        router.layer(build_cors_layer(&settings.security.allowed_origins)?)
    } else {
        router
    };

    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_logging_middleware));

    Ok(router.layer(middleware_stack))
}

fn build_cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let origin = if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        let origins = allowed_origins
            .iter()
            .map(|o| o.parse::<HeaderValue>().with_context(|| format!("Invalid CORS origin: {}", o)))
            .collect::<Result<Vec<HeaderValue>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
