use anyhow::Context;
use axum::{routing::get, Json, Router};
use helpline::StaticMatcher;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;

use application::Responder;
use config::AppConfig;
use models::HealthCheck;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<Responder>,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Server is running", body = HealthCheck)),
    tag = "Health"
)]
async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "healthy".to_string(),
        message: "Customer Support Chatbot is running!".to_string(),
    })
}

fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::page::router())
        .merge(routes::chat::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    if let Ok(path) = dotenv {
        tracing::info!("Loaded environment from {}", path.display());
    }

    tracing::info!("🤖 Helpline initializing...");

    let config = AppConfig::from_env().context("Failed to read configuration")?;

    if config.uses_dev_secret() {
        tracing::warn!("⚠️  SECRET_KEY not set - using development secret");
    }

    let chat_model = adapters::build_chat_model(&config.openai)
        .context("Failed to build OpenAI client")?;

    if let Some(model) = &chat_model {
        tracing::info!(
            "🧠 Chat model enabled ({} / {})",
            model.provider_name(),
            model.model_id()
        );
    }

    let matcher = Arc::new(StaticMatcher::default());
    tracing::info!(
        "📚 Predefined catalogue loaded ({} keywords, {} categories)",
        matcher.keywords().len(),
        matcher.categories().len()
    );

    let responder = Responder::new(matcher, chat_model).with_timeout(config.openai.timeout);
    if !responder.has_chat_model() {
        tracing::warn!("⚠️  No OPENAI_API_KEY set - predefined replies only");
    }

    let state = AppState {
        responder: Arc::new(responder),
    };

    let router = build_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Helpline ready - open http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
