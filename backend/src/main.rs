//! EcoTrack Backend Server
//!
//! The main Rust backend server for EcoTrack, providing APIs for user
//! accounts, eco-action logging, and community content, plus static
//! hosting for the single-page frontend.

use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

// Re-declare modules for binary
mod auth;
mod config;
mod db;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod state;
mod users;

use auth::AuthService;
use config::Config;
use state::AppState;
use users::UserService;

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .init();

    // Diagnostic details in error bodies stay redacted in production.
    error::expose_error_details(!config.environment.is_production());

    // Initialize database connection pool and schema
    let db_pool = match db::create_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = db::run_migrations(&db_pool).await {
        tracing::error!("Failed to run migrations: {}", e);
        std::process::exit(1);
    }

    // Initialize services
    let user_service = UserService::new(db_pool.clone());
    let auth_service = AuthService::new(
        user_service.clone(),
        config.jwt_secret.clone(),
        config.jwt_expires_days,
    );

    // Create shared app state
    let app_state = AppState::new(Arc::new(auth_service), Arc::new(user_service));

    // Clone db_pool for health check
    let health_db_pool = db_pool.clone();

    // Create the app router; non-API paths fall through to the SPA bundle.
    let spa = ServeDir::new("public").not_found_service(ServeFile::new("public/index.html"));

    let app = Router::new()
        .route("/api/health", get(move || health_check(health_db_pool.clone())))
        .merge(routes::auth_routes())
        .merge(routes::user_routes())
        .merge(routes::activity_routes())
        .merge(routes::content_routes())
        .with_state(app_state)
        .fallback_service(spa)
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .layer(configure_cors(&config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    tracing::info!("EcoTrack server listening on {}", addr);
    tracing::info!("Health check at http://{}/api/health", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server shutdown complete");
}

/// Health check response
#[derive(serde::Serialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
}

/// Health check endpoint
async fn health_check(pool: sqlx::PgPool) -> Json<HealthResponse> {
    let status = match db::check_health(&pool).await {
        Ok(()) => "ok",
        Err(_) => "degraded",
    };

    Json(HealthResponse {
        status: status.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// CORS restricted to the configured frontend origin, with credentials.
fn configure_cors(config: &Config) -> CorsLayer {
    let origin = config
        .frontend_url
        .parse::<HeaderValue>()
        .expect("FRONTEND_URL is not a valid origin");

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
