//! Descontin API Server
//!
//! Client sign-up restricted to a served neighborhood, plus referral invites
//! with a per-client quota. Uses hexagonal (ports & adapters) architecture
//! for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    LogMailer, PostgresClientRepository, PostgresInviteRepository, PostgresUserRepository,
    QueueNotifier, ViaCepClient,
};
use app::{AccountService, InviteService, NotificationWorker};
use config::Config;

/// How often pending invites are checked for expiry
const EXPIRY_SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<
        AccountService<PostgresUserRepository, PostgresClientRepository, ViaCepClient>,
    >,
    pub invite_service: Arc<
        InviteService<PostgresClientRepository, PostgresInviteRepository, QueueNotifier>,
    >,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,descontin_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Descontin API...");

    // Load configuration
    let config = Config::from_env()?;
    let service_config = config.service_config();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let user_repo = Arc::new(PostgresUserRepository::new(db.clone()));
    let client_repo = Arc::new(PostgresClientRepository::new(db.clone()));
    let invite_repo = Arc::new(PostgresInviteRepository::new(db.clone()));
    let lookup = Arc::new(ViaCepClient::new(config.address_lookup_url.clone()));

    // Invite notifications are delivered by a background worker
    let (notifier, queue) = QueueNotifier::new();
    let worker = NotificationWorker::new(Arc::new(LogMailer), invite_repo.clone());
    tokio::spawn(worker.run(queue));

    // Create application services
    let account_service = Arc::new(AccountService::new(
        user_repo,
        client_repo.clone(),
        lookup,
        service_config.clone(),
    ));

    let invite_service = Arc::new(InviteService::new(
        client_repo,
        invite_repo,
        Arc::new(notifier),
        service_config,
    ));

    // Expire stale invites in the background
    let sweep_service = invite_service.clone();
    let max_age = config.invite_ttl;
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(EXPIRY_SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            if let Err(e) = sweep_service.expire_stale(max_age).await {
                tracing::warn!(error = %e, "Invite expiry sweep failed");
            }
        }
    });

    let state = AppState {
        account_service,
        invite_service,
    };

    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .context("Failed to build governor config")?,
    );

    // Rate-limited routes (account creation)
    let rate_limited_routes = Router::new()
        .route("/users", post(handlers::create_user))
        .route("/clients", post(handlers::create_client))
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .route("/invites", post(handlers::create_invite))
        .route("/invites/:token", get(handlers::get_invite))
        .route("/clients/:id/invites", get(handlers::list_client_invites))
        .merge(rate_limited_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
