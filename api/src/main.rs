//! Service Order API Server
//!
//! Tracks customers and the service orders opened for them, with comment
//! threads on each order. Uses hexagonal (ports & adapters) architecture for
//! clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, put},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod dto;
mod entity;
mod error;
mod handlers;



use adapters::{
    PostgresCommentRepository, PostgresCustomerRepository, PostgresServiceOrderRepository,
};
use app::{CommentService, CustomerService, ServiceOrderService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<CustomerService<PostgresCustomerRepository>>,
    pub service_order_service:
        Arc<ServiceOrderService<PostgresServiceOrderRepository, PostgresCustomerRepository>>,
    pub comment_service:
        Arc<CommentService<PostgresCommentRepository, PostgresServiceOrderRepository>>,
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

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Customers
        .route(
            "/customers",
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route(
            "/customers/:id",
            get(handlers::get_customer)
                .put(handlers::update_customer)
                .delete(handlers::delete_customer),
        )
        .route(
            "/customers/:id/service-orders",
            get(handlers::get_customer_service_orders),
        )
        // Service orders
        .route(
            "/service-orders",
            get(handlers::list_service_orders).post(handlers::create_service_order),
        )
        .route("/service-orders/:id", get(handlers::get_service_order))
        .route(
            "/service-orders/:id/finish",
            put(handlers::finish_service_order),
        )
        .route(
            "/service-orders/:id/cancel",
            put(handlers::cancel_service_order),
        )
        // Comments
        .route(
            "/service-orders/:id/comments",
            get(handlers::get_service_order_with_comments).post(handlers::add_comment),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,service_order_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting service order API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let customer_repo = Arc::new(PostgresCustomerRepository::new(db.clone()));
    let service_order_repo = Arc::new(PostgresServiceOrderRepository::new(db.clone()));
    let comment_repo = Arc::new(PostgresCommentRepository::new(db.clone()));

    // Create application services
    let customer_service = Arc::new(CustomerService::new(customer_repo.clone()));

    let service_order_service = Arc::new(
        ServiceOrderService::new(service_order_repo.clone(), customer_repo.clone())
            .with_strict_transitions(config.strict_status_transitions),
    );
    if config.strict_status_transitions {
        tracing::info!("Strict status transitions enabled");
    }

    let comment_service = Arc::new(CommentService::new(
        comment_repo.clone(),
        service_order_repo.clone(),
    ));

    let state = AppState {
        customer_service,
        service_order_service,
        comment_service,
    };

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}
