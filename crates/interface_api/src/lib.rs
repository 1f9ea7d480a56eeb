//! HTTP API Layer
//!
//! This crate provides the REST API of the claims assessment backend
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for claims, images and analysis
//! - **Middleware**: Request ids, tracing, audit logging
//! - **DTOs**: Request bodies with field validation
//! - **Error Handling**: Consistent `{"error", "message"}` responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::new(store, provider, config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_claims::{AnalysisProvider, ClaimAnalysisService, ClaimsPort};

use crate::config::ApiConfig;
use crate::handlers::{analysis, claims, health, images};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ClaimsPort>,
    pub analysis: ClaimAnalysisService,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires the analysis service to the same store the handlers use
    pub fn new(store: Arc<dyn ClaimsPort>, provider: Arc<dyn AnalysisProvider>, config: ApiConfig) -> Self {
        let analysis = ClaimAnalysisService::new(Arc::clone(&store), provider);
        Self {
            store,
            analysis,
            config,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Store, analysis service and configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Claims routes
    let claims_routes = Router::new()
        .route("/", get(claims::list_claims).post(claims::create_claim))
        .route("/:id", get(claims::get_claim).patch(claims::update_claim))
        .route("/:id/images", get(images::list_images).post(images::upload_image))
        .route("/:id/analyze", post(analysis::analyze_claim))
        .route("/:id/assessment", get(analysis::get_assessment))
        .route("/:id/estimation", get(analysis::get_estimation));

    // Image routes
    let image_routes = Router::new().route("/:id", delete(images::delete_image));

    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .nest("/images", image_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
