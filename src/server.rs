// ABOUTME: HTTP server assembly for the pantry tracker
// ABOUTME: Merges the domain routers, applies the middleware stack and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # HTTP Server
//!
//! [`build_router`] produces the complete application so integration tests
//! can drive it with `oneshot`; [`run`] binds it to the configured address.

use crate::errors::AppError;
use crate::middleware::{create_request_span, setup_cors, MakeRequestUuid};
use crate::resources::ServerResources;
use crate::routes::{AuthRoutes, HealthRoutes, NotificationRoutes, PantryRoutes, RecipeRoutes};
use crate::security::headers::security_headers;
use anyhow::{Context, Result};
use axum::body::Body;
use axum::extract::Request;
use axum::response::IntoResponse;
use axum::{middleware, Router};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceExt;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Complete application router with all middleware applied
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let mut router = Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(AuthRoutes::routes(resources.clone()))
        .merge(PantryRoutes::routes(resources.clone()))
        .merge(NotificationRoutes::routes(resources.clone()))
        .merge(RecipeRoutes::routes(resources.clone()));

    if let Some(static_dir) = &resources.config.static_dir {
        router = with_frontend(router, static_dir);
    }

    router
        .layer(middleware::from_fn_with_state(
            resources.security_headers.clone(),
            security_headers,
        ))
        .layer(setup_cors(&resources.config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span::<Body>))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Serve the prebuilt frontend, answering unknown non-API paths with `index.html`
fn with_frontend(router: Router, static_dir: &Path) -> Router {
    if !static_dir.is_dir() {
        warn!(
            "Static directory {} does not exist, frontend will not be served",
            static_dir.display()
        );
        return router;
    }

    info!("Serving frontend from {}", static_dir.display());
    let frontend =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    router.fallback(move |request: Request| {
        let frontend = frontend.clone();
        async move {
            if request.uri().path().starts_with("/api/") {
                return AppError::not_found("Route").into_response();
            }
            match frontend.oneshot(request).await {
                Ok(response) => response.into_response(),
                Err(never) => match never {},
            }
        }
    })
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr = format!(
        "{}:{}",
        resources.config.host, resources.config.http_port
    );
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Pantry server listening on http://{}", addr);

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Pantry server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
