// Axum front end: renders the page per request and exposes content and assets as JSON.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::core::placeholder::{find_slot, placeholder_svg};
use crate::core::site::SiteBuilder;
use crate::core::{ContentProvider, ImageResolver, Storage};
use crate::utils::error::{Result, SiteError};

const MAX_BATCH_COUNT: usize = 20;
const MAX_BATCH_CATEGORIES: usize = 10;
const MAX_PLACEHOLDER_SIDE: u32 = 4096;

type Shared<S, C, R> = Arc<SiteBuilder<S, C, R>>;

pub fn router<S, C, R>(builder: Shared<S, C, R>) -> Router
where
    S: Storage + 'static,
    C: ContentProvider + 'static,
    R: ImageResolver + 'static,
{
    Router::new()
        .route("/", get(index_handler::<S, C, R>))
        .route("/health", get(|| async { "ok" }))
        .route("/api/portfolio", get(portfolio_handler::<S, C, R>))
        .route("/api/assets", get(assets_handler::<S, C, R>))
        .route("/placeholder.svg", get(placeholder_handler))
        .route("/static/img/{file}", get(static_image_handler))
        .with_state(builder)
}

/// Binds `addr` and serves until Ctrl-C.
pub async fn serve(router: Router, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr).await.map_err(|e| SiteError::ServerError {
        message: format!("cannot bind {}: {}", addr, e),
    })?;
    info!("Serving portfolio on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SiteError::ServerError {
            message: e.to_string(),
        })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

async fn index_handler<S, C, R>(State(builder): State<Shared<S, C, R>>) -> Response
where
    S: Storage + 'static,
    C: ContentProvider + 'static,
    R: ImageResolver + 'static,
{
    match builder.render().await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Page render failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.user_friendly_message()).into_response()
        }
    }
}

async fn portfolio_handler<S, C, R>(State(builder): State<Shared<S, C, R>>) -> Response
where
    S: Storage + 'static,
    C: ContentProvider + 'static,
    R: ImageResolver + 'static,
{
    Json(builder.content().portfolio()).into_response()
}

#[derive(Debug, Deserialize)]
struct BatchQuery {
    categories: String,
    count: Option<usize>,
}

async fn assets_handler<S, C, R>(
    State(builder): State<Shared<S, C, R>>,
    Query(query): Query<BatchQuery>,
) -> Response
where
    S: Storage + 'static,
    C: ContentProvider + 'static,
    R: ImageResolver + 'static,
{
    let count = query.count.unwrap_or(1);
    if count > MAX_BATCH_COUNT {
        return (
            StatusCode::BAD_REQUEST,
            format!("count must be at most {}", MAX_BATCH_COUNT),
        )
            .into_response();
    }

    let categories: Vec<String> = query
        .categories
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();
    if categories.len() > MAX_BATCH_CATEGORIES {
        return (
            StatusCode::BAD_REQUEST,
            format!("at most {} categories per batch", MAX_BATCH_CATEGORIES),
        )
            .into_response();
    }

    let batch: HashMap<String, Vec<String>> =
        builder.resolver().resolve_batch(&categories, count).await;
    Json(batch).into_response()
}

#[derive(Debug, Deserialize)]
struct PlaceholderQuery {
    w: u32,
    h: u32,
    label: Option<String>,
}

fn svg_response(svg: String) -> Response {
    ([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response()
}

async fn placeholder_handler(Query(query): Query<PlaceholderQuery>) -> Response {
    if query.w == 0
        || query.h == 0
        || query.w > MAX_PLACEHOLDER_SIDE
        || query.h > MAX_PLACEHOLDER_SIDE
    {
        return (StatusCode::BAD_REQUEST, "invalid placeholder size").into_response();
    }
    let label = query.label.as_deref().unwrap_or("AI Image");
    svg_response(placeholder_svg(query.w, query.h, label))
}

async fn static_image_handler(Path(file): Path<String>) -> Response {
    match find_slot(&file) {
        Some(slot) => svg_response(slot.render()),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
