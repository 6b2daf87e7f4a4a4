use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use beauty_market::catalog::{catalog_router, CatalogService, VendorRegistry};
use beauty_market::error::AppError;
use beauty_market::pricing::{format_price, parse_price};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct PriceParseRequest {
    pub(crate) text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct PriceParseResponse {
    pub(crate) amount: f64,
    pub(crate) label: String,
}

pub(crate) fn with_catalog_routes<R>(service: Arc<CatalogService<R>>) -> axum::Router
where
    R: VendorRegistry + 'static,
{
    catalog_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/prices/parse",
            axum::routing::get(parse_price_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Reads an amount back out of a display label; the label is re-rendered canonically.
pub(crate) async fn parse_price_endpoint(
    Query(request): Query<PriceParseRequest>,
) -> Result<Json<PriceParseResponse>, AppError> {
    let amount = parse_price(&request.text)?;
    Ok(Json(PriceParseResponse {
        amount,
        label: format_price(amount),
    }))
}
