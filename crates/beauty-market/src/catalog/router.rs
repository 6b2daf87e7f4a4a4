use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{DayOfWeek, ProfessionalId};
use super::registry::{VendorCategory, VendorRegistry};
use super::schedule::parse_time;
use super::service::{CatalogError, CatalogService};
use super::views::{ProfessionalCardView, VendorSummaryView};
use crate::pricing::{format_price, format_price_range};

/// Router exposing the read-only catalog over HTTP.
pub fn catalog_router<R>(service: Arc<CatalogService<R>>) -> Router
where
    R: VendorRegistry + 'static,
{
    Router::new()
        .route("/api/v1/professionals", get(professionals_handler::<R>))
        .route(
            "/api/v1/professionals/:professional_id",
            get(professional_handler::<R>),
        )
        .route("/api/v1/availability", get(availability_handler::<R>))
        .route("/api/v1/vendors/:slug", get(vendor_handler::<R>))
        .route(
            "/api/v1/categories/:category/vendors",
            get(category_vendors_handler::<R>),
        )
        .route("/api/v1/prices/format", get(format_price_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AvailabilityQuery {
    pub(crate) day: String,
    pub(crate) time: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PriceQuery {
    pub(crate) amount: f64,
    #[serde(default)]
    pub(crate) max: Option<f64>,
}

pub(crate) async fn professionals_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
) -> Response
where
    R: VendorRegistry + 'static,
{
    (StatusCode::OK, axum::Json(service.professionals())).into_response()
}

pub(crate) async fn professional_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(professional_id): Path<String>,
) -> Response
where
    R: VendorRegistry + 'static,
{
    match service.professional(&ProfessionalId(professional_id)) {
        Ok(entry) => (StatusCode::OK, axum::Json(entry)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn availability_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(query): Query<AvailabilityQuery>,
) -> Response
where
    R: VendorRegistry + 'static,
{
    let day = DayOfWeek::from_name(&query.day);
    let at = parse_time(&query.time);
    let (Some(day), Some(at)) = (day, at) else {
        let payload = json!({
            "error": format!(
                "expected a weekday and HH:MM time, got '{}' '{}'",
                query.day, query.time
            ),
        });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    };

    let cards: Vec<ProfessionalCardView> = service
        .available_professionals(day, at)
        .iter()
        .map(ProfessionalCardView::from)
        .collect();
    (StatusCode::OK, axum::Json(cards)).into_response()
}

pub(crate) async fn vendor_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(slug): Path<String>,
) -> Response
where
    R: VendorRegistry + 'static,
{
    match service.vendor(&slug) {
        Ok(vendor) => {
            let view = VendorSummaryView::from(&vendor);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn category_vendors_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(category): Path<String>,
) -> Response
where
    R: VendorRegistry + 'static,
{
    let Some(category) = VendorCategory::from_slug(&category) else {
        return error_response(CatalogError::UnknownCategory(category));
    };

    let summaries: Vec<VendorSummaryView> = service
        .vendors(category)
        .iter()
        .map(VendorSummaryView::from)
        .collect();
    (StatusCode::OK, axum::Json(summaries)).into_response()
}

pub(crate) async fn format_price_handler(Query(query): Query<PriceQuery>) -> Response {
    let label = match query.max {
        Some(max) => format_price_range(query.amount, max),
        None => format_price(query.amount),
    };
    (StatusCode::OK, axum::Json(json!({ "label": label }))).into_response()
}

fn error_response(err: CatalogError) -> Response {
    let status = match err {
        CatalogError::ProfessionalNotFound(_)
        | CatalogError::VendorNotFound(_)
        | CatalogError::UnknownCategory(_) => StatusCode::NOT_FOUND,
    };
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
