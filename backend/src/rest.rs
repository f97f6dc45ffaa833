use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use shared::{ContentType, DateFilter, DatePreset, FilterCriteria, Tab};
use tracing::info;

use crate::domain::ContentService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub content_service: ContentService,
}

impl AppState {
    pub fn new(content_service: ContentService) -> Self {
        Self { content_service }
    }
}

/// Query parameters accepted by the dashboard and listing endpoints.
#[derive(Deserialize, Debug, Default)]
pub struct ContentQuery {
    pub query: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub location: Option<String>,
    pub price: Option<String>,
    /// "single" | "range" | "preset"; omitted means no date filter.
    pub date_mode: Option<String>,
    pub date_start: Option<String>,
    pub date_end: Option<String>,
    pub preset: Option<String>,
    pub tab: Option<String>,
    pub page: Option<usize>,
}

/// Rejection for malformed filter parameters. Unknown *values* inside a
/// known parameter stay permissive (they impose no constraint); only a
/// structurally invalid request — a bad date string or an unknown
/// `date_mode` — is a client error.
#[derive(Debug, thiserror::Error)]
pub enum CriteriaError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("date_mode '{0}' requires date_start")]
    MissingStart(String),
    #[error("unknown date_mode '{0}'")]
    UnknownMode(String),
}

fn parse_query_day(value: &str) -> Result<NaiveDate, CriteriaError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| CriteriaError::InvalidDate(value.to_string()))
}

fn parse_date_filter(params: &ContentQuery) -> Result<Option<DateFilter>, CriteriaError> {
    let mode = match params.date_mode.as_deref().map(str::trim) {
        Some(m) if !m.is_empty() => m,
        // A bare preset parameter is accepted without an explicit mode.
        _ => {
            return Ok(params.preset.as_deref().map(|p| DateFilter::Preset {
                preset: DatePreset::from_token(p),
            }))
        }
    };

    let start = || -> Result<NaiveDate, CriteriaError> {
        match params.date_start.as_deref() {
            Some(s) => parse_query_day(s),
            None => Err(CriteriaError::MissingStart(mode.to_string())),
        }
    };

    match mode {
        "single" => Ok(Some(DateFilter::Single { start: start()? })),
        "range" => {
            let end = params
                .date_end
                .as_deref()
                .map(parse_query_day)
                .transpose()?;
            Ok(Some(DateFilter::Range {
                start: start()?,
                end,
            }))
        }
        "preset" => Ok(Some(DateFilter::Preset {
            preset: DatePreset::from_token(params.preset.as_deref().unwrap_or("")),
        })),
        other => Err(CriteriaError::UnknownMode(other.to_string())),
    }
}

fn parse_criteria(params: &ContentQuery) -> Result<FilterCriteria, CriteriaError> {
    Ok(FilterCriteria {
        query: params.query.clone(),
        category: params.category.clone(),
        subcategory: params.subcategory.clone(),
        location: params.location.clone(),
        price_range: params.price.clone(),
        date: parse_date_filter(params)?,
    })
}

/// Axum handler for GET /api/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<ContentQuery>,
) -> impl IntoResponse {
    info!("GET /api/dashboard - params: {:?}", params);

    let criteria = match parse_criteria(&params) {
        Ok(criteria) => criteria,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };
    let tab = Tab::from_token(params.tab.as_deref().unwrap_or("all"));
    let page = params.page.unwrap_or(1);
    let today = Local::now().date_naive();

    match state.content_service.dashboard(&criteria, tab, page, today) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            tracing::error!("Error assembling dashboard: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error assembling dashboard").into_response()
        }
    }
}

async fn list_collection(
    state: AppState,
    params: ContentQuery,
    content_type: ContentType,
) -> axum::response::Response {
    info!("GET /api/{}s - params: {:?}", content_type.as_str(), params);

    let criteria = match parse_criteria(&params) {
        Ok(criteria) => criteria,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };
    let today = Local::now().date_naive();

    match state.content_service.list(content_type, &criteria, today) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            tracing::error!("Error listing {}s: {:?}", content_type.as_str(), e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing content").into_response()
        }
    }
}

/// Axum handler for GET /api/events
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<ContentQuery>,
) -> impl IntoResponse {
    list_collection(state, params, ContentType::Event).await
}

/// Axum handler for GET /api/restaurants
pub async fn list_restaurants(
    State(state): State<AppState>,
    Query(params): Query<ContentQuery>,
) -> impl IntoResponse {
    list_collection(state, params, ContentType::Restaurant).await
}

/// Axum handler for GET /api/attractions
pub async fn list_attractions(
    State(state): State<AppState>,
    Query(params): Query<ContentQuery>,
) -> impl IntoResponse {
    list_collection(state, params, ContentType::Attraction).await
}

/// Axum handler for GET /api/playgrounds
pub async fn list_playgrounds(
    State(state): State<AppState>,
    Query(params): Query<ContentQuery>,
) -> impl IntoResponse {
    list_collection(state, params, ContentType::Playground).await
}
