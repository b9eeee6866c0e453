//! HTTP route handlers.

use std::path::Path as FsPath;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{NetworkTotals, Station, find_by_code, search};
use crate::stations::{FetchError, load_stations};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<FsPath>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/stations/:code", get(station_page))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/search/:query", get(search_stations))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All stations with their synthesized bikes.
async fn list_stations(State(state): State<AppState>) -> Result<Json<Vec<Station>>, AppError> {
    let stations = load_stations(state.source.as_ref(), state.limit).await?;
    Ok(Json(stations))
}

/// Stations whose name contains the query, ignoring case.
async fn search_stations(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<Station>>, AppError> {
    let stations = load_stations(state.source.as_ref(), state.limit).await?;
    Ok(Json(search(stations, &query)))
}

/// Station table with search box.
async fn index_page(
    State(state): State<AppState>,
    Query(params): Query<IndexQuery>,
) -> Result<Html<String>, PageError> {
    let query = params.q.unwrap_or_default().trim().to_string();

    let stations = load_stations(state.source.as_ref(), state.limit).await?;
    let stations = search(stations, &query);

    render(&IndexTemplate {
        totals: NetworkTotals::from_stations(&stations),
        stations: stations.iter().map(StationRow::from_station).collect(),
        query,
    })
}

/// Detail page of one station.
async fn station_page(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Html<String>, PageError> {
    let stations = load_stations(state.source.as_ref(), state.limit).await?;

    let station = find_by_code(&stations, &code).ok_or_else(|| PageError::NotFound {
        message: format!("No station with code {code}"),
    })?;

    render(&StationTemplate {
        station: StationDetailView::from_station(station),
    })
}

fn render(template: &impl Template) -> Result<Html<String>, PageError> {
    template.render().map(Html).map_err(|e| PageError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Error type of the JSON API.
#[derive(Debug)]
pub enum AppError {
    Upstream(FetchError),
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        AppError::Upstream(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Upstream(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        warn!(%status, %message, "API request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

/// Error type of the HTML pages.
#[derive(Debug)]
pub enum PageError {
    Upstream(FetchError),
    NotFound { message: String },
    Internal { message: String },
}

impl From<FetchError> for PageError {
    fn from(e: FetchError) -> Self {
        PageError::Upstream(e)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            PageError::Upstream(e) => (
                StatusCode::BAD_GATEWAY,
                "Station data unavailable",
                e.to_string(),
            ),
            PageError::NotFound { message } => {
                (StatusCode::NOT_FOUND, "Station not found", message.clone())
            }
            PageError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error", message.clone())
            }
        };

        warn!(%status, %message, "page request failed");

        let page = ErrorTemplate {
            title: title.to_string(),
            message: message.clone(),
        }
        .render()
        .unwrap_or(message);

        (status, Html(page)).into_response()
    }
}
