// Character Catalog - Web front end
// HTML fragments and JSON over the shared, load-once catalog

use crate::commands::{Action, Browser};
use crate::filter::Category;
use crate::html;
use crate::record::Record;
use crate::render::Display;
use crate::store::CatalogStore;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::debug;

/// Shared application state. The store is read-only after startup, so no
/// lock is needed; every request gets its own browser session.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    /// Set when the startup load failed; pages show the failure message
    pub load_failed: bool,
}

impl AppState {
    pub fn new(store: Arc<CatalogStore>, load_failed: bool) -> Self {
        AppState { store, load_failed }
    }

    fn session(&self) -> Browser {
        let mut browser = Browser::with_store(Arc::clone(&self.store));
        if self.load_failed {
            browser.show_load_failure();
        }
        browser
    }
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    fn err(data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data,
            error: Some(message.into()),
        }
    }
}

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.load_failed {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::err("DEGRADED", "catalog failed to load")),
        )
    } else {
        (StatusCode::OK, Json(ApiResponse::ok("OK")))
    }
}

/// GET /api/records - Whole catalog as JSON
async fn get_records(State(state): State<AppState>) -> impl IntoResponse {
    let records: Vec<Record> = state.store.get_all().to_vec();
    Json(ApiResponse::ok(records))
}

/// GET /api/search?q= - Card container fragment for a search term
async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    debug!(term = %params.q, "search request");
    fragment(state.session().dispatch(Action::Search(params.q)))
}

/// GET /api/category/:bucket - Card container fragment for one category
async fn category(
    State(state): State<AppState>,
    Path(bucket): Path<String>,
) -> impl IntoResponse {
    match bucket.parse::<Category>() {
        Ok(category) => fragment(state.session().dispatch(category.into())).into_response(),
        Err(e) => (StatusCode::NOT_FOUND, e).into_response(),
    }
}

/// GET /api/start - Fragment with every card
async fn start(State(state): State<AppState>) -> impl IntoResponse {
    fragment(state.session().dispatch(Action::Start))
}

/// GET / - Full page, intro screen first
async fn serve_index(State(state): State<AppState>) -> impl IntoResponse {
    let browser = state.session();
    Html(html::render_page(browser.screen(), browser.display()))
}

fn fragment(display: &Display) -> Html<String> {
    Html(html::render_display(display))
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState, static_dir: impl Into<PathBuf>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/records", get(get_records))
        .route("/search", get(search))
        .route("/start", get(start))
        .route("/category/:bucket", get(category))
        .with_state(state.clone());

    Router::new()
        .route("/", get(serve_index))
        .with_state(state)
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new(static_dir.into()))
        .layer(CorsLayer::permissive())
}

// ============================================================================
// TESTS
// ============================================================================
