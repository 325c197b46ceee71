//! Web server for the catalog browser
//!
//! Serves a single page and the JSON endpoints it uses. All handlers share one
//! [`Session`], so the caches live as long as the server.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use swapi_common::Category;
use tower_http::cors::CorsLayer;

use crate::details::DetailView;
use crate::listing::Card;
use crate::session::Session;

/// Shared application state
#[derive(Clone)]
struct AppState {
    session: Arc<Session>,
}

/// List query parameters
#[derive(Deserialize)]
struct ListParams {
    #[serde(default)]
    q: String,
}

/// API response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

fn parse_category(tag: &str) -> Result<Category, StatusCode> {
    tag.parse::<Category>().map_err(|e| {
        log::warn!("{}", e);
        StatusCode::NOT_FOUND
    })
}

/// GET / - Serve the web UI (single HTML page)
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// GET /api/categories
async fn categories_handler() -> Json<ApiResponse<Vec<Category>>> {
    ApiResponse::ok(Category::ALL.to_vec())
}

/// GET /api/{category}?q={query}
async fn list_handler(
    State(state): State<AppState>,
    Path(tag): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<Vec<Card>>>, StatusCode> {
    let category = parse_category(&tag)?;

    state.session.ensure_loaded(category).await;
    let cards = state.session.filter(category, &params.q).await;

    Ok(ApiResponse::ok(cards))
}

/// GET /api/{category}/{id}
async fn details_handler(
    State(state): State<AppState>,
    Path((tag, id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<DetailView>>, StatusCode> {
    let category = parse_category(&tag)?;

    state.session.ensure_loaded(category).await;
    let item = state
        .session
        .find_item(category, &id)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(ApiResponse::ok(state.session.describe(category, &item).await))
}

/// Build the web server router
pub fn create_router(session: Arc<Session>) -> Router {
    let state = AppState { session };

    Router::new()
        .route("/", get(index_handler))
        .route("/api/categories", get(categories_handler))
        .route("/api/{category}", get(list_handler))
        .route("/api/{category}/{id}", get(details_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the web server (async)
///
/// Binds to 0.0.0.0 (all interfaces).
pub async fn serve(session: Arc<Session>, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(session);
    let addr = format!("0.0.0.0:{}", port);

    log::info!("Web UI listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
