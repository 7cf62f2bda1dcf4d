use crate::error::ApiError;
use crate::metrics::{encode_metrics, HTTP_DURATION, HTTP_TOTAL};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{MatchedPath, Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use larder_core::recipe::Recipe;
use larder_core::slug::recipe_id;
use serde_json::json;
use std::collections::HashMap;
use std::time::Instant;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/recipes/:id",
            get(read_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

async fn home() -> &'static str {
    "Larder recipe store. See /recipes."
}

async fn metrics_handler() -> String {
    encode_metrics()
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = state.started.elapsed().as_secs();
    match state.store.list() {
        Ok(recipes) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "recipes": recipes.len(),
                "uptime_seconds": uptime,
            })),
        ),
        Err(err) => {
            tracing::warn!(%err, "store unreadable during health check");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "error": err.to_string(),
                    "uptime_seconds": uptime,
                })),
            )
        }
    }
}

/// Decodes the request body, mapping any rejection to a 400 with the
/// standard `{"error": ...}` shape instead of axum's plain-text default.
fn decode_body(payload: Result<Json<Recipe>, JsonRejection>) -> Result<Recipe, ApiError> {
    let Json(recipe) = payload.map_err(|e| ApiError::invalid(e.body_text()))?;
    Ok(recipe)
}

async fn create_recipe(
    State(state): State<AppState>,
    payload: Result<Json<Recipe>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let recipe = decode_body(payload)?;
    let id = recipe_id(&recipe.name)
        .ok_or_else(|| ApiError::invalid("recipe name must contain sluggable characters"))?;
    state.store.add(&id, recipe)?;
    tracing::info!(%id, "recipe added");
    Ok(Json(json!({ "status": "success", "id": id })))
}

async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, Recipe>>, ApiError> {
    Ok(Json(state.store.list()?))
}

async fn read_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    Ok(Json(state.store.get(&id)?))
}

async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Recipe>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let recipe = decode_body(payload)?;
    state.store.update(&id, recipe)?;
    tracing::info!(%id, "recipe updated");
    Ok(Json(json!({ "status": "success" })))
}

async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.store.remove(&id)?;
    tracing::info!(%id, "recipe removed");
    Ok(Json(json!({ "status": "success" })))
}

/// Records request count and latency per method and route template.
async fn track_metrics(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    // Label by route template, not the raw path, to keep cardinality bounded.
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let start = Instant::now();
    let response = next.run(req).await;

    HTTP_DURATION
        .with_label_values(&[&method, &path])
        .observe(start.elapsed().as_secs_f64());
    HTTP_TOTAL
        .with_label_values(&[&method, &path, response.status().as_str()])
        .inc();
    response
}
