use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::engine::DEFAULT_TOP_N;
use crate::error::{AppError, AppResult};
use crate::models::{Recommendation, UserProfile};
use crate::services::Vlog;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// Travel-preference profile; every field optional, unknown keys ignored.
    #[serde(default)]
    pub profile: UserProfile,
    /// Maximum number of results, defaults to 5.
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct NarrativeResponse {
    pub narrative: String,
}

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Runs the matching pipeline for one profile. An empty list is a valid
/// outcome (strict constraints can prune everything) and renders as 200.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Json<Vec<Recommendation>> {
    let top_n = request.top_n.unwrap_or(DEFAULT_TOP_N);
    let recommendations = state.engine.recommend(request.profile, top_n);
    Json(recommendations)
}

/// Looks up travel vlogs for one recommended destination.
pub async fn destination_vlogs(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<Vlog>>> {
    let destination = state
        .engine
        .destination(id)
        .ok_or_else(|| AppError::NotFound(format!("No destination with id {}", id)))?;

    let vlogs = state.vlogs.search(&destination.name).await;
    Ok(Json(vlogs))
}

/// Generates the personalized narrative paragraph for a destination detail
/// view. Collaborator failures still return 200 with the fallback text.
pub async fn destination_narrative(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(profile): Json<UserProfile>,
) -> AppResult<Json<NarrativeResponse>> {
    let destination = state
        .engine
        .destination(id)
        .ok_or_else(|| AppError::NotFound(format!("No destination with id {}", id)))?;

    let narrative = state.narrative.generate(destination, &profile).await;
    Ok(Json(NarrativeResponse { narrative }))
}
