use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::models::SummaryTable;
use crate::services::{recommendations, summary};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Builds the consider/avoid recommendation summary for one location
///
/// An unknown location yields an empty table, not an error.
pub async fn get_recommendation_summary(
    State(state): State<AppState>,
    Path(location_id): Path<i64>,
) -> AppResult<Json<SummaryTable>> {
    let recommendations = recommendations::build_recommendations(
        &state.store,
        Arc::clone(&state.generator),
        location_id,
    )
    .await?;

    Ok(Json(summary::build_summary_table(&recommendations)))
}
