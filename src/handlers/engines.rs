//! Engine inventory, inference and analytics handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::{AppState, AppResult, AppError};
use crate::models::{Engine, PredictionResponse, SensorTrendResponse};

fn find_engine(state: &AppState, unit_id: i64) -> AppResult<Engine> {
    Engine::find_by_id(&state.db, unit_id)
        .ok_or_else(|| AppError::NotFound("Engine not found".to_string()))
}

/// List all engines in the fleet
pub async fn list(State(state): State<AppState>) -> Json<Vec<Engine>> {
    Json(Engine::list(&state.db))
}

/// Predict remaining useful life for an active engine
pub async fn predict(
    State(state): State<AppState>,
    unit_id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<PredictionResponse>> {
    let Path(unit_id) = unit_id?;
    let engine = find_engine(&state, unit_id)?;

    if engine.is_retired() {
        tracing::info!("Prediction rejected for retired engine {}", unit_id);
        return Err(AppError::Unprocessable("Engine is retired".to_string()));
    }

    let prediction = state.inference.predict(engine.max_cycles).await?;
    tracing::debug!(
        "Engine {}: rul={} health={} risk={:?}",
        unit_id, prediction.predicted_rul, prediction.health_score, prediction.risk_level
    );

    Ok(Json(PredictionResponse::new(&engine, prediction)))
}

/// Sensor trend window for an engine
pub async fn trends(
    State(state): State<AppState>,
    unit_id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<SensorTrendResponse>> {
    let Path(unit_id) = unit_id?;
    let engine = find_engine(&state, unit_id)?;

    let trend = SensorTrendResponse::synthesize(&state.db, engine.unit_id)?;
    Ok(Json(trend))
}
