//! Dorm API endpoints

use api_types::dorm::{DormNew, DormView, DormsResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::dorms;

use crate::{ServerError, server::ServerState};

fn view(dorm: dorms::Model) -> DormView {
    DormView {
        id: dorm.id,
        dorm: dorm.name,
    }
}

/// Handle requests for listing all dorms
pub async fn list(State(state): State<ServerState>) -> Result<Json<DormsResponse>, ServerError> {
    let dorms = state.engine.dorms().await?;

    Ok(Json(DormsResponse {
        dorms: dorms.into_iter().map(view).collect(),
    }))
}

/// Handle requests for creating a new dorm
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DormNew>,
) -> Result<(StatusCode, Json<DormView>), ServerError> {
    let dorm = state.engine.create_dorm(payload.dorm).await?;

    Ok((StatusCode::CREATED, Json(view(dorm))))
}

/// Handle requests for getting a dorm
pub async fn get(
    State(state): State<ServerState>,
    Path(dorm_id): Path<i32>,
) -> Result<Json<DormView>, ServerError> {
    let dorm = state.engine.dorm(dorm_id).await?;

    Ok(Json(view(dorm)))
}

/// Handle requests for deleting a dorm, echoing the removed row
pub async fn delete(
    State(state): State<ServerState>,
    Path(dorm_id): Path<i32>,
) -> Result<Json<DormView>, ServerError> {
    let dorm = state.engine.delete_dorm(dorm_id).await?;

    Ok(Json(view(dorm)))
}
