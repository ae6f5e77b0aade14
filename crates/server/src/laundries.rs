//! Laundry machine API endpoints

use api_types::{
    laundry::{LaundryLookupResponse, LaundryNew, LaundryView},
    laundry_time::LaundryTimeView,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{LaundryLookup, MoneyCents, laundries};

use crate::{ServerError, server::ServerState};

fn view(laundry: laundries::Model) -> LaundryView {
    LaundryView {
        id: laundry.id,
        dorm_id: laundry.dorm_id,
        laundry_number: laundry.laundry_number,
        laundry_type: laundry.laundry_type,
        cost: MoneyCents::new(laundry.cost).to_decimal(),
    }
}

/// Handle requests for creating a machine under a dorm
pub async fn create(
    State(state): State<ServerState>,
    Path(dorm_id): Path<i32>,
    Json(payload): Json<LaundryNew>,
) -> Result<(StatusCode, Json<LaundryView>), ServerError> {
    let laundry = state
        .engine
        .create_laundry(dorm_id, payload.laundry_number, payload.laundry_type)
        .await?;

    Ok((StatusCode::CREATED, Json(view(laundry))))
}

/// Handle requests for reading a machine: the bare machine, or its first
/// recorded usage session when one exists
pub async fn get(
    State(state): State<ServerState>,
    Path(laundry_id): Path<i32>,
) -> Result<Json<LaundryLookupResponse>, ServerError> {
    let lookup = state.engine.laundry(laundry_id).await?;

    Ok(Json(match lookup {
        LaundryLookup::Machine(laundry) => LaundryLookupResponse::Machine(view(laundry)),
        LaundryLookup::Session(session) => LaundryLookupResponse::Session(LaundryTimeView {
            id: session.id,
            laundry_id: session.laundry_id,
            user_id: session.user_id,
            duration: session.duration,
        }),
    }))
}
