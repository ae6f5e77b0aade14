//! Machine reservation endpoint - the balance ledger operation

use api_types::laundry_time::{LaundryTimeNew, LaundryTimeView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

/// Handle requests for reserving a machine: debit the user by the machine's
/// cost and record the usage session as one transaction
pub async fn create(
    State(state): State<ServerState>,
    Path((user_id, laundry_id)): Path<(i32, i32)>,
    Json(payload): Json<LaundryTimeNew>,
) -> Result<(StatusCode, Json<LaundryTimeView>), ServerError> {
    let session = state
        .engine
        .reserve_machine(user_id, laundry_id, payload.duration)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LaundryTimeView {
            id: session.id,
            laundry_id: session.laundry_id,
            user_id: session.user_id,
            duration: session.duration,
        }),
    ))
}
