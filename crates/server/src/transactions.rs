//! Balance transaction endpoint

use api_types::{transaction::TransactionNew, user::UserView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::MoneyCents;

use crate::{ServerError, server::ServerState, users};

/// Handle requests for adjusting a user's balance by a signed amount
pub async fn create(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<TransactionNew>,
) -> Result<(StatusCode, Json<UserView>), ServerError> {
    let user = state
        .engine
        .apply_transaction(user_id, payload.amount.map(MoneyCents::from_decimal))
        .await?;

    Ok((StatusCode::CREATED, Json(users::view(user))))
}
