//! User API endpoints

use api_types::user::{UserNew, UserView, UsersResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{MoneyCents, users};

use crate::{ServerError, server::ServerState};

pub(crate) fn view(user: users::Model) -> UserView {
    UserView {
        id: user.id,
        name: user.name,
        netid: user.netid,
        balance: MoneyCents::new(user.balance).to_decimal(),
    }
}

/// Handle requests for listing all users
pub async fn list(State(state): State<ServerState>) -> Result<Json<UsersResponse>, ServerError> {
    let users = state.engine.users().await?;

    Ok(Json(UsersResponse {
        users: users.into_iter().map(view).collect(),
    }))
}

/// Handle requests for creating a new user
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserNew>,
) -> Result<(StatusCode, Json<UserView>), ServerError> {
    let balance = payload
        .balance
        .map(MoneyCents::from_decimal)
        .unwrap_or(MoneyCents::ZERO);
    let user = state
        .engine
        .create_user(payload.name, payload.netid, balance)
        .await?;

    Ok((StatusCode::CREATED, Json(view(user))))
}

/// Handle requests for getting a user
pub async fn get(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserView>, ServerError> {
    let user = state.engine.user(user_id).await?;

    Ok(Json(view(user)))
}

/// Handle requests for deleting a user, echoing the removed row
pub async fn delete(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserView>, ServerError> {
    let user = state.engine.delete_user(user_id).await?;

    Ok(Json(view(user)))
}
