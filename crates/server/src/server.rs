use axum::{
    Router,
    routing::{get, post},
};

use std::sync::Arc;

use crate::{dorms, laundries, reservations, transactions, users};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/api/users/", get(users::list).post(users::create))
        .route(
            "/api/users/{user_id}/",
            get(users::get).delete(users::delete),
        )
        .route("/api/dorms/", get(dorms::list).post(dorms::create))
        .route(
            "/api/dorms/{dorm_id}/",
            get(dorms::get).delete(dorms::delete),
        )
        .route("/api/laundries/{dorm_id}/", post(laundries::create))
        .route("/api/laundry/{laundry_id}/", get(laundries::get))
        .route(
            "/api/users/{user_id}/{laundry_id}/add/",
            post(reservations::create),
        )
        .route(
            "/api/users/{user_id}/transactions/",
            post(transactions::create),
        )
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}
