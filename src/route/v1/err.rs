use axum::{extract::State, http::StatusCode, response::Response};

use crate::{state::ApiState, traits::StateProvider};

/// Always fails. Used to check that server errors reach the logs.
pub async fn err(State(state): State<ApiState>) -> Response {
    state
        .responder()
        .error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}
