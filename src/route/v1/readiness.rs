use axum::{extract::State, http::StatusCode, response::Response};
use serde::Serialize;

use crate::{state::ApiState, traits::StateProvider};

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    status: &'static str,
}

pub async fn readiness(State(state): State<ApiState>) -> Response {
    state
        .responder()
        .json(StatusCode::OK, &ReadinessResponse { status: "ok" })
}
