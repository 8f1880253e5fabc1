use axum::{extract::State, http::StatusCode, response::Response};

use crate::{state::ApiState, traits::StateProvider};

pub async fn not_found(State(state): State<ApiState>) -> Response {
    state.responder().error(StatusCode::NOT_FOUND, "not found")
}
