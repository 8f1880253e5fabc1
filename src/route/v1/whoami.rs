use axum::{extract::State, http::StatusCode, response::Response};
use serde::Serialize;

use crate::{
    extractor::{api_key::ApiKey, maybe_api_key::MaybeApiKey},
    state::ApiState,
    traits::StateProvider,
    types::used_api_key::UsedApiKey,
};

#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    api_key: Option<UsedApiKey>,
}

/// Echoes the supplied API key. Rejects callers without one.
pub async fn whoami(State(state): State<ApiState>, ApiKey(key): ApiKey) -> Response {
    state.responder().json(
        StatusCode::OK,
        &WhoamiResponse {
            api_key: Some(key),
        },
    )
}

/// Echoes the supplied API key, or `null` for anonymous callers.
pub async fn whoami_optional(
    State(state): State<ApiState>,
    MaybeApiKey(key): MaybeApiKey,
) -> Response {
    state
        .responder()
        .json(StatusCode::OK, &WhoamiResponse { api_key: key })
}
