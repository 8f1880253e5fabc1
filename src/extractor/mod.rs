use axum::{http::StatusCode, response::Response};

use crate::{auth::AuthError, traits::StateProvider};

pub mod api_key;
pub mod maybe_api_key;

/// Rejects a request whose credentials could not be extracted.
fn unauthorized<S: StateProvider>(state: &S, err: AuthError) -> Response {
    state
        .responder()
        .error(StatusCode::UNAUTHORIZED, &err.to_string())
}
