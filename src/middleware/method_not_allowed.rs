use axum::{
    extract::{Request, State},
    http::{
        header::{ALLOW, CONTENT_TYPE},
        StatusCode,
    },
    middleware::Next,
    response::Response,
};

use crate::traits::StateProvider;

/// Middleware to turn axum's empty `405` into a JSON error.
///
/// Responses that already carry a body type are left alone, as is the `Allow` header.
pub async fn method_not_allowed<S: StateProvider>(
    State(state): State<S>,
    req: Request,
    next: Next,
) -> Response {
    let resp = next.run(req).await;

    if resp.status() != StatusCode::METHOD_NOT_ALLOWED || resp.headers().contains_key(CONTENT_TYPE)
    {
        return resp;
    }

    let mut json = state
        .responder()
        .error(StatusCode::METHOD_NOT_ALLOWED, "method not allowed");

    if let Some(allow) = resp.headers().get(ALLOW) {
        json.headers_mut().insert(ALLOW, allow.clone());
    }

    json
}
