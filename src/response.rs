use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

const SERIALIZATION_FAILED: &str = "failed to serialize response";

/// Receives a record for every error response in the server error class.
pub trait ErrorLog: Send + Sync {
    fn server_error(&self, status: StatusCode, message: &str);
}

/// Forwards server errors to [`tracing`] as `5XX error` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorLog;

impl ErrorLog for TracingErrorLog {
    fn server_error(&self, status: StatusCode, message: &str) {
        tracing::error!(code = status.as_u16(), %message, "Responding with 5XX error");
    }
}

/// The body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub error: &'a str,
}

/// Writes JSON responses.
///
/// Server errors are reported to the [`ErrorLog`] the responder was built with.
#[derive(Clone)]
pub struct Responder {
    log: Arc<dyn ErrorLog>,
}

impl Responder {
    pub fn new(log: Arc<dyn ErrorLog>) -> Self {
        Self { log }
    }

    /// Responds with `payload` serialized as JSON.
    ///
    /// A payload that fails to serialize is a bug in the caller. It is reported
    /// as a server error and answered with a `500` error envelope.
    pub fn json<T>(&self, status: StatusCode, payload: &T) -> Response
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_vec(payload) {
            Ok(body) => json_response(status, body),
            Err(err) => {
                tracing::error!(%err, "Failed to serialize response payload");

                self.error(StatusCode::INTERNAL_SERVER_ERROR, SERIALIZATION_FAILED)
            }
        }
    }

    /// Responds with `{"error": message}`.
    pub fn error(&self, status: StatusCode, message: &str) -> Response {
        if is_server_error(status) {
            self.log.server_error(status, message);
        }

        match serde_json::to_vec(&ErrorEnvelope { error: message }) {
            Ok(body) => json_response(status, body),
            // A struct with a single string field always serializes.
            Err(_) => json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!(r#"{{"error":"{SERIALIZATION_FAILED}"}}"#).into_bytes(),
            ),
        }
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(Arc::new(TracingErrorLog))
    }
}

impl std::fmt::Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder").finish_non_exhaustive()
    }
}

/// Responds with `payload` serialized as JSON, reporting to [`TracingErrorLog`].
pub fn respond_with_json<T>(status: StatusCode, payload: &T) -> Response
where
    T: Serialize + ?Sized,
{
    Responder::default().json(status, payload)
}

/// Responds with `{"error": message}`, reporting to [`TracingErrorLog`].
pub fn respond_with_error(status: StatusCode, message: &str) -> Response {
    Responder::default().error(status, message)
}

fn is_server_error(status: StatusCode) -> bool {
    status.as_u16() >= 500
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response {
    let headers = [(CONTENT_TYPE, HeaderValue::from_static("application/json"))];

    (status, headers, Body::from(body)).into_response()
}
