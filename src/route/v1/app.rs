use axum::{routing::get, Router};

use crate::state::ApiState;

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new()
        .route("/healthz", get(super::readiness::readiness))
        .route("/err", get(super::err::err))
        .route("/whoami", get(super::whoami::whoami))
        .route("/whoami/optional", get(super::whoami::whoami_optional))
}
