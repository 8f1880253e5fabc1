use axum::{async_trait, extract::FromRequestParts, http::request::Parts, response::Response};

use crate::{
    auth::{get_api_key, AuthError},
    traits::StateProvider,
    types::used_api_key::UsedApiKey,
};

/// Extracts the API key if one was supplied.
///
/// A missing or empty `Authorization` header yields `None`, so the handler can
/// serve anonymous callers. A malformed header is still rejected with `401`.
#[derive(Debug, Clone)]
pub struct MaybeApiKey(pub Option<UsedApiKey>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeApiKey
where
    S: Send + Sync + StateProvider,
{
    type Rejection = Response;

    #[tracing::instrument(name = "maybe_api_key_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match get_api_key(&parts.headers) {
            Ok(value) => {
                let used_api_key = UsedApiKey { value };

                tracing::trace!(?used_api_key, "Extracted");

                Ok(MaybeApiKey(Some(used_api_key)))
            }
            Err(AuthError::NoAuthHeader) => {
                tracing::trace!("No API key supplied");

                Ok(MaybeApiKey(None))
            }
            Err(err @ AuthError::MalformedAuthHeader) => {
                tracing::warn!(%err, "Rejection");

                Err(super::unauthorized(state, err))
            }
        }
    }
}
