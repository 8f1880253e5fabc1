use axum::{async_trait, extract::FromRequestParts, http::request::Parts, response::Response};

use crate::{auth::get_api_key, traits::StateProvider, types::used_api_key::UsedApiKey};

/// Extracts the API key from an `Authorization: ApiKey <token>` header.
///
/// The key is not validated against anything. Rejects with `401` if the header
/// is missing or malformed.
#[derive(Debug, Clone)]
pub struct ApiKey(pub UsedApiKey);

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync + StateProvider,
{
    type Rejection = Response;

    #[tracing::instrument(name = "api_key_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let value = get_api_key(&parts.headers).map_err(|err| {
            tracing::warn!(%err, "Rejection");

            super::unauthorized(state, err)
        })?;

        let used_api_key = UsedApiKey { value };

        tracing::trace!(?used_api_key, "Extracted");

        Ok(ApiKey(used_api_key))
    }
}
