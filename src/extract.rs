use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

/// JSON body that has passed schema validation. Handlers take this instead
/// of `Json<T>` so no raw body reaches domain code.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadBody(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Translate an external identifier into the storage engine's native id.
/// Malformed syntax is a client error, not a non-match.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|err| ApiError::InvalidId(err.to_string()))
}
