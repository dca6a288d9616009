//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::error::Operation;
use crate::models::{CreateItemRequest, UpdateNumberRequest, ValidationError};

/// JSON request body tied to the operation it feeds
pub trait JsonPayload: DeserializeOwned {
    const OPERATION: Operation;
}

impl JsonPayload for CreateItemRequest {
    const OPERATION: Operation = Operation::Create;
}

impl JsonPayload for UpdateNumberRequest {
    const OPERATION: Operation = Operation::Update;
}

/// Extract a JSON body, turning every rejection (bad syntax, wrong types,
/// missing fields, missing content type) into a 400 with a `message`.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: JsonPayload + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation {
                operation: T::OPERATION,
                error: ValidationError::Malformed {
                    reason: rejection.body_text(),
                },
            })?;

        Ok(Self(payload))
    }
}

/// Extract the `{name}` path segment, percent-decoded.
///
/// The name is not validated: an unknown name is a 404 from the service.
/// Only a segment that fails to decode (e.g. invalid UTF-8) is rejected.
pub struct ItemPathName(pub String);

impl<S> FromRequestParts<S> for ItemPathName
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(name): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::InvalidPath {
                reason: rejection.body_text(),
            })?;

        Ok(Self(name))
    }
}
