//! Query-string extractor whose rejection uses the JSON envelope
//!
//! `axum::extract::Query` rejects with a plain-text body. `ValidatedQuery`
//! deserializes the same way but answers bad parameters with a 400
//! `ApiResponse`, so every API error is JSON.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use super::{api_error, ApiError};

pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError<()>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| api_error(StatusCode::BAD_REQUEST, rejection.body_text()))?;
        Ok(ValidatedQuery(value))
    }
}
