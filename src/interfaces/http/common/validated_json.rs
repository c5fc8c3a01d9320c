//! JSON body extractor that also runs `validator` rules
//!
//! Malformed bodies keep axum's status (400 for bad syntax, 415 for a
//! missing content type); bodies that parse but break a rule are a 422.
//! Both answer with the `ApiResponse` envelope.

use std::collections::BTreeMap;

use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::{api_error, ApiError};

pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError<()>;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                api_error(
                    rejection.status(),
                    format!("Invalid JSON: {}", rejection.body_text()),
                )
            })?;

        value
            .validate()
            .map_err(|errors| api_error(StatusCode::UNPROCESSABLE_ENTITY, describe(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

/// `field: message` pairs, ordered by field name.
fn describe(errors: &ValidationErrors) -> String {
    let by_field: BTreeMap<String, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    if by_field.is_empty() {
        return "Validation failed".to_string();
    }

    by_field
        .iter()
        .flat_map(|(field, messages)| messages.iter().map(move |m| format!("{}: {}", field, m)))
        .collect::<Vec<_>>()
        .join("; ")
}
