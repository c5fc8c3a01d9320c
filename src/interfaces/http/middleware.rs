//! Session guard for routes that need a signed-in user

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use super::common::ApiResponse;
use super::state::AppState;
use crate::domain::AuthError;

/// Rejects the request with 401 unless someone is signed in. The current
/// [`Identity`](crate::domain::Identity) is handed to the handler as an
/// extension.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(identity) = state.session.current() else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::error(
                AuthError::NotAuthenticated.to_string(),
            )),
        )
            .into_response();
    };

    tracing::debug!(user = %identity.email, role = %identity.role, "Session check passed");
    request.extensions_mut().insert(identity);
    next.run(request).await
}
