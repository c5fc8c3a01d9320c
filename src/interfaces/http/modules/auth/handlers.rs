//! Authentication API handlers

use axum::{extract::State, http::StatusCode, Extension, Json};

use super::dto::LoginRequest;
use crate::domain::{AuthError, Identity};
use crate::interfaces::http::common::{api_error, ApiError, ApiResponse, EmptyData, ValidatedJson};
use crate::interfaces::http::AppState;
use crate::shared::SessionError;

fn login_error(err: SessionError) -> ApiError<Identity> {
    let status = match &err {
        SessionError::Auth(AuthError::AccountDisabled) => StatusCode::FORBIDDEN,
        SessionError::Auth(_) => StatusCode::UNAUTHORIZED,
        SessionError::Storage(e) => {
            tracing::error!("Failed to persist session: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    api_error(status, err.to_string())
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = ApiResponse<Identity>),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account is disabled"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<Identity>>, ApiError<Identity>> {
    let identity = state
        .session
        .login(&request.email, &request.password)
        .await
        .map_err(login_error)?;

    Ok(Json(ApiResponse::success(identity)))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = "Authentication",
    responses(
        (status = 200, description = "Signed out", body = ApiResponse<EmptyData>)
    )
)]
pub async fn logout(State(state): State<AppState>) -> Json<ApiResponse<EmptyData>> {
    state.session.logout().await;
    Json(ApiResponse::success(EmptyData {}))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Authentication",
    responses(
        (status = 200, description = "Current user", body = ApiResponse<Identity>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_current_user(Extension(identity): Extension<Identity>) -> Json<ApiResponse<Identity>> {
    Json(ApiResponse::success(identity))
}
