use axum::extract::State;
use axum::Json;

use super::dto::{NavItem, NavigationQuery, NavigationResponse};
use crate::domain::{navigation_for, resolve_destination, Destination};
use crate::interfaces::http::common::{ApiResponse, ValidatedQuery};
use crate::interfaces::http::AppState;

/// Header title shown before anyone signs in.
pub const SIGNED_OUT_TITLE: &str = "Dashboard";

#[utoipa::path(
    get,
    path = "/api/v1/navigation",
    tag = "Navigation",
    params(NavigationQuery),
    responses(
        (status = 200, description = "Menu for the current user", body = ApiResponse<NavigationResponse>)
    )
)]
pub async fn get_navigation(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<NavigationQuery>,
) -> Json<ApiResponse<NavigationResponse>> {
    let identity = state.session.current();

    let items = navigation_for(identity.as_ref())
        .into_iter()
        .map(NavItem::from)
        .collect();

    let response = match identity {
        Some(identity) => NavigationResponse {
            portal_title: identity.role.portal_title().to_string(),
            initials: Some(identity.initials()),
            active: resolve_destination(identity.role, query.active.as_deref()),
            user: Some(identity),
            items,
        },
        None => NavigationResponse {
            portal_title: SIGNED_OUT_TITLE.to_string(),
            user: None,
            initials: None,
            items,
            active: Destination::Dashboard,
        },
    };

    Json(ApiResponse::success(response))
}
