//! Clinic screen handlers
//!
//! All routes sit behind the session guard and read the shared dataset.

use axum::extract::State;
use axum::Json;
use chrono::Utc;

use super::dto::{AppointmentQuery, InventoryQuery, InvoiceQuery, SearchQuery};
use crate::application::views::{
    appointments_on, billing_overview, dashboard_summary, inventory_overview, search_encounters,
    search_patients, AppointmentRow, BillingOverview, DashboardSummary, EncounterRow,
    InventoryFilter, InventoryOverview,
};
use crate::domain::clinic::Patient;
use crate::interfaces::http::common::{ApiResponse, ValidatedQuery};
use crate::interfaces::http::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "Clinic",
    responses(
        (status = 200, description = "Headline numbers", body = ApiResponse<DashboardSummary>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Json<ApiResponse<DashboardSummary>> {
    Json(ApiResponse::success(dashboard_summary(&state.data, Utc::now())))
}

#[utoipa::path(
    get,
    path = "/api/v1/patients",
    tag = "Clinic",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching patients", body = ApiResponse<Vec<Patient>>),
        (status = 400, description = "Malformed query parameter"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_patients(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> Json<ApiResponse<Vec<Patient>>> {
    let patients = search_patients(&state.data, &query.search)
        .into_iter()
        .cloned()
        .collect();
    Json(ApiResponse::success(patients))
}

#[utoipa::path(
    get,
    path = "/api/v1/appointments",
    tag = "Clinic",
    params(AppointmentQuery),
    responses(
        (status = 200, description = "Schedule for the day", body = ApiResponse<Vec<AppointmentRow>>),
        (status = 400, description = "Malformed query parameter"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_appointments(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<AppointmentQuery>,
) -> Json<ApiResponse<Vec<AppointmentRow>>> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    Json(ApiResponse::success(appointments_on(
        &state.data,
        date,
        query.status,
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/encounters",
    tag = "Clinic",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching encounters", body = ApiResponse<Vec<EncounterRow>>),
        (status = 400, description = "Malformed query parameter"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_encounters(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> Json<ApiResponse<Vec<EncounterRow>>> {
    Json(ApiResponse::success(search_encounters(
        &state.data,
        &query.search,
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/invoices",
    tag = "Clinic",
    params(InvoiceQuery),
    responses(
        (status = 200, description = "Invoices with billing totals", body = ApiResponse<BillingOverview>),
        (status = 400, description = "Malformed query parameter"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_invoices(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<InvoiceQuery>,
) -> Json<ApiResponse<BillingOverview>> {
    Json(ApiResponse::success(billing_overview(
        &state.data,
        &query.search,
        query.status,
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/inventory",
    tag = "Clinic",
    params(InventoryQuery),
    responses(
        (status = 200, description = "Stock levels", body = ApiResponse<InventoryOverview>),
        (status = 400, description = "Malformed query parameter"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_inventory(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<InventoryQuery>,
) -> Json<ApiResponse<InventoryOverview>> {
    let filter = InventoryFilter::from(query);
    Json(ApiResponse::success(inventory_overview(&state.data, &filter)))
}
