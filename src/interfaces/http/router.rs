//! API Router with Swagger UI

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiResponse, EmptyData};
use super::middleware::require_session;
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::{auth, clinic, health, navigation};
use super::state::AppState;
use crate::application::views::{
    AppointmentRow, BillingOverview, BillingSummary, DashboardSummary, EncounterRow,
    InventoryOverview, InventoryRow, InvoiceRow,
};
use crate::domain::clinic::{Appointment, Encounter, InventoryItem, Invoice, Patient, StockStatus};
use crate::domain::{Destination, Icon, Identity, Role};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::logout,
        auth::get_current_user,
        navigation::get_navigation,
        clinic::get_dashboard,
        clinic::list_patients,
        clinic::list_appointments,
        clinic::list_encounters,
        clinic::list_invoices,
        clinic::list_inventory,
    ),
    components(
        schemas(
            ApiResponse<Identity>,
            EmptyData,
            health::HealthResponse,
            auth::LoginRequest,
            Identity,
            Role,
            navigation::NavigationResponse,
            navigation::NavItem,
            Destination,
            Icon,
            DashboardSummary,
            Patient,
            Appointment,
            AppointmentRow,
            Encounter,
            EncounterRow,
            Invoice,
            InvoiceRow,
            BillingSummary,
            BillingOverview,
            InventoryItem,
            InventoryRow,
            InventoryOverview,
            StockStatus,
        )
    ),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Authentication", description = "Sign in and out of the single session slot"),
        (name = "Navigation", description = "Role-aware menu and portal header"),
        (name = "Clinic", description = "Read-only clinic screens; require a signed-in user"),
    ),
    info(
        title = "Hospital ERP API",
        description = "Session, navigation and clinic views of the hospital ERP demo",
    )
)]
pub struct ApiDoc;

pub fn create_api_router(state: AppState, metrics: MetricsState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Everything below needs a signed-in user
    let protected_routes = Router::new()
        .route("/api/v1/auth/me", get(auth::get_current_user))
        .route("/api/v1/dashboard", get(clinic::get_dashboard))
        .route("/api/v1/patients", get(clinic::list_patients))
        .route("/api/v1/appointments", get(clinic::list_appointments))
        .route("/api/v1/encounters", get(clinic::list_encounters))
        .route("/api/v1/invoices", get(clinic::list_invoices))
        .route("/api/v1/inventory", get(clinic::list_inventory))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    let metrics_routes = Router::new()
        .route("/metrics", get(prometheus_metrics))
        .with_state(metrics);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/navigation", get(navigation::get_navigation))
        .merge(protected_routes)
        .with_state(state)
        .merge(metrics_routes)
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::application::SessionStore;
    use crate::infrastructure::{clinic_dataset, FixtureDirectory, MemorySessionSlot};

    fn app() -> Router {
        let session = SessionStore::new(
            Arc::new(MemorySessionSlot::new()),
            Arc::new(FixtureDirectory::new()),
        )
        .with_login_latency(Duration::ZERO);
        let state = AppState::new(Arc::new(session), Arc::new(clinic_dataset()));
        let metrics = MetricsState {
            handle: PrometheusBuilder::new().build_recorder().handle(),
        };
        create_api_router(state, metrics)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn sign_in(app: &Router, email: &str) -> Value {
        let (status, body) = send(
            app,
            post_json(
                "/api/v1/auth/login",
                json!({"email": email, "password": "secret"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        body
    }

    fn labels(body: &Value) -> Vec<String> {
        body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["label"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn health_reports_session_state() {
        let app = app();
        let (status, body) = send(&app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "ok");
        assert_eq!(body["data"]["session_active"], false);
    }

    #[tokio::test]
    async fn login_me_navigation_logout() {
        let app = app();

        let body = sign_in(&app, "receptionist@hospital.com").await;
        assert_eq!(body["data"]["name"], "John Smith");
        assert_eq!(body["data"]["hospitalId"], "hosp1");

        let (status, me) = send(&app, get("/api/v1/auth/me")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["data"]["role"], "receptionist");

        let (status, nav) = send(&app, get("/api/v1/navigation?active=billing")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            labels(&nav),
            vec!["Dashboard", "Appointments", "Patients", "Billing"]
        );
        assert_eq!(nav["data"]["portal_title"], "Reception Desk");
        assert_eq!(nav["data"]["initials"], "JS");
        assert_eq!(nav["data"]["active"], "billing");
        assert_eq!(nav["data"]["items"][0]["icon"], "bar-chart-3");

        let (status, _) = send(&app, post_json("/api/v1/auth/logout", json!({}))).await;
        assert_eq!(status, StatusCode::OK);

        let (status, me) = send(&app, get("/api/v1/auth/me")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(me["success"], false);
    }

    #[tokio::test]
    async fn navigation_without_session_is_dashboard_only() {
        let app = app();
        let (status, nav) = send(&app, get("/api/v1/navigation?active=billing")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(labels(&nav), vec!["Dashboard"]);
        assert_eq!(nav["data"]["active"], "dashboard");
        assert!(nav["data"]["user"].is_null());
    }

    #[tokio::test]
    async fn destination_outside_menu_falls_back() {
        let app = app();
        sign_in(&app, "nurse@hospital.com").await;
        let (_, nav) = send(&app, get("/api/v1/navigation?active=billing")).await;
        assert_eq!(nav["data"]["active"], "dashboard");
    }

    #[tokio::test]
    async fn unknown_email_is_401_and_keeps_state() {
        let app = app();
        let (status, body) = send(
            &app,
            post_json(
                "/api/v1/auth/login",
                json!({"email": "nobody@hospital.com", "password": "x"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid credentials");

        let (_, health) = send(&app, get("/health")).await;
        assert_eq!(health["data"]["session_active"], false);
    }

    #[tokio::test]
    async fn invalid_login_body_is_422() {
        let app = app();
        let (status, _) = send(
            &app,
            post_json("/api/v1/auth/login", json!({"email": "doctor", "password": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn views_require_session() {
        let app = app();
        for uri in [
            "/api/v1/dashboard",
            "/api/v1/patients",
            "/api/v1/appointments",
            "/api/v1/encounters",
            "/api/v1/invoices",
            "/api/v1/inventory",
        ] {
            let (status, body) = send(&app, get(uri)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
            assert_eq!(body["error"], "Not authenticated");
        }
    }

    #[tokio::test]
    async fn clinic_views_after_login() {
        let app = app();
        sign_in(&app, "admin@hospital.com").await;

        let (status, patients) = send(&app, get("/api/v1/patients?search=doe")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(patients["data"].as_array().unwrap().len(), 1);

        let (_, day) = send(&app, get("/api/v1/appointments?date=2024-12-27")).await;
        assert_eq!(day["data"].as_array().unwrap().len(), 3);

        let (_, invoices) = send(&app, get("/api/v1/invoices?status=paid")).await;
        assert_eq!(invoices["data"]["invoices"].as_array().unwrap().len(), 1);
        assert_eq!(invoices["data"]["summary"]["overdue_count"], 0);

        let (_, inventory) = send(&app, get("/api/v1/inventory?category=Equipment")).await;
        assert_eq!(inventory["data"]["items"].as_array().unwrap().len(), 1);
        assert_eq!(inventory["data"]["categories"].as_array().unwrap().len(), 3);

        let (_, dashboard) = send(&app, get("/api/v1/dashboard")).await;
        assert_eq!(dashboard["data"]["total_patients"], 3);
    }

    #[tokio::test]
    async fn bad_query_parameter_is_enveloped_400() {
        let app = app();
        sign_in(&app, "admin@hospital.com").await;

        for uri in [
            "/api/v1/invoices?status=refunded",
            "/api/v1/appointments?date=yesterday",
            "/api/v1/inventory?low_stock=maybe",
        ] {
            let (status, body) = send(&app, get(uri)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body["success"], false, "{}", uri);
            assert!(body["data"].is_null());
            assert!(body["error"].is_string(), "{}", uri);
        }

        let (_, body) = send(&app, get("/api/v1/invoices?status=refunded")).await;
        assert!(body["error"].as_str().unwrap().contains("refunded"));

        let (status, all) = send(&app, get("/api/v1/invoices?status=all")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all["data"]["invoices"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn metrics_endpoint_is_public() {
        let app = app();
        let response = app.oneshot(get("/metrics")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
