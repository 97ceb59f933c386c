//! Dispatch console server
//!
//! Serves the dispatch dashboard's back end: dispatcher sign-in, the
//! technician roster, service tickets, the activity feed and the dashboard
//! counters, all held in one in-memory store. Changes are pushed to
//! connected dashboards over Server-Sent Events.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod state;

use std::sync::Arc;

use axum::Router;
use dispatch_store::{DispatchStore, MemoryDispatchStore};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::state::{create_shared_state, AppState};

/// Creates the application router with all routes configured.
pub fn create_app<S: DispatchStore + 'static>(state: Arc<AppState<S>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::create_router(state.clone())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Creates the store, seeded with mock records unless disabled.
pub fn create_store(config: &Config) -> MemoryDispatchStore {
    if config.seed_mock_data {
        MemoryDispatchStore::with_seed_data()
    } else {
        MemoryDispatchStore::new()
    }
}

/// Creates the application state with the given configuration and store.
pub fn create_state<S: DispatchStore>(config: Config, store: S) -> Arc<AppState<S>> {
    create_shared_state(config, store)
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use entities::NewTicket;
    use futures_util::StreamExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    type TestState = Arc<AppState<MemoryDispatchStore>>;

    fn test_state(require_session: bool) -> TestState {
        let config = Config {
            login_delay_ms: 0,
            require_session,
            ..Config::default()
        };
        create_state(config, MemoryDispatchStore::with_seed_data())
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }

    async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send(app, request).await
    }

    async fn sign_in(app: &Router) {
        let (status, _) = post(
            app,
            "/api/auth/login",
            json!({ "email": "dispatch@example.com", "password": "secret" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_app(test_state(true));
        let (status, body) = get(&app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("OK".to_string()));
    }

    #[tokio::test]
    async fn test_guarded_routes_need_session() {
        let app = create_app(test_state(true));

        let (status, body) = get(&app, "/api/dashboard/stats").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "authentication_required");

        sign_in(&app).await;
        let (status, body) = get(&app, "/api/dashboard/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stats"]["totalTickets"], 7);

        post(&app, "/api/auth/logout", json!({})).await;
        let (status, _) = post(&app, "/api/ticket/list", json!({})).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_guard_can_be_disabled() {
        let app = create_app(test_state(false));
        let (status, _) = post(&app, "/api/technician/list", json!({})).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_login_and_session() {
        let app = create_app(test_state(true));

        let (status, body) = post(
            &app,
            "/api/auth/login",
            json!({ "email": "dispatch@example.com", "password": "" }),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "invalid_credentials");

        sign_in(&app).await;
        let (status, body) = get(&app, "/api/auth/session").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["session"]["isAuthenticated"], true);
        assert_eq!(body["session"]["currentUser"]["name"], "Admin User");
        assert_eq!(body["session"]["currentUser"]["role"], "Super Admin");

        let (_, body) = post(&app, "/api/auth/logout", json!({})).await;
        assert_eq!(body["session"]["isAuthenticated"], false);
        assert!(body["session"]["currentUser"].is_null());
    }

    #[tokio::test]
    async fn test_assign_ticket_over_http() {
        let app = create_app(test_state(true));
        sign_in(&app).await;

        let (status, body) = post(
            &app,
            "/api/ticket/assign",
            json!({ "ticketId": "TKT-001", "technicianId": "5" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ticket"]["status"], "assigned");
        assert_eq!(body["ticket"]["assigneeId"], "5");
        assert_eq!(body["ticket"]["assigneeName"], "David Wilson");

        let (_, body) = post(&app, "/api/technician/get", json!({ "technicianId": "5" })).await;
        assert_eq!(body["technician"]["activeJobs"], 2);

        let (_, body) = post(&app, "/api/activity/list", json!({ "limit": 1 })).await;
        assert_eq!(
            body["activities"][0]["action"],
            "Ticket #TKT-001 assigned to David Wilson"
        );
        assert_eq!(body["activities"][0]["type"], "assignment");
    }

    #[tokio::test]
    async fn test_unknown_ids_map_to_not_found() {
        let app = create_app(test_state(true));
        sign_in(&app).await;

        let (status, body) = post(
            &app,
            "/api/ticket/assign",
            json!({ "ticketId": "TKT-001", "technicianId": "missing" }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "resource_not_found");

        let (status, _) = post(&app, "/api/ticket/get", json!({ "ticketId": "TKT-999" })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) =
            post(&app, "/api/technician/delete", json!({ "technicianId": "missing" })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_blank_fields_are_rejected() {
        let app = create_app(test_state(true));
        sign_in(&app).await;

        let (status, body) = post(
            &app,
            "/api/ticket/create",
            json!({ "title": "  ", "customerName": "Acme" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "invalid_request");

        let (status, _) = post(
            &app,
            "/api/technician/add",
            json!({ "name": "Priya", "email": "", "phone": "+1 (555) 010-0000" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = post(
            &app,
            "/api/technician/add",
            json!({ "name": "Priya", "email": "priya@example.com" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "phone is required");

        let (status, body) = post(
            &app,
            "/api/technician/add",
            json!({ "name": "Priya", "email": "priya@example.com", "phone": "+1 (555) 010-0000" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["technician"]["status"], "offline");
    }

    #[tokio::test]
    async fn test_empty_updates_are_rejected() {
        let app = create_app(test_state(true));
        sign_in(&app).await;

        let (status, body) =
            post(&app, "/api/technician/update", json!({ "technicianId": "1" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "invalid_request");

        let (status, _) = post(&app, "/api/ticket/update", json!({ "ticketId": "TKT-001" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = post(
            &app,
            "/api/ticket/update",
            json!({ "ticketId": "TKT-001", "priority": "urgent" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ticket"]["priority"], "urgent");
    }

    #[tokio::test]
    async fn test_add_activity_over_http() {
        let app = create_app(test_state(true));
        sign_in(&app).await;

        let (status, body) = post(
            &app,
            "/api/activity/add",
            json!({ "action": "Emily Chen went online", "type": "status" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["activity"]["type"], "status");

        let (_, body) = post(&app, "/api/activity/list", json!({ "limit": 1 })).await;
        assert_eq!(body["activities"][0]["action"], "Emily Chen went online");

        let (status, _) = post(
            &app,
            "/api/activity/add",
            json!({ "action": " ", "type": "status" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_ticket_lifecycle() {
        let app = create_app(test_state(true));
        sign_in(&app).await;

        let (status, body) = post(
            &app,
            "/api/ticket/create",
            json!({ "title": "Boiler check", "customerName": "Acme", "priority": "urgent" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ticket"]["id"], "TKT-008");
        assert_eq!(body["ticket"]["status"], "new");
        assert_eq!(body["ticket"]["availableTransitions"], json!(["assigned", "declined"]));

        let (_, body) = post(
            &app,
            "/api/ticket/update-status",
            json!({ "ticketId": "TKT-008", "status": "completed" }),
        )
        .await;
        assert_eq!(body["ticket"]["status"], "completed");
        assert_eq!(body["ticket"]["availableTransitions"], json!([]));

        let (_, body) = post(&app, "/api/ticket/list", json!({ "status": "completed" })).await;
        assert_eq!(body["tickets"].as_array().unwrap().len(), 2);
        assert_eq!(body["counts"]["all"], 8);
        assert_eq!(body["counts"]["completed"], 2);

        let (status, _) = post(&app, "/api/ticket/delete", json!({ "ticketId": "TKT-008" })).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = post(&app, "/api/ticket/get", json!({ "ticketId": "TKT-008" })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_technician_search_and_available() {
        let app = create_app(test_state(true));
        sign_in(&app).await;

        let (_, body) = post(&app, "/api/technician/list", json!({ "query": "sarah" })).await;
        let technicians = body["technicians"].as_array().unwrap();
        assert_eq!(technicians.len(), 1);
        assert_eq!(technicians[0]["id"], "2");

        let (_, body) = post(&app, "/api/technician/available", json!({})).await;
        assert_eq!(body["technicians"].as_array().unwrap().len(), 3);

        let (_, body) = post(
            &app,
            "/api/technician/update",
            json!({ "technicianId": "4", "status": "online" }),
        )
        .await;
        assert_eq!(body["technician"]["status"], "online");

        let (_, body) = post(&app, "/api/technician/available", json!({})).await;
        assert_eq!(body["technicians"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_event_stream_delivers_changes() {
        let state = test_state(false);
        let app = create_app(state.clone());

        let request = Request::builder()
            .uri("/api/events")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/event-stream"
        );

        state
            .store
            .add_ticket(NewTicket::new("Boiler check", "Acme"))
            .await
            .unwrap();

        let mut body = response.into_body().into_data_stream();
        let first = tokio::time::timeout(Duration::from_secs(5), body.next())
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        let first = String::from_utf8_lossy(&first).into_owned();
        assert!(first.contains("event: ticket_created"), "{first}");
        assert!(first.contains(r#""ticketId":"TKT-008""#), "{first}");

        let second = tokio::time::timeout(Duration::from_secs(5), body.next())
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert!(String::from_utf8_lossy(&second).contains("event: activity_logged"));
    }
}
