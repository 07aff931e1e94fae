use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use serde_json::Value;

use emmis_client::VALIDATION_API_PATH;

/// One request as seen by the stub rule service.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub headers: HeaderMap,
    pub body: Value,
}

/// A running stub rule service bound to an ephemeral local port.
pub struct StubRuleService {
    /// Full URL of the stub's rule endpoint.
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubRuleService {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request received so far; panics if there is not exactly one.
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

struct StubState {
    status: StatusCode,
    response_body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

async fn handle(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state
        .requests
        .lock()
        .unwrap()
        .push(RecordedRequest { headers, body });

    (
        state.status,
        [(CONTENT_TYPE, "application/json")],
        state.response_body.clone(),
    )
}

/// Start a stub that answers every `POST` on the rule path with `status`
/// and `response_body`, recording what it receives.
pub async fn spawn_stub(status: StatusCode, response_body: &str) -> StubRuleService {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = Arc::new(StubState {
        status,
        response_body: response_body.to_string(),
        requests: Arc::clone(&requests),
    });

    let app = Router::new()
        .route(VALIDATION_API_PATH, post(handle))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubRuleService {
        url: format!("http://{addr}{VALIDATION_API_PATH}"),
        requests,
    }
}

/// Stub answering `200 {"operationStatus":"SUCCESS"}`.
pub async fn spawn_success_stub() -> StubRuleService {
    spawn_stub(StatusCode::OK, r#"{"operationStatus":"SUCCESS"}"#).await
}
