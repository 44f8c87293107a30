// Test Server Helpers
//
// `call` drives the app in-process through `actix_web::test`;
// `spawn_test_server` binds a real port with actix-test for client-level checks.

use actix_web::{http::Method, test};
use serde_json::Value;

use invoice_api::{build_app, AppState};

pub use actix_test::TestServer;

/// Send one request to a fresh application and return status plus JSON body
pub async fn call(method: Method, uri: &str, body: Option<Value>) -> (u16, Value) {
    call_with_state(&AppState::default(), method, uri, body).await
}

/// Send one request to an application sharing `state` (and its id sequences)
pub async fn call_with_state(
    state: &AppState,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (u16, Value) {
    let app = test::init_service(build_app(state)).await;

    let mut req = test::TestRequest::default().method(method).uri(uri);
    if let Some(body) = body {
        req = req.set_json(body);
    }

    let resp = test::call_service(&app, req.to_request()).await;
    let status = resp.status().as_u16();
    let bytes = test::read_body(resp).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body must be JSON")
    };

    (status, json)
}

pub async fn get(uri: &str) -> (u16, Value) {
    call(Method::GET, uri, None).await
}

pub async fn post(uri: &str, body: Value) -> (u16, Value) {
    call(Method::POST, uri, Some(body)).await
}

/// Spawn a real HTTP server on a random port with the full application
pub fn spawn_test_server() -> TestServer {
    let state = AppState::default();
    actix_test::start(move || build_app(&state))
}
