//! Stand-in prediction backend for tests.
use std::{
    net::TcpListener,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

#[derive(Debug, Clone)]
pub enum Reply {
    Price(f64),
    Status(StatusCode),
    Body(Value),
    Slow(Duration),
}
#[derive(Clone)]
struct MockState {
    reply: Reply,
    received: Arc<Mutex<Vec<Value>>>,
}

async fn predict(
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.received.lock().unwrap().push(body);
    match &state.reply {
        Reply::Price(price) => (
            StatusCode::OK,
            Json(json!({"prediction": price, "success": true})),
        ),
        Reply::Status(code) => (*code, Json(json!({"error": "Modelo no disponible"}))),
        Reply::Body(body) => (StatusCode::OK, Json(body.clone())),
        Reply::Slow(delay) => {
            tokio::time::sleep(*delay).await;
            (
                StatusCode::OK,
                Json(json!({"prediction": 1.0, "success": true})),
            )
        }
    }
}
async fn health() -> Json<Value> {
    Json(json!({"status": "healthy", "model_loaded": true}))
}

/// Starts the backend on an ephemeral port. Returns the port and every JSON
/// body `/predict` has received.
pub async fn run_mock_server(reply: Reply) -> (u16, Arc<Mutex<Vec<Value>>>) {
    let received = Arc::new(Mutex::new(vec![]));
    let app = Router::new()
        .route("/predict", post(predict))
        .route("/health", get(health))
        .with_state(MockState {
            reply,
            received: received.clone(),
        });
    let addr = "127.0.0.1:0".parse().unwrap();
    let server = axum::Server::bind(&addr).serve(app.into_make_service());
    let port = server.local_addr().port();
    tokio::spawn(async move {
        server.await.unwrap();
    });
    (port, received)
}
pub fn mock_url(port: u16) -> String {
    "http://127.0.0.1:".to_string() + port.to_string().as_str()
}
/// A port nothing is listening on.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}
