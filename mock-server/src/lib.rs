use std::{net::SocketAddr, time::Duration};

use axum::{
    body::Bytes,
    extract::{Path, Query},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// What `/inspect` reports about the request it received.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Inspection {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub user_agent: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

#[derive(Deserialize)]
pub struct SlowParams {
    #[serde(default = "default_delay_ms")]
    pub ms: u64,
}

fn default_delay_ms() -> u64 {
    1000
}

#[derive(Deserialize)]
pub struct LargeParams {
    pub bytes: usize,
}

#[derive(Deserialize)]
pub struct CreateUser {
    pub name: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/echo", any(echo))
        .route("/inspect", any(inspect))
        .route("/inspect/{*rest}", any(inspect))
        .route("/users", post(create_user))
        .route("/text", get(text))
        .route("/empty", get(empty))
        .route("/status/{code}", any(status))
        .route("/slow", get(slow))
        .route("/large", get(large))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Start the server on a random local port in a background thread and
/// return its address. The thread lives until the process exits.
pub fn spawn_background() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind mock server");
    let addr = std_listener.local_addr().expect("mock server address");
    std_listener.set_nonblocking(true).expect("set nonblocking");

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("mock server runtime");
        rt.block_on(async {
            let listener = TcpListener::from_std(std_listener)?;
            run(listener).await
        })
        .expect("mock server exited");
    });

    addr
}

/// Returns the request body unchanged, labelled as JSON.
async fn echo(body: Bytes) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

async fn inspect(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<Inspection> {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    Json(Inspection {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        content_type: header_value(header::CONTENT_TYPE),
        user_agent: header_value(header::USER_AGENT),
        authorization: header_value(header::AUTHORIZATION),
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

async fn create_user(Json(_input): Json<CreateUser>) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(json!({ "id": 7 })))
}

async fn text() -> &'static str {
    "plain text, not JSON"
}

async fn empty() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn status(Path(code): Path<u16>) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, Json(json!({ "status": code }))))
}

async fn slow(Query(params): Query<SlowParams>) -> Json<Value> {
    tokio::time::sleep(Duration::from_millis(params.ms)).await;
    Json(json!({ "slept_ms": params.ms }))
}

/// A plain-text body of exactly `bytes` ASCII characters.
async fn large(Query(params): Query<LargeParams>) -> String {
    "a".repeat(params.bytes)
}
