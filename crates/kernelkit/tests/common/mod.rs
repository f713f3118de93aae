//! Stub OpenAI-compatible server and collaborators shared by the integration tests

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    routing::post,
};
use kernelkit::{
    KernelKitResult, LOCAL_ENDPOINT, ReqwestTransportFactory, Settings, SettingsError,
    SettingsSource, Transport, TransportFactory,
};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A request the stub server received
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Value,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Clone, Default)]
pub struct Captured {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl Captured {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Replies with "echo: <last message>"
async fn echo_completion(
    State(captured): State<Captured>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let last = body["messages"]
        .as_array()
        .and_then(|messages| messages.last())
        .and_then(|message| message["content"].as_str())
        .unwrap_or_default()
        .to_string();

    captured.requests.lock().unwrap().push(CapturedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    });

    Json(json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": format!("echo: {}", last) },
            "finish_reason": "stop"
        }]
    }))
}

async fn failing_completion() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "model not loaded")
}

async fn empty_completion() -> Json<Value> {
    Json(json!({ "choices": [] }))
}

/// Start the stub server on an ephemeral port and return its origin
pub async fn spawn_stub() -> (String, Captured) {
    let captured = Captured::default();
    let app = Router::new()
        .route("/v1/chat/completions", post(echo_completion))
        .route(
            "/openai/deployments/{deployment}/chat/completions",
            post(echo_completion),
        )
        .route("/broken/v1/chat/completions", post(failing_completion))
        .route("/empty/v1/chat/completions", post(empty_completion))
        .with_state(captured.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), captured)
}

/// Records requested base addresses and points every transport at the stub.
/// The local endpoint maps to `{origin}{prefix}/v1/`, anything else to `{origin}/`.
pub struct StubTransports {
    origin: String,
    prefix: String,
    requested: Mutex<Vec<String>>,
}

impl StubTransports {
    pub fn new(origin: &str) -> Self {
        Self::with_prefix(origin, "")
    }

    pub fn with_prefix(origin: &str, prefix: &str) -> Self {
        Self {
            origin: origin.to_string(),
            prefix: prefix.to_string(),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl TransportFactory for StubTransports {
    fn create(&self, base_url: &str) -> KernelKitResult<Transport> {
        self.requested.lock().unwrap().push(base_url.to_string());
        let target = if base_url == LOCAL_ENDPOINT {
            format!("{}{}/v1/", self.origin, self.prefix)
        } else {
            format!("{}/", self.origin)
        };
        ReqwestTransportFactory::new().create(&target)
    }
}

/// Returns queued settings one per load
pub struct SequenceSettings {
    queue: Mutex<VecDeque<Settings>>,
}

impl SequenceSettings {
    pub fn new(settings: Vec<Settings>) -> Self {
        Self {
            queue: Mutex::new(settings.into()),
        }
    }
}

impl SettingsSource for SequenceSettings {
    fn load(&self) -> Result<Settings, SettingsError> {
        Ok(self
            .queue
            .lock()
            .unwrap()
            .pop_front()
            .expect("no settings left in sequence"))
    }
}
