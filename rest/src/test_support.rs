use std::{
    io,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{header::CONTENT_TYPE, request, response, Method, Request},
    response::Response,
};
use serde_json::{json, Value};
use tracing::subscriber::DefaultGuard;
use url::Url;

use crate::{config::Config, AppState};

/// Canned answer of [`FakeNotion`].
#[derive(Clone)]
pub enum Reply {
    Json(u16, Value),
    Fail(&'static str),
}

#[derive(Debug, Clone)]
pub struct Captured {
    pub method: Method,
    pub url: String,
    pub body: Value,
}

/// In-memory Notion that records every request it receives.
pub struct FakeNotion {
    reply: Reply,
    calls: Mutex<Vec<Captured>>,
}

impl FakeNotion {
    pub fn calls(&self) -> Vec<Captured> {
        return self.calls.lock().unwrap().clone();
    }
}

#[async_trait]
impl notion_api::Client for FakeNotion {
    fn url(&self, endpoint: &str) -> Result<Url, notion_api::Error> {
        return Ok(Url::parse("https://api.notion.test/")?.join(endpoint)?);
    }

    async fn exec(
        &self,
        request: request::Builder,
        body: Vec<u8>,
    ) -> Result<response::Response<Bytes>, notion_api::Error> {
        let request = request.body(body)?;
        self.calls.lock().unwrap().push(Captured {
            method: request.method().clone(),
            url: request.uri().to_string(),
            body: serde_json::from_slice(request.body())?,
        });

        return match &self.reply {
            Reply::Json(status, body) => Ok(response::Response::builder()
                .status(*status)
                .body(Bytes::from(serde_json::to_vec(body)?))?),
            Reply::Fail(reason) => Err(anyhow::anyhow!(*reason).into()),
        };
    }
}

pub fn config(database_id: Option<&str>) -> Config {
    return Config {
        notion_api_key: "secret_test".to_owned(),
        database_id: database_id.map(str::to_owned),
        addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        allowed_origins: vec!["http://localhost:3000".to_owned()],
    };
}

pub fn app_state(database_id: Option<&str>, reply: Reply) -> (AppState, Arc<FakeNotion>) {
    let notion = Arc::new(FakeNotion {
        reply,
        calls: Mutex::new(Vec::new()),
    });
    let state = AppState {
        config: Arc::new(config(database_id)),
        notion: notion.clone(),
    };
    return (state, notion);
}

pub fn sample_trade() -> Value {
    return json!({
        "name": "EURUSD long",
        "author": "alice",
        "datetime": "2024-01-15T10:00:00Z",
        "pnl": 125.50,
        "currencyPair": "EUR/USD"
    });
}

pub fn post_trade(body: Value) -> Request<Body> {
    return Request::builder()
        .method(Method::POST)
        .uri("/trades")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
}

pub async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    return serde_json::from_slice(&bytes).unwrap();
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        return Ok(buf.len());
    }

    fn flush(&mut self) -> io::Result<()> {
        return Ok(());
    }
}

/// Log lines emitted on the current thread while this value is alive.
pub struct CapturedLogs {
    buffer: LogBuffer,
    _guard: DefaultGuard,
}

impl CapturedLogs {
    pub fn contents(&self) -> String {
        return String::from_utf8_lossy(&self.buffer.0.lock().unwrap()).into_owned();
    }
}

pub fn capture_logs() -> CapturedLogs {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    return CapturedLogs {
        buffer,
        _guard: guard,
    };
}
