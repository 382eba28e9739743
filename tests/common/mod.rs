#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::task::JoinHandle;

use huelio_console::client::HttpBackend;
use huelio_console::runtime::Console;
use huelio_console::storage::MemoryStore;
use huelio_console::{AppState, ConsoleMode, Theme};

/// Canned reply for one search term.
#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: String,
    delay: Duration,
}

/// One POST received by the stub.
#[derive(Debug, Clone)]
pub struct Submission {
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[derive(Default)]
struct StubState {
    replies: HashMap<String, Reply>,
    queries: Vec<String>,
    submissions: Vec<Submission>,
    reject: Option<(StatusCode, String)>,
}

/// Scriptable stand-in for the huelio service.
#[derive(Clone, Default)]
pub struct Stub {
    inner: Arc<Mutex<StubState>>,
}

impl Stub {
    pub fn respond(&self, term: &str, body: &str) {
        self.respond_with(term, StatusCode::OK, body, Duration::ZERO);
    }

    pub fn respond_slow(&self, term: &str, body: &str, delay: Duration) {
        self.respond_with(term, StatusCode::OK, body, delay);
    }

    pub fn respond_with(&self, term: &str, status: StatusCode, body: &str, delay: Duration) {
        self.inner.lock().unwrap().replies.insert(
            term.to_string(),
            Reply {
                status,
                body: body.to_string(),
                delay,
            },
        );
    }

    pub fn reject_submissions(&self, status: StatusCode, body: &str) {
        self.inner.lock().unwrap().reject = Some((status, body.to_string()));
    }

    pub fn queries(&self) -> Vec<String> {
        self.inner.lock().unwrap().queries.clone()
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.inner.lock().unwrap().submissions.clone()
    }
}

async fn query(State(stub): State<Stub>, Query(params): Query<HashMap<String, String>>) -> Response {
    let term = params.get("query").cloned().unwrap_or_default();
    let reply = {
        let mut state = stub.inner.lock().unwrap();
        state.queries.push(term.clone());
        state.replies.get(&term).cloned().unwrap_or(Reply {
            status: StatusCode::OK,
            body: "[]".to_string(),
            delay: Duration::ZERO,
        })
    };

    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }
    (reply.status, [(CONTENT_TYPE, "application/json")], reply.body).into_response()
}

async fn submit(State(stub): State<Stub>, headers: HeaderMap, body: Bytes) -> Response {
    let reject = {
        let mut state = stub.inner.lock().unwrap();
        state.submissions.push(Submission {
            content_type: headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body,
        });
        state.reject.clone()
    };

    match reject {
        Some((status, body)) => (status, body).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

/// Stub server bound to an ephemeral port; shut down on drop.
pub struct StubServer {
    pub base_url: String,
    pub stub: Stub,
    handle: JoinHandle<()>,
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub async fn spawn_stub() -> StubServer {
    let stub = Stub::default();
    let app = Router::new()
        .route("/api/", get(query).post(submit))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubServer {
        base_url: format!("http://{addr}/api/"),
        stub,
        handle,
    }
}

pub type TestConsole = Console<HttpBackend, MemoryStore>;

/// Builds a console talking to `server` with a short debounce.
pub fn console(server: &StubServer, hide_welcome: bool) -> (TestConsole, MemoryStore) {
    let backend = HttpBackend::new(&server.base_url, Some(Duration::from_secs(5))).unwrap();
    let store = MemoryStore::new();
    let state = AppState::new(Theme::default(), Duration::from_millis(20), hide_welcome);
    (Console::new(state, backend, store.clone()), store)
}

pub fn type_text(console: &mut TestConsole, text: &str) {
    for c in text.chars() {
        console.dispatch(huelio_console::Event::Char(c));
    }
}

/// Steps the console until the latest query has been answered.
pub async fn await_results(console: &mut TestConsole) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while console.state().mode != ConsoleMode::ResultsShown {
            console.step().await;
        }
    })
    .await
    .expect("query did not complete");
}

/// Steps the console once, failing after a timeout.
pub async fn step(console: &mut TestConsole) -> bool {
    tokio::time::timeout(Duration::from_secs(5), console.step())
        .await
        .expect("no event arrived")
}
