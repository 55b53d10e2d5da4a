//! Fake reviews API server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves `GET /reviews` with whatever status and body the test
//! configured, counts the requests it has seen and remembers the last
//! `Accept` header.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeReviewsApi::start().await.unwrap();
//! api.respond(200, PAYLOAD_BASIC).await;
//! let source = HttpSource::new(api.endpoint()).unwrap();
//! ```

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// State shared between the router and test code.
struct ApiState {
    status: u16,
    body: String,
    requests: usize,
    accept: Option<String>,
}

/// Handle to the running fake reviews API.
pub struct FakeReviewsApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeReviewsApi {
    /// Start the server on a random port, answering `200 []` until told
    /// otherwise. Returns once the server is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState {
            status: 200,
            body: "[]".to_string(),
            requests: 0,
            accept: None,
        }));

        let app = Router::new()
            .route("/reviews", get(reviews))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Full URL of the reviews endpoint.
    pub fn endpoint(&self) -> String {
        format!("http://{}/reviews", self.addr)
    }

    /// Set the status and body of every following response.
    pub async fn respond(&self, status: u16, body: &str) {
        let mut state = self.state.lock().await;
        state.status = status;
        state.body = body.to_string();
    }

    /// `Accept` header of the most recent request.
    pub async fn last_accept(&self) -> Option<String> {
        self.state.lock().await.accept.clone()
    }

    /// Number of requests served so far.
    pub async fn requests(&self) -> usize {
        self.state.lock().await.requests
    }
}

async fn reviews(
    State(state): State<Arc<Mutex<ApiState>>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let mut state = state.lock().await;
    state.requests += 1;
    state.accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let status = StatusCode::from_u16(state.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}
