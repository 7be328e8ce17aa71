use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One request as seen by the stub backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
	pub method: String,
	pub path: String,
	pub query: Option<String>,
	pub content_type: Option<String>,
	pub body: String,
}

#[derive(Debug, Default)]
struct StubState {
	requests: Mutex<Vec<RecordedRequest>>,
	responses: Mutex<VecDeque<(StatusCode, Value)>>,
}

/// In-process stand-in for the e-store backend.
///
/// Responses are scripted per test (FIFO); every request is recorded. When the
/// script runs dry, the stub answers `200 {}`.
#[derive(Debug, Clone)]
pub struct StubStore {
	base_url: String,
	state: Arc<StubState>,
}

impl StubStore {
	pub async fn spawn() -> super::Result<Self> {
		super::init_tracing();

		let state = Arc::new(StubState::default());
		let app = Router::new().fallback(record_handler).with_state(state.clone());
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		Ok(Self {
			base_url: format!("http://{addr}"),
			state,
		})
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Absolute URL for a path on the stub.
	pub fn url(&self, path: &str) -> String {
		format!("{}/{}", self.base_url, path.trim_start_matches('/'))
	}

	/// Queue the next scripted response.
	pub fn respond_with(&self, status: StatusCode, body: Value) {
		self.state.responses.lock().unwrap().push_back((status, body));
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.state.requests.lock().unwrap().clone()
	}
}

async fn record_handler(
	State(state): State<Arc<StubState>>,
	method: Method,
	uri: Uri,
	headers: HeaderMap,
	body: Bytes,
) -> Response {
	let recorded = RecordedRequest {
		method: method.to_string(),
		path: uri.path().to_string(),
		query: uri.query().map(ToString::to_string),
		content_type: headers
			.get(header::CONTENT_TYPE)
			.and_then(|v| v.to_str().ok())
			.map(ToString::to_string),
		body: String::from_utf8_lossy(&body).into_owned(),
	};
	state.requests.lock().unwrap().push(recorded);

	let scripted = state.responses.lock().unwrap().pop_front();
	let (status, body) = scripted.unwrap_or((StatusCode::OK, Value::Object(Default::default())));

	(status, [(header::CONTENT_TYPE, "application/json")], body.to_string()).into_response()
}
