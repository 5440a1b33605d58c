//! In-memory [`Transport`] for API-backed tests.
//!
//! Routes are keyed by endpoint path, optionally narrowed to one value of
//! a query parameter (e.g. `id=7`). List routes honour the `Range` header
//! and answer with a `Content-Range` the way the backend does.

use pubassist_runtime::{ApiRequest, ApiResponse, Result, Transport};
use pubassist_types::ContentRange;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone)]
enum Body {
    Json(Value),
    List(Vec<Value>),
    Fail(u16),
}

#[derive(Debug, Clone)]
struct Route {
    path: String,
    param: Option<(String, String)>,
    body: Body,
}

impl Route {
    fn matches(&self, request: &ApiRequest) -> bool {
        if self.path != request.path {
            return false;
        }
        match &self.param {
            Some((key, value)) => request.query_value(key) == Some(value.as_str()),
            None => true,
        }
    }
}

#[derive(Debug, Default)]
struct State {
    routes: Vec<Route>,
    requests: Vec<ApiRequest>,
}

/// Scripted API. Clones share routes and the request log.
#[derive(Debug, Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<State>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with a fixed JSON document.
    pub fn with_json(self, path: &str, body: Value) -> Self {
        self.route(path, None, Body::Json(body))
    }

    /// Answer `path` with a fixed JSON document when `key=value` is in the query.
    pub fn with_json_for(self, path: &str, key: &str, value: impl ToString, body: Value) -> Self {
        self.route(path, Some((key, value.to_string())), Body::Json(body))
    }

    /// Serve `items` as a ranged list on `path`.
    pub fn with_list(self, path: &str, items: Vec<Value>) -> Self {
        self.route(path, None, Body::List(items))
    }

    pub fn with_list_for(
        self,
        path: &str,
        key: &str,
        value: impl ToString,
        items: Vec<Value>,
    ) -> Self {
        self.route(path, Some((key, value.to_string())), Body::List(items))
    }

    /// Answer `path` with an error status.
    pub fn failing(self, path: &str, status: u16) -> Self {
        self.route(path, None, Body::Fail(status))
    }

    pub fn failing_for(self, path: &str, key: &str, value: impl ToString, status: u16) -> Self {
        self.route(path, Some((key, value.to_string())), Body::Fail(status))
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self, path: &str) -> usize {
        self.lock()
            .requests
            .iter()
            .filter(|request| request.path == path)
            .count()
    }

    fn route(self, path: &str, param: Option<(&str, String)>, body: Body) -> Self {
        {
            let mut state = self.lock();
            let param = param.map(|(key, value)| (key.to_string(), value));
            // most recent definition wins
            state
                .routes
                .retain(|route| !(route.path == path && route.param == param));
            state.routes.push(Route {
                path: path.to_string(),
                param,
                body,
            });
        }
        self
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn respond(&self, request: ApiRequest) -> ApiResponse {
        let mut state = self.lock();

        // parameterised routes take precedence over the bare path
        let body = state
            .routes
            .iter()
            .filter(|route| route.matches(&request))
            .max_by_key(|route| route.param.is_some())
            .map(|route| route.body.clone());

        let response = match body {
            None => ApiResponse {
                status: 404,
                content_range: None,
                body: String::new(),
            },
            Some(Body::Fail(status)) => ApiResponse {
                status,
                content_range: None,
                body: "scripted failure".to_string(),
            },
            Some(Body::Json(value)) => ApiResponse {
                status: 200,
                content_range: None,
                body: value.to_string(),
            },
            Some(Body::List(items)) => slice(&items, &request),
        };

        state.requests.push(request);
        response
    }
}

fn slice(items: &[Value], request: &ApiRequest) -> ApiResponse {
    let total = items.len();
    let Some(range) = request.range else {
        return ApiResponse {
            status: 200,
            content_range: None,
            body: Value::Array(items.to_vec()).to_string(),
        };
    };

    // the backend clamps its exclusive end to the total and then reports
    // that bound plus one, even for empty or out-of-range slices
    let end = (range.end + 1).min(total);
    let page = &items[range.start.min(end)..end];
    let content_range = ContentRange::items(range.start, end + 1, Some(total)).to_string();

    ApiResponse {
        status: 200,
        content_range: Some(content_range),
        body: Value::Array(page.to_vec()).to_string(),
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        Ok(self.respond(request))
    }
}
