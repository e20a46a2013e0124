#![allow(dead_code)]

use async_trait::async_trait;
use axum::{ extract::State, http::{ header, HeaderMap, StatusCode }, routing::post, Router };
use github_dashboard::error::{ DashboardError, Result };
use github_dashboard::github::GraphQLTransport;
use github_dashboard::types::GraphQLError;
use serde_json::{ json, Value };
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{ Arc, Mutex };

/// Request captured by the mock GraphQL endpoint
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
}

/// In-process GraphQL endpoint that replays queued responses
pub struct MockGraphQLServer {
    addr: SocketAddr,
    state: MockState,
}

impl MockGraphQLServer {
    pub async fn start() -> anyhow::Result<Self> {
        let state = MockState::default();
        let app = Router::new().route("/graphql", post(handle_graphql)).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(MockGraphQLServer { addr, state })
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/graphql", self.addr)
    }

    pub fn respond_json(&self, body: Value) {
        self.respond_raw(StatusCode::OK, body.to_string());
    }

    pub fn respond_raw(&self, status: StatusCode, body: impl Into<String>) {
        self.state.responses.lock().unwrap().push_back((status, body.into()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn handle_graphql(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });

    let (status, body) = state.responses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((StatusCode::INTERNAL_SERVER_ERROR, "no response queued".to_string()));

    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

/// Transport double that returns scripted results in order and records calls
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_data(&self, data: Value) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(data));
        self
    }

    pub fn push_graphql_error(&self, message: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(DashboardError::GraphQL(vec![graphql_error(message)])));
        self
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphQLTransport for ScriptedTransport {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value> {
        self.calls.lock().unwrap().push((document.to_string(), variables));
        self.responses.lock().unwrap().pop_front().unwrap_or(Err(DashboardError::MissingData))
    }
}

pub fn graphql_error(message: &str) -> GraphQLError {
    GraphQLError {
        message: message.to_string(),
        kind: None,
        path: None,
    }
}

/// Repository node as returned by the list query
pub fn repo_node(id: &str, name: &str, starred: bool, commits: Option<u64>) -> Value {
    let git_ref = match commits {
        Some(count) => json!({ "target": { "history": { "totalCount": count } } }),
        None => Value::Null,
    };

    json!({
        "name": name,
        "openIssues": { "totalCount": 4 },
        "openPRs": { "totalCount": 2 },
        "ref": git_ref,
        "viewerHasStarred": starred,
        "id": id,
    })
}

pub fn list_data(viewer: &str, total_count: u64, nodes: Vec<Value>) -> Value {
    json!({
        "viewer": {
            "name": viewer,
            "repositories": {
                "totalCount": total_count,
                "nodes": nodes,
            }
        }
    })
}

pub fn star_data(key: &str, name: &str, starred: bool) -> Value {
    json!({ key: { "repo": { "name": name, "viewerHasStarred": starred } } })
}
