//! Canned transport shared by the client tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gh_records::github::{HttpError, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use gh_records::{GitHubClient, GitHubClientBuilder};

pub const API: &str = "https://api.test";

#[derive(Default)]
struct State {
    routes: HashMap<(HttpMethod, String), HttpResponse>,
    seen: Vec<HttpRequest>,
}

/// Serves fixed responses keyed by method and full URL.
#[derive(Clone, Default)]
pub struct CannedTransport {
    state: Arc<Mutex<State>>,
}

impl CannedTransport {
    pub fn route(&self, method: HttpMethod, path: &str, response: HttpResponse) {
        self.state
            .lock()
            .unwrap()
            .routes
            .insert((method, format!("{API}{path}")), response);
    }

    pub fn json(&self, method: HttpMethod, path: &str, status: u16, body: serde_json::Value) {
        self.route(
            method,
            path,
            HttpResponse {
                status,
                headers: vec![("content-type".into(), "application/json".into())],
                body: serde_json::to_vec(&body).unwrap(),
            },
        );
    }

    pub fn seen(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().seen.clone()
    }
}

#[async_trait]
impl HttpTransport for CannedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut state = self.state.lock().unwrap();
        state.seen.push(request.clone());
        state
            .routes
            .get(&(request.method, request.url.clone()))
            .cloned()
            .ok_or_else(|| HttpError::Transport(format!("no route for {}", request.url)))
    }
}

pub fn client() -> (GitHubClient, CannedTransport) {
    let transport = CannedTransport::default();
    let client = GitHubClientBuilder::new()
        .personal_token("ghp_integration")
        .base_uri(API)
        .transport(transport.clone())
        .build()
        .unwrap();
    (client, transport)
}
