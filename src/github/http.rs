//! Transport seam for all HTTP I/O
//!
//! Managers never talk to reqwest directly; they hand an [`HttpRequest`] to
//! whatever [`HttpTransport`] the client was built with. A transport returns
//! every response it receives, whatever the status; the client decides what
//! counts as failure.

use async_trait::async_trait;
use thiserror::Error;

/// Verbs used by the GitHub REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header name/value pairs in wire order.
pub type HttpHeaders = Vec<(String, String)>;

/// Case-insensitive lookup of the first header named `name`.
#[must_use]
pub fn header_get<'a>(headers: &'a HttpHeaders, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find_map(|(k, v)| k.eq_ignore_ascii_case(name).then_some(v.as_str()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL including the query string
    pub url: String,
    pub headers: HttpHeaders,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HttpHeaders,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        header_get(&self.headers, name)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text; invalid UTF-8 is replaced.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The request produced no response at all.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("http transport error: {0}")]
    Transport(String),

    #[error("request timed out: {0}")]
    Timeout(String),
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

pub mod reqwest_transport {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::{HttpError, HttpHeaders, HttpMethod, HttpRequest, HttpResponse, HttpTransport};

    impl From<HttpMethod> for reqwest::Method {
        fn from(method: HttpMethod) -> Self {
            match method {
                HttpMethod::Get => Self::GET,
                HttpMethod::Post => Self::POST,
                HttpMethod::Put => Self::PUT,
                HttpMethod::Patch => Self::PATCH,
                HttpMethod::Delete => Self::DELETE,
            }
        }
    }

    impl From<reqwest::Error> for HttpError {
        fn from(e: reqwest::Error) -> Self {
            if e.is_timeout() {
                Self::Timeout(e.to_string())
            } else {
                Self::Transport(e.to_string())
            }
        }
    }

    /// Production transport over a shared `reqwest::Client` (rustls).
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new(client: reqwest::Client) -> Self {
            Self { client }
        }

        /// Client with a whole-request timeout; redirects are followed.
        pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
            let client = reqwest::Client::builder().timeout(timeout).build()?;
            Ok(Self::new(client))
        }
    }

    #[async_trait]
    impl HttpTransport for ReqwestTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            let HttpRequest {
                method,
                url,
                headers,
                body,
            } = request;

            let builder = headers.iter().fold(
                self.client.request(method.into(), &url),
                |builder, (name, value)| builder.header(name, value),
            );
            let builder = if body.is_empty() { builder } else { builder.body(body) };

            let response = builder.send().await?;
            let status = response.status().as_u16();
            // Non-UTF-8 header values never occur in GitHub responses; skip them.
            let headers: HttpHeaders = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    Some((name.as_str().to_string(), value.to_str().ok()?.to_string()))
                })
                .collect();
            let body = response.bytes().await?.to_vec();

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }
}

#[cfg(test)]
pub use mock::MockTransport;

#[cfg(test)]
mod mock {
    use std::collections::{HashMap, VecDeque};
    use std::sync::{Arc, Mutex, MutexGuard};

    use async_trait::async_trait;

    use super::{HttpError, HttpMethod, HttpRequest, HttpResponse, HttpTransport};

    type Route = (HttpMethod, String);

    /// Replays queued responses per method and URL and records every request.
    #[derive(Clone, Default)]
    pub struct MockTransport {
        state: Arc<Mutex<MockState>>,
    }

    #[derive(Default)]
    struct MockState {
        queued: HashMap<Route, VecDeque<HttpResponse>>,
        requests: Vec<HttpRequest>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        fn state(&self) -> MutexGuard<'_, MockState> {
            self.state.lock().expect("mock transport lock poisoned")
        }

        /// Queue a response; repeated routes are served in order.
        pub fn push_response(&self, method: HttpMethod, url: impl Into<String>, response: HttpResponse) {
            self.state()
                .queued
                .entry((method, url.into()))
                .or_default()
                .push_back(response);
        }

        pub fn push_json(
            &self,
            method: HttpMethod,
            url: impl Into<String>,
            status: u16,
            body: serde_json::Value,
        ) {
            self.push_response(method, url, HttpResponse::json(status, &body));
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.state().requests.clone()
        }

        pub fn last_request(&self) -> Option<HttpRequest> {
            self.state().requests.last().cloned()
        }
    }

    impl HttpResponse {
        pub fn json(status: u16, body: &serde_json::Value) -> Self {
            Self::empty(status)
                .with_header("Content-Type", "application/json")
                .with_body(body.to_string())
        }

        pub fn empty(status: u16) -> Self {
            Self {
                status,
                headers: Vec::new(),
                body: Vec::new(),
            }
        }

        pub fn with_header(mut self, name: &str, value: &str) -> Self {
            self.headers.push((name.to_string(), value.to_string()));
            self
        }

        fn with_body(mut self, body: String) -> Self {
            self.body = body.into_bytes();
            self
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            let mut state = self.state();
            let route = (request.method, request.url.clone());
            state.requests.push(request);
            state
                .queued
                .get_mut(&route)
                .and_then(VecDeque::pop_front)
                .ok_or_else(|| {
                    HttpError::Transport(format!("no response queued for {} {}", route.0, route.1))
                })
        }
    }
}
