//! A single pending API request and its response decoding
//!
//! Every manager method returns an [`ApiCall`]. Nothing is sent until one of
//! the `send*` methods is awaited, so callers pick the output shape at the
//! call site:
//!
//! ```rust,no_run
//! use gh_records::{GitHubClient, ResponseFormat};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gh = GitHubClient::with_token("ghp_...")?;
//!
//! // Hydrated record (default)
//! let issue = gh.issues("rust-lang", "rust").get(1).send().await?;
//!
//! // Raw JSON or raw text
//! let raw = gh.issues("rust-lang", "rust").get(1).json().await?;
//! let text = gh.issues("rust-lang", "rust").get(1).send_as(ResponseFormat::Text).await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::github::client::GitHubClient;
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::http::{HttpMethod, HttpResponse};
use crate::github::pagination::{ListOptions, MAX_PER_PAGE, Page, parse_link_header};
use crate::github::util::QueryPairs;
use crate::hydrate::{Hydrate, hydrate_list};
use crate::runtime::AsyncStream;

/// Turns a successful response body into the call's output type.
pub type Decoder<T> = fn(&[u8]) -> GitHubResult<T>;

/// Output shape selected per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResponseFormat {
    /// Hydrated typed record
    #[default]
    Record,
    /// Parsed but untyped JSON
    Json,
    /// Raw response text
    Text,
}

/// Response in the shape chosen by [`ResponseFormat`].
#[derive(Debug, Clone, PartialEq)]
pub enum Formatted<T> {
    Record(T),
    Json(Value),
    Text(String),
}

impl<T> Formatted<T> {
    #[must_use]
    pub fn into_record(self) -> Option<T> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// A request that has been built but not sent.
#[must_use = "an ApiCall does nothing until one of its send methods is awaited"]
pub struct ApiCall<T> {
    client: GitHubClient,
    method: HttpMethod,
    path: String,
    query: QueryPairs,
    body: Vec<u8>,
    error: Option<GitHubError>,
    decode: Decoder<T>,
}

impl<T> std::fmt::Debug for ApiCall<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCall")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

impl<T> ApiCall<T> {
    pub(crate) fn new(
        client: GitHubClient,
        method: HttpMethod,
        path: impl Into<String>,
        decode: Decoder<T>,
    ) -> Self {
        Self {
            client,
            method,
            path: path.into(),
            query: QueryPairs::new(),
            body: Vec::new(),
            error: None,
            decode,
        }
    }

    #[must_use]
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Path relative to the client's base URI.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn query(mut self, pairs: QueryPairs) -> Self {
        self.query.extend(pairs);
        self
    }

    pub(crate) fn list_options(mut self, options: &ListOptions) -> Self {
        match options.validate() {
            Ok(()) => options.append_to(&mut self.query),
            Err(e) => self.error = Some(e),
        }
        self
    }

    /// Serialize `body` as the JSON request body.
    pub(crate) fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        match serde_json::to_vec(body) {
            Ok(bytes) => self.body = bytes,
            Err(e) => self.error = Some(e.into()),
        }
        self
    }

    /// Fail the call before it is sent.
    pub(crate) fn reject(mut self, error: GitHubError) -> Self {
        self.error.get_or_insert(error);
        self
    }

    async fn response(&mut self) -> GitHubResult<HttpResponse> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.client
            .execute(self.method, &self.path, &self.query, &self.body)
            .await
    }

    /// Send and hydrate the response.
    pub async fn send(mut self) -> GitHubResult<T> {
        let response = self.response().await?;
        (self.decode)(&response.body)
    }

    /// Send and return the response in the requested shape.
    pub async fn send_as(mut self, format: ResponseFormat) -> GitHubResult<Formatted<T>> {
        let response = self.response().await?;
        Ok(match format {
            ResponseFormat::Record => Formatted::Record((self.decode)(&response.body)?),
            ResponseFormat::Json => Formatted::Json(parse_body(&response.body)?),
            ResponseFormat::Text => Formatted::Text(response.text()),
        })
    }

    /// Send and return the parsed, untyped JSON.
    pub async fn json(mut self) -> GitHubResult<Value> {
        let response = self.response().await?;
        parse_body(&response.body)
    }

    /// Send and return the raw body text.
    pub async fn text(mut self) -> GitHubResult<String> {
        let response = self.response().await?;
        Ok(response.text())
    }

    /// Send and keep the `Link` header alongside the hydrated body.
    pub async fn send_page(mut self) -> GitHubResult<Page<T>> {
        let response = self.response().await?;
        let links = response
            .header("link")
            .map(parse_link_header)
            .unwrap_or_default();
        Ok(Page {
            items: (self.decode)(&response.body)?,
            links,
        })
    }
}

impl<E> ApiCall<Vec<E>> {
    /// Follow `rel="next"` links until the last page, concatenating items.
    pub async fn paginate(mut self) -> GitHubResult<Vec<E>> {
        let mut items = Vec::new();
        loop {
            let response = self.response().await?;
            items.extend((self.decode)(&response.body)?);
            match next_link(&response) {
                Some(next) => self.follow(next),
                None => break,
            }
        }
        Ok(items)
    }

    /// Stream items across all pages from a background task.
    ///
    /// At most one full page is buffered ahead of the consumer; the next
    /// page is fetched only once the consumer catches up. The first error
    /// ends the stream.
    pub fn stream(mut self) -> AsyncStream<GitHubResult<E>>
    where
        E: Send + 'static,
    {
        AsyncStream::spawn(usize::from(MAX_PER_PAGE), |tx| async move {
            loop {
                let page = match self.response().await {
                    Ok(response) => (self.decode)(&response.body).map(|items| (items, next_link(&response))),
                    Err(e) => Err(e),
                };
                match page {
                    Ok((items, next)) => {
                        for item in items {
                            if tx.send(Ok(item)).await.is_err() {
                                return;
                            }
                        }
                        match next {
                            Some(next) => self.follow(next),
                            None => return,
                        }
                    }
                    Err(e) => {
                        let _ = tx.send(Err(e)).await;
                        return;
                    }
                }
            }
        })
    }

    fn follow(&mut self, next: String) {
        log::trace!("following next page {next}");
        self.path = next;
        self.query.clear();
    }
}

fn next_link(response: &HttpResponse) -> Option<String> {
    response
        .header("link")
        .map(parse_link_header)
        .and_then(|links| links.next)
}

fn parse_body(body: &[u8]) -> GitHubResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(body)?)
}

/// Decode a single JSON object.
pub(crate) fn record<T: Hydrate>(body: &[u8]) -> GitHubResult<T> {
    Ok(T::from_value(&parse_body(body)?)?)
}

/// Decode a top-level JSON array.
pub(crate) fn records<T: Hydrate>(body: &[u8]) -> GitHubResult<Vec<T>> {
    Ok(hydrate_list(&parse_body(body)?)?)
}

pub(crate) fn text(body: &[u8]) -> GitHubResult<String> {
    Ok(String::from_utf8_lossy(body).into_owned())
}

/// Ignore the body (`204 No Content` endpoints).
pub(crate) fn nothing(_body: &[u8]) -> GitHubResult<()> {
    Ok(())
}
