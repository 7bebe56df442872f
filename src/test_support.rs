use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, Request, Response, Url};

use crate::error::Error;
use crate::utils::request::HttpExecutor;

/// A request as captured by [`StubExecutor`].
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl RecordedRequest {
    pub fn body_str(&self) -> &str {
        std::str::from_utf8(self.body.as_deref().unwrap_or_default()).unwrap()
    }
}

/// Executor test double: captures every request and answers with a canned
/// status and body.
pub(crate) struct StubExecutor {
    status: u16,
    body: &'static str,
    pub requests: Mutex<Vec<RecordedRequest>>,
}

impl StubExecutor {
    pub fn new(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns the only captured request, panicking if there was not
    /// exactly one.
    pub fn single_request(&self) -> RecordedRequest {
        let mut requests = self.requests.lock().unwrap();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }
}

#[async_trait]
impl HttpExecutor for StubExecutor {
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        let body = request
            .body()
            .and_then(|body| body.as_bytes())
            .map(<[u8]>::to_vec);

        self.requests.lock().unwrap().push(RecordedRequest {
            method: request.method().clone(),
            url: request.url().clone(),
            headers: request.headers().clone(),
            body,
        });

        let response = http::Response::builder()
            .status(self.status)
            .body(self.body.to_string())
            .expect("stub response is well-formed");

        Ok(Response::from(response))
    }
}
