use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Request, Response};

use crate::error::Error;

/// The request-execution capability every layer talks through.
///
/// Implemented by the plain reqwest-backed [`DefaultExecutor`], by the
/// signing transport that decorates one, and by test doubles.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response, Error>;
}

#[async_trait]
impl<T: HttpExecutor + ?Sized> HttpExecutor for Arc<T> {
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        (**self).execute(request).await
    }
}

/// Executor backed by a plain `reqwest::Client`.
pub struct DefaultExecutor {
    inner: Client,
}

impl DefaultExecutor {
    pub fn new() -> Self {
        Self {
            inner: Client::new(),
        }
    }
}

impl Default for DefaultExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpExecutor for DefaultExecutor {
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        Ok(self.inner.execute(request).await?)
    }
}
