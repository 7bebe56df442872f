// Copyright 2025 auroradns authors
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use log::debug;
use reqwest::header::{CONTENT_TYPE, HeaderValue, USER_AGENT};
use reqwest::{Method, Request, Response, Url};
use serde::de::DeserializeOwned;

use crate::auth::SigningTransport;
use crate::error::{ApiError, Error};
use crate::utils::request::HttpExecutor;

/// Production endpoint of the AuroraDNS API.
pub const DEFAULT_BASE_URL: &str = "https://api.auroradns.eu";

const CONTENT_TYPE_JSON: &str = "application/json";

/// The API client.
///
/// All calls go through the configured [`HttpExecutor`]; by default that is
/// a [`SigningTransport`] over a plain reqwest client, so every request is
/// signed before it leaves the process.
pub struct Client<T: HttpExecutor = SigningTransport> {
    base_url: String,
    user_agent: Option<String>,
    transport: T,
}

impl Client<SigningTransport> {
    /// Creates a client that signs requests with the given credentials.
    pub fn new(api_key: &str, secret: &str) -> Result<Self, Error> {
        Ok(Self::with_transport(SigningTransport::new(api_key, secret)?))
    }
}

impl<T: HttpExecutor> Client<T> {
    /// Creates a client over a custom execution capability.
    pub fn with_transport(transport: T) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: None,
            transport,
        }
    }

    /// Points the client at a custom base URL. An empty string leaves the
    /// default in place.
    pub fn with_base_url(mut self, raw_base_url: &str) -> Result<Self, Error> {
        if raw_base_url.is_empty() {
            return Ok(self);
        }

        Url::parse(raw_base_url)?;
        self.base_url = raw_base_url.trim_end_matches('/').to_owned();

        Ok(self)
    }

    /// Sets the `User-Agent` header sent with every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub(crate) async fn request_json<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<R, Error> {
        let response = self.dispatch(method, path, body).await?;
        let text = response.text().await?;

        Ok(serde_json::from_str(&text)?)
    }

    pub(crate) async fn request_empty(&self, method: Method, path: &str) -> Result<(), Error> {
        self.dispatch(method, path, None).await?;

        Ok(())
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<Response, Error> {
        let url = Url::parse(&format!("{}{}", self.base_url, path))?;
        debug!("{method} {url}");

        let mut request = Request::new(method, url);

        let headers = request.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        if let Some(user_agent) = &self.user_agent {
            headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
        }

        if let Some(body) = body {
            *request.body_mut() = Some(body.into());
        }

        let response = self.transport.execute(request).await?;

        check_response(response).await
    }
}

/// Passes 2xx responses through; decodes anything else into an error.
async fn check_response(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let data = response.text().await?;
    match serde_json::from_str::<ApiError>(&data) {
        Ok(err) => {
            debug!("API error: {err}");
            Err(Error::Api(err))
        }
        Err(_) => Err(Error::Status(status)),
    }
}
