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

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Request, Response};
use sha2::Sha256;

use crate::error::Error;
use crate::utils::request::{DefaultExecutor, HttpExecutor};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the signing timestamp.
pub const DATE_HEADER: &str = "X-AuroraDNS-Date";

const TOKEN_SCHEME: &str = "AuroraDNSv1";

/// Compact ISO-8601 basic format, second precision: `20240101T120000Z`.
const DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Transport decorator that signs every request before forwarding it.
///
/// Each request gets an `X-AuroraDNS-Date` header with the current UTC
/// instant and an `Authorization: AuroraDNSv1 <signature>` header, where
/// the signature is the hex-encoded HMAC-SHA256 of the canonical string
/// under the account secret. The wrapped executor then performs the actual
/// network call; its response and errors pass through untouched.
pub struct SigningTransport<T: HttpExecutor = DefaultExecutor> {
    api_key: String,
    secret: String,
    clock: fn() -> DateTime<Utc>,
    inner: T,
}

impl SigningTransport<DefaultExecutor> {
    /// Creates a signing transport over the default reqwest-backed executor.
    ///
    /// Fails with [`Error::MissingCredentials`] if either credential is empty.
    pub fn new(api_key: &str, secret: &str) -> Result<Self, Error> {
        Self::with_executor(api_key, secret, DefaultExecutor::new())
    }
}

impl<T: HttpExecutor> SigningTransport<T> {
    /// Creates a signing transport over a custom executor.
    pub fn with_executor(api_key: &str, secret: &str, executor: T) -> Result<Self, Error> {
        if api_key.is_empty() || secret.is_empty() {
            return Err(Error::MissingCredentials);
        }

        Ok(Self {
            api_key: api_key.to_owned(),
            secret: secret.to_owned(),
            clock: Utc::now,
            inner: executor,
        })
    }

    /// Signs a request in place, replacing any previous signature headers.
    fn sign(&self, request: &mut Request) -> Result<(), Error> {
        let timestamp = (self.clock)().format(DATE_FORMAT).to_string();
        let message = format!(
            "{} {} {} {}",
            self.api_key,
            request.method(),
            request.url().path(),
            timestamp
        );

        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(message.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        let headers = request.headers_mut();
        headers.insert(DATE_HEADER, HeaderValue::from_str(&timestamp)?);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("{TOKEN_SCHEME} {signature}"))?,
        );

        Ok(())
    }
}

#[async_trait]
impl<T: HttpExecutor> HttpExecutor for SigningTransport<T> {
    async fn execute(&self, mut request: Request) -> Result<Response, Error> {
        self.sign(&mut request)?;
        self.inner.execute(request).await
    }
}
