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

use reqwest::StatusCode;
use reqwest::header::InvalidHeaderValue;
use serde::Deserialize;

/// An API error message as returned by AuroraDNS.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, thiserror::Error)]
#[error("{code} - {message}")]
pub struct ApiError {
    #[serde(rename = "error")]
    pub code: String,
    #[serde(rename = "errormsg")]
    pub message: String,
}

/// Errors produced by the client and its transport.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API key or the secret was empty at construction time.
    #[error("missing credentials: API key and secret must not be empty")]
    MissingCredentials,

    /// A structured error returned by the API on a non-2xx response.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A non-2xx response whose body was not a structured API error.
    #[error("unexpected status code: {0}")]
    Status(StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error(transparent)]
    Header(#[from] InvalidHeaderValue),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = ApiError {
            code: "AuthenticationRequiredError".to_string(),
            message: "Failed to parse Authorization header".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "AuthenticationRequiredError - Failed to parse Authorization header"
        );
    }

    #[test]
    fn api_error_from_body() {
        let body = r#"{"error": "ZoneDoesNotExistError", "errormsg": "Zone does not exist"}"#;

        let err: ApiError = serde_json::from_str(body).unwrap();
        assert_eq!(err.code, "ZoneDoesNotExistError");
        assert_eq!(err.message, "Zone does not exist");
    }
}
