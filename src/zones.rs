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

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::utils::request::HttpExecutor;
use crate::utils::serde_utils::is_none_or_empty;

/// A DNS zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub id: Option<String>,
    pub name: String,
}

impl<T: HttpExecutor> Client<T> {
    /// Creates a zone.
    pub async fn create_zone(&self, domain: &str) -> Result<Zone, Error> {
        let body = serde_json::to_string(&Zone {
            id: None,
            name: domain.to_owned(),
        })?;

        self.request_json(Method::POST, "/zones", Some(body)).await
    }

    /// Deletes a zone.
    pub async fn delete_zone(&self, zone_id: &str) -> Result<(), Error> {
        self.request_empty(Method::DELETE, &format!("/zones/{zone_id}"))
            .await
    }

    /// Returns all zones.
    pub async fn list_zones(&self) -> Result<Vec<Zone>, Error> {
        self.request_json(Method::GET, "/zones", None).await
    }
}
