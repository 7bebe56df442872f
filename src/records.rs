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

/// Record types supported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    NS,
    SOA,
    SRV,
    TXT,
    DS,
    PTR,
    SSHFP,
    // The API spells TLSA without the trailing A.
    #[serde(rename = "TLS")]
    TLSA,
}

/// A DNS record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub name: String,
    /// Record payload. Absent in some list responses.
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl<T: HttpExecutor> Client<T> {
    /// Creates a new record in the given zone.
    pub async fn create_record(&self, zone_id: &str, record: Record) -> Result<Record, Error> {
        let body = serde_json::to_string(&record)?;

        self.request_json(Method::POST, &format!("/zones/{zone_id}/records"), Some(body))
            .await
    }

    /// Deletes a record.
    pub async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<(), Error> {
        self.request_empty(
            Method::DELETE,
            &format!("/zones/{zone_id}/records/{record_id}"),
        )
        .await
    }

    /// Returns all records in the given zone.
    pub async fn list_records(&self, zone_id: &str) -> Result<Vec<Record>, Error> {
        self.request_json(Method::GET, &format!("/zones/{zone_id}/records"), None)
            .await
    }
}
