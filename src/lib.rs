//! Client for the AuroraDNS hosting API
//!
//! Supported features:
//! - Zone and record CRUD over HTTPS
//! - HMAC-SHA256 request signing via a substitutable transport decorator
//! - Asynchronous operations
//!
//! # Example
//! ```no_run
//! use auroradns::Client;
//!
//! # async fn run() -> Result<(), auroradns::Error> {
//! let client = Client::new("your-api-key", "your-secret")?;
//!
//! let zone = client.create_zone("example.com").await?;
//! let records = client.list_records(zone.id.as_deref().unwrap_or_default()).await?;
//! # Ok(())
//! # }
//! ```

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

pub(crate) mod utils;
pub mod auth;
pub mod client;
pub mod error;
pub mod records;
pub mod zones;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{DATE_HEADER, SigningTransport};
pub use client::{Client, DEFAULT_BASE_URL};
pub use error::{ApiError, Error};
pub use records::{Record, RecordType};
pub use utils::request::{DefaultExecutor, HttpExecutor};
pub use zones::Zone;
