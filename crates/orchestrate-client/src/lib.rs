//! HTTP client SDK for the Orchestrate document store.
//!
//! This crate turns key-value, search, graph and event operations into
//! requests against the versioned Orchestrate REST API and normalizes every
//! response into one success/failure contract.
//!
//! # Example
//!
//! ```no_run
//! use orchestrate_client::{OrchestrateClient, Result};
//! use serde_json::json;
//!
//! # async fn example() -> Result<()> {
//! let client = OrchestrateClient::new("your-api-key")?;
//!
//! // Create only if the key is free
//! client
//!     .put("users", "byrd@bowery.io", &json!({"name": "Byrd"}), false)
//!     .await?;
//!
//! // Read it back
//! let response = client.get("users", "byrd@bowery.io").await?;
//! println!("{} {}", response.status, response.body);
//!
//! // Remote failures carry the status and body
//! match client.get("users", "nobody").await {
//!     Err(e) if e.is_not_found() => println!("not there"),
//!     other => println!("{:?}", other),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Key-value**: `get`, `get_ref`, `list`, `put` (conditional), `remove`,
//!   `delete_collection`
//! - **Search**: `search`, or `search_builder()` for paging
//! - **Graph**: `graph_builder()` to relate/unrelate, `graph_reader()` to walk
//! - **Events**: `event_builder()` to record, `event_reader()` to read a range
//!
//! Only 200, 201 and 204 count as success. Any other status becomes
//! [`Error::Api`] with the decoded body attached.

pub mod api;
pub mod client;
mod endpoint;
pub mod error;
pub mod response;
pub mod types;

pub use api::{EventBuilder, GraphBuilder, Mode, SearchBuilder};
pub use client::{ClientBuilder, OrchestrateClient};
pub use error::{Error, Result};
pub use response::{Body, RawResponse, Response, validate};
pub use types::{ListQuery, Match, NodeRef};
