//! Search builder.

use super::require;
use crate::client::OrchestrateClient;
use crate::error::{Error, Result};
use crate::response::Response;

/// Paged search over a collection.
///
/// ```no_run
/// # async fn example(client: orchestrate_client::OrchestrateClient) -> orchestrate_client::Result<()> {
/// let page = client
///     .search_builder()
///     .collection("users")
///     .limit(10)
///     .offset(20)
///     .query("location:NYC")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SearchBuilder {
    client: OrchestrateClient,
    collection: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl SearchBuilder {
    pub(crate) fn new(client: OrchestrateClient) -> Self {
        Self {
            client,
            collection: None,
            limit: None,
            offset: None,
        }
    }

    /// Collection to search.
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Maximum number of results.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of results to skip.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Run `query` with the accumulated options.
    pub async fn query(self, query: impl Into<String>) -> Result<Response> {
        let query = query.into();
        let collection = self
            .collection
            .as_deref()
            .ok_or_else(|| Error::missing("collection"))?;
        let collection = require("collection", collection)?;
        require("query", &query)?;

        let url = self.client.compose_url(
            &[collection],
            &[
                ("query", Some(query)),
                ("limit", self.limit.map(|l| l.to_string())),
                ("offset", self.offset.map(|o| o.to_string())),
            ],
        )?;
        self.client.do_get(url).await
    }
}
