//! Key-value verbs.

use serde::Serialize;

use super::require;
use crate::client::OrchestrateClient;
use crate::error::{Error, Result};
use crate::response::Response;
use crate::types::{ListQuery, Match};

/// Suffix sent with every collection delete. The service refuses to drop a
/// collection without it.
const FORCE_SUFFIX: &str = "?force=true";

impl OrchestrateClient {
    /// Fetch the latest value stored at `collection/key`.
    pub async fn get(&self, collection: &str, key: &str) -> Result<Response> {
        let collection = require("collection", collection)?;
        let key = require("key", key)?;

        let url = self.compose_url(&[collection, key], &[])?;
        self.do_get(url).await
    }

    /// Fetch a specific version of `collection/key`.
    pub async fn get_ref(&self, collection: &str, key: &str, reference: &str) -> Result<Response> {
        let collection = require("collection", collection)?;
        let key = require("key", key)?;
        let reference = require("ref", reference)?;

        let url = self.compose_url(&[collection, key, "refs", reference], &[])?;
        self.do_get(url).await
    }

    /// List a page of items in a collection.
    pub async fn list(&self, collection: &str, query: ListQuery) -> Result<Response> {
        let collection = require("collection", collection)?;

        let url = self.compose_url(
            &[collection],
            &[
                ("limit", query.limit.map(|l| l.to_string())),
                ("startKey", query.start_key),
                ("endKey", query.end_key),
            ],
        )?;
        self.do_get(url).await
    }

    /// Store `data` at `collection/key`, subject to `condition`.
    ///
    /// ```no_run
    /// # async fn example(client: orchestrate_client::OrchestrateClient) -> orchestrate_client::Result<()> {
    /// use serde_json::json;
    ///
    /// // Create only if absent.
    /// let created = client
    ///     .put("users", "byrd@bowery.io", &json!({"name": "Byrd"}), false)
    ///     .await?;
    ///
    /// // Update only if nobody else wrote in between.
    /// let reference = created.ref_token().unwrap_or_default().to_string();
    /// client
    ///     .put("users", "byrd@bowery.io", &json!({"name": "David Byrd"}), reference)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn put<T>(
        &self,
        collection: &str,
        key: &str,
        data: &T,
        condition: impl Into<Match>,
    ) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        let collection = require("collection", collection)?;
        let key = require("key", key)?;
        let body = serde_json::to_value(data)?;
        if body.is_null() {
            return Err(Error::missing("data"));
        }
        let headers = condition.into().headers()?;

        let url = self.compose_url(&[collection, key], &[])?;
        self.do_put(url, &body, headers).await
    }

    /// Delete `collection/key`. With `purge`, the item's history is removed
    /// as well.
    pub async fn remove(&self, collection: &str, key: &str, purge: bool) -> Result<Response> {
        let collection = require("collection", collection)?;
        let key = require("key", key)?;

        let purge = purge.then(|| "true".to_string());
        let url = self.compose_url(&[collection, key], &[("purge", purge)])?;
        self.do_delete(url, None).await
    }

    /// Run a search query against a collection.
    ///
    /// For paging use [`OrchestrateClient::search_builder`].
    pub async fn search(&self, collection: &str, query: &str) -> Result<Response> {
        let collection = require("collection", collection)?;
        let query = require("query", query)?;

        let url = self.compose_url(&[collection], &[("query", Some(query.to_string()))])?;
        self.do_get(url).await
    }

    /// Delete an entire collection. Always forced.
    pub async fn delete_collection(&self, collection: &str) -> Result<Response> {
        let collection = require("collection", collection)?;

        let url = self.compose_url(&[collection], &[])?;
        self.do_delete(url, Some(FORCE_SUFFIX)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OrchestrateClient {
        OrchestrateClient::new("test-token").unwrap()
    }

    #[tokio::test]
    async fn test_get_requires_collection_and_key() {
        let client = client();
        assert!(matches!(
            client.get("", "key").await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            client.get("users", "").await,
            Err(Error::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_put_requires_data() {
        let result = client()
            .put("users", "byrd@bowery.io", &serde_json::Value::Null, Match::Any)
            .await;
        assert!(matches!(result, Err(Error::InvalidArgument(m)) if m.contains("data")));
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        assert!(matches!(
            client().search("users", "").await,
            Err(Error::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_collection_requires_collection() {
        assert!(matches!(
            client().delete_collection("").await,
            Err(Error::InvalidArgument(_))
        ));
    }
}
