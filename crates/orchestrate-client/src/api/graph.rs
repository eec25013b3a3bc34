//! Graph builder: relations between items.

use super::{Mode, require};
use crate::client::OrchestrateClient;
use crate::error::{Error, Result};
use crate::response::Response;
use crate::types::NodeRef;

/// Builds a relation write or a relation traversal.
///
/// Writers come from [`OrchestrateClient::graph_builder`] and end in
/// [`create`](Self::create) or [`remove`](Self::remove); readers come from
/// [`OrchestrateClient::graph_reader`] and end in [`get`](Self::get).
/// Terminals consume the builder, so each builder sends at most one request.
///
/// ```no_run
/// # async fn example(client: orchestrate_client::OrchestrateClient) -> orchestrate_client::Result<()> {
/// client
///     .graph_builder()
///     .from("users", "byrd@bowery.io")
///     .related("friend")
///     .to("users", "sjkaliski@gmail.com")
///     .create()
///     .await?;
///
/// let friends_of_friends = client
///     .graph_reader()
///     .from("users", "byrd@bowery.io")
///     .related("friend")
///     .related("friend")
///     .get()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GraphBuilder {
    client: OrchestrateClient,
    mode: Mode,
    from: Option<NodeRef>,
    kinds: Vec<String>,
    to: Option<NodeRef>,
}

impl GraphBuilder {
    pub(crate) fn new(client: OrchestrateClient, mode: Mode) -> Self {
        Self {
            client,
            mode,
            from: None,
            kinds: Vec::new(),
            to: None,
        }
    }

    /// The builder's mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Source item.
    pub fn from(mut self, collection: impl Into<String>, key: impl Into<String>) -> Self {
        self.from = Some(NodeRef::new(collection, key));
        self
    }

    /// Relation kind. Readers may call this repeatedly to walk several hops.
    pub fn related(mut self, kind: impl Into<String>) -> Self {
        self.kinds.push(kind.into());
        self
    }

    /// Target item (writers only).
    pub fn to(mut self, collection: impl Into<String>, key: impl Into<String>) -> Self {
        self.to = Some(NodeRef::new(collection, key));
        self
    }

    /// Create the relation `from -[kind]-> to`.
    pub async fn create(self) -> Result<Response> {
        self.mode.require(Mode::Write, "create")?;
        let url = self.relation_url(&[])?;
        self.client
            .do_put(url, &serde_json::json!({}), Default::default())
            .await
    }

    /// Delete the relation `from -[kind]-> to`.
    pub async fn remove(self) -> Result<Response> {
        self.mode.require(Mode::Write, "remove")?;
        let url = self.relation_url(&[("purge", Some("true".to_string()))])?;
        self.client.do_delete(url, None).await
    }

    /// Fetch the items reachable from `from` along the given kinds.
    pub async fn get(self) -> Result<Response> {
        self.mode.require(Mode::Read, "get")?;
        let from = self.from.as_ref().ok_or_else(|| Error::missing("from"))?;
        if self.kinds.is_empty() {
            return Err(Error::missing("relation kind"));
        }

        let mut segments = vec![
            require("from collection", &from.collection)?,
            require("from key", &from.key)?,
            "relations",
        ];
        for kind in &self.kinds {
            segments.push(require("relation kind", kind)?);
        }

        let url = self.client.compose_url(&segments, &[])?;
        self.client.do_get(url).await
    }

    fn relation_url(&self, query: &[crate::endpoint::QueryParam<'_>]) -> Result<url::Url> {
        let from = self.from.as_ref().ok_or_else(|| Error::missing("from"))?;
        let to = self.to.as_ref().ok_or_else(|| Error::missing("to"))?;
        let kind = match self.kinds.as_slice() {
            [kind] => kind.as_str(),
            [] => return Err(Error::missing("relation kind")),
            _ => {
                return Err(Error::InvalidArgument(
                    "a relation write takes exactly one kind".to_string(),
                ));
            }
        };

        self.client.compose_url(
            &[
                require("from collection", &from.collection)?,
                require("from key", &from.key)?,
                "relation",
                require("relation kind", kind)?,
                require("to collection", &to.collection)?,
                require("to key", &to.key)?,
            ],
            query,
        )
    }
}
