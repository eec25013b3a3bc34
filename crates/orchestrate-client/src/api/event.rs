//! Event builder: time-ordered events attached to an item.

use super::{Mode, require};
use crate::client::OrchestrateClient;
use crate::error::{Error, Result};
use crate::response::Response;
use crate::types::NodeRef;

/// Builds an event write or an event range read.
///
/// Timestamps are milliseconds since the Unix epoch.
///
/// ```no_run
/// # async fn example(client: orchestrate_client::OrchestrateClient) -> orchestrate_client::Result<()> {
/// use serde_json::json;
///
/// client
///     .event_builder()
///     .from("users", "byrd@bowery.io")
///     .event_type("activities")
///     .time(1384534722568)
///     .data(json!({"text": "Went skiing."}))
///     .create()
///     .await?;
///
/// let events = client
///     .event_reader()
///     .from("users", "byrd@bowery.io")
///     .event_type("activities")
///     .start(1384534722000)
///     .end(1384534723000)
///     .get()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EventBuilder {
    client: OrchestrateClient,
    mode: Mode,
    from: Option<NodeRef>,
    event_type: Option<String>,
    time: Option<i64>,
    data: Option<serde_json::Value>,
    start: Option<i64>,
    end: Option<i64>,
}

impl EventBuilder {
    pub(crate) fn new(client: OrchestrateClient, mode: Mode) -> Self {
        Self {
            client,
            mode,
            from: None,
            event_type: None,
            time: None,
            data: None,
            start: None,
            end: None,
        }
    }

    /// The builder's mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Item the events belong to.
    pub fn from(mut self, collection: impl Into<String>, key: impl Into<String>) -> Self {
        self.from = Some(NodeRef::new(collection, key));
        self
    }

    /// Event type, e.g. `"activities"`.
    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    /// Timestamp of the event being written. The service assigns one when
    /// unset.
    pub fn time(mut self, timestamp: i64) -> Self {
        self.time = Some(timestamp);
        self
    }

    /// Event payload.
    pub fn data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Start of the read range.
    pub fn start(mut self, timestamp: i64) -> Self {
        self.start = Some(timestamp);
        self
    }

    /// End of the read range.
    pub fn end(mut self, timestamp: i64) -> Self {
        self.end = Some(timestamp);
        self
    }

    /// Store the event.
    pub async fn create(self) -> Result<Response> {
        self.mode.require(Mode::Write, "create")?;
        let (from, event_type) = self.target()?;
        let data = match &self.data {
            Some(data) if !data.is_null() => data,
            _ => return Err(Error::missing("data")),
        };

        let time = self.time.map(|t| t.to_string());
        let mut segments = vec![
            require("from collection", &from.collection)?,
            require("from key", &from.key)?,
            "event",
            event_type,
        ];
        if let Some(time) = &time {
            segments.push(time.as_str());
        }

        let url = self.client.compose_url(&segments, &[])?;
        self.client.do_put(url, data, Default::default()).await
    }

    /// Read the events of this type, bounded by `start`/`end` when set.
    pub async fn get(self) -> Result<Response> {
        self.mode.require(Mode::Read, "get")?;
        let (from, event_type) = self.target()?;
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(Error::InvalidArgument(format!(
                    "start ({}) is after end ({})",
                    start, end
                )));
            }
        }

        let url = self.client.compose_url(
            &[
                require("from collection", &from.collection)?,
                require("from key", &from.key)?,
                "event",
                event_type,
            ],
            &[
                ("start", self.start.map(|t| t.to_string())),
                ("end", self.end.map(|t| t.to_string())),
            ],
        )?;
        self.client.do_get(url).await
    }

    fn target(&self) -> Result<(&NodeRef, &str)> {
        let from = self.from.as_ref().ok_or_else(|| Error::missing("from"))?;
        let event_type = self
            .event_type
            .as_deref()
            .ok_or_else(|| Error::missing("event type"))?;
        Ok((from, require("event type", event_type)?))
    }
}
