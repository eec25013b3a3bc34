//! Request parameter types.

use reqwest::header::{HeaderMap, HeaderValue, IF_MATCH, IF_NONE_MATCH};

use crate::error::{Error, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Conditional writes
// ─────────────────────────────────────────────────────────────────────────────

/// Precondition attached to a write.
///
/// `false` converts to [`Match::Absent`] and a ref string converts to
/// [`Match::Ref`], so `put(.., false)` reads as "only if absent" and
/// `put(.., "82eafab14dc84ed3")` as "only if still at this ref".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Match {
    /// Unconditional write.
    #[default]
    Any,
    /// Write only if the stored item is at this ref (`If-Match`).
    Ref(String),
    /// Write only if no item exists yet (`If-None-Match: "*"`).
    Absent,
}

impl Match {
    /// Headers expressing this precondition. Empty for [`Match::Any`].
    pub(crate) fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        match self {
            Match::Any => {}
            Match::Ref(token) => {
                let value = HeaderValue::from_str(&quote(token)).map_err(|_| {
                    Error::InvalidArgument(format!("invalid ref for If-Match: {:?}", token))
                })?;
                headers.insert(IF_MATCH, value);
            }
            Match::Absent => {
                headers.insert(IF_NONE_MATCH, HeaderValue::from_static("\"*\""));
            }
        }
        Ok(headers)
    }
}

/// Wrap a ref in exactly one pair of double quotes.
fn quote(token: &str) -> String {
    format!("\"{}\"", token.trim_matches('"'))
}

impl From<bool> for Match {
    fn from(value: bool) -> Self {
        if value { Match::Any } else { Match::Absent }
    }
}

impl From<&str> for Match {
    fn from(token: &str) -> Self {
        Match::Ref(token.to_string())
    }
}

impl From<String> for Match {
    fn from(token: String) -> Self {
        Match::Ref(token)
    }
}

impl From<&String> for Match {
    fn from(token: &String) -> Self {
        Match::Ref(token.clone())
    }
}

impl From<Option<String>> for Match {
    fn from(token: Option<String>) -> Self {
        token.map(Match::Ref).unwrap_or_default()
    }
}

impl From<Option<&str>> for Match {
    fn from(token: Option<&str>) -> Self {
        token.map(Match::from).unwrap_or_default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Listing
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters for listing a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Maximum number of items to return.
    pub limit: Option<u32>,
    /// First key of the page (inclusive).
    pub start_key: Option<String>,
    /// Last key of the page.
    pub end_key: Option<String>,
}

impl ListQuery {
    /// Empty query: the service's default page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Start listing at this key.
    pub fn start_key(mut self, key: impl Into<String>) -> Self {
        self.start_key = Some(key.into());
        self
    }

    /// Stop listing at this key.
    pub fn end_key(mut self, key: impl Into<String>) -> Self {
        self.end_key = Some(key.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Graph / events
// ─────────────────────────────────────────────────────────────────────────────

/// An item address: collection plus key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    pub collection: String,
    pub key: String,
}

impl NodeRef {
    pub fn new(collection: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            key: key.into(),
        }
    }
}
