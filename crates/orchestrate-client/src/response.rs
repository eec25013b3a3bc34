//! Response normalization.
//!
//! All verbs and builder terminals pass the raw transport response through
//! [`validate`], which decodes the body when it is JSON and maps any status
//! other than 200, 201 or 204 to [`Error::Api`].

use std::fmt;

use reqwest::header::{ETAG, HeaderMap, LOCATION};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Status codes treated as success.
pub const SUCCESS_STATUSES: [u16; 3] = [200, 201, 204];

/// A response as it came off the wire.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Undecoded payload.
    pub body: String,
}

/// A response body, decoded as JSON when it parses.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// The payload was valid JSON.
    Json(serde_json::Value),
    /// The payload was not JSON (plain text, or empty).
    Raw(String),
}

impl Body {
    /// Decode a payload, keeping it unchanged if it is not JSON.
    pub fn parse(payload: String) -> Self {
        match serde_json::from_str(&payload) {
            Ok(value) => Body::Json(value),
            Err(e) => {
                if !payload.is_empty() {
                    tracing::trace!(error = %e, "response body is not JSON, keeping raw payload");
                }
                Body::Raw(payload)
            }
        }
    }

    /// The decoded JSON value, if any.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Body::Json(value) => Some(value),
            Body::Raw(_) => None,
        }
    }

    /// The raw text, if the payload was not JSON.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Body::Json(_) => None,
            Body::Raw(text) => Some(text),
        }
    }

    /// True for an empty, non-JSON payload (e.g. a 204).
    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Raw(text) if text.is_empty())
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Json(value) => write!(f, "{}", value),
            Body::Raw(text) => f.write_str(text),
        }
    }
}

/// A successful, normalized response.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code (200, 201 or 204).
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Body,
}

impl Response {
    /// Deserialize a JSON body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        match &self.body {
            Body::Json(value) => Ok(T::deserialize(value)?),
            Body::Raw(_) => Err(Error::InvalidArgument(format!(
                "response body (status {}) is not JSON",
                self.status
            ))),
        }
    }

    /// The `ETag` header, verbatim.
    pub fn etag(&self) -> Option<&str> {
        self.header(ETAG)
    }

    /// The `Location` header, pointing at the stored item or ref.
    pub fn location(&self) -> Option<&str> {
        self.header(LOCATION)
    }

    /// The version ref of the written or fetched item: the `ETag` with its
    /// quotes removed. Suitable as a [`crate::Match::Ref`] for the next
    /// conditional write.
    pub fn ref_token(&self) -> Option<&str> {
        self.etag()
            .map(|tag| tag.trim_start_matches("W/").trim_matches('"'))
    }

    fn header(&self, name: reqwest::header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Normalize a raw response into success or [`Error::Api`].
pub fn validate(raw: RawResponse) -> Result<Response> {
    let RawResponse {
        status,
        headers,
        body,
    } = raw;
    let body = Body::parse(body);

    if SUCCESS_STATUSES.contains(&status) {
        Ok(Response {
            status,
            headers,
            body,
        })
    } else {
        Err(Error::Api { status, body })
    }
}
