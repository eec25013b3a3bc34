//! API endpoint implementations.
//!
//! Key-value verbs live directly on [`crate::OrchestrateClient`]; search,
//! graph and event requests are assembled through builders that dispatch on
//! their terminal call.

mod event;
mod graph;
mod kv;
mod search;

use std::fmt;

pub use event::EventBuilder;
pub use graph::GraphBuilder;
pub use search::SearchBuilder;

use crate::error::{Error, Result};

/// Whether a builder writes or reads. Fixed when the builder is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Read,
    Write,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Read => f.write_str("read"),
            Mode::Write => f.write_str("write"),
        }
    }
}

impl Mode {
    /// Fail unless the builder was created in `expected` mode.
    pub(crate) fn require(self, expected: Mode, action: &'static str) -> Result<()> {
        if self == expected {
            Ok(())
        } else {
            Err(Error::InvalidMode { action, mode: self })
        }
    }
}

/// Fail with `InvalidArgument` if a required string is empty.
pub(crate) fn require<'a>(what: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        Err(Error::missing(what))
    } else {
        Ok(value)
    }
}
