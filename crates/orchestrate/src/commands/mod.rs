//! CLI command handlers.

pub mod event;
pub mod graph;
pub mod kv;
pub mod search;

use anyhow::{Context as _, Result};
use console::Style;
use orchestrate_client::{Body, OrchestrateClient, Response};

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Client built from the global flags.
    pub client: OrchestrateClient,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Print a successful response.
    ///
    /// Plain mode prints the body (pretty-printed when it is JSON). JSON mode
    /// prints `{"status", "ref", "body"}`.
    pub fn print(&self, response: &Response) -> Result<()> {
        if self.json_output {
            let body = match &response.body {
                Body::Json(value) => value.clone(),
                Body::Raw(text) => serde_json::Value::String(text.clone()),
            };
            let envelope = serde_json::json!({
                "status": response.status,
                "ref": response.ref_token(),
                "body": body,
            });
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            return Ok(());
        }

        if self.verbose {
            let dim = Style::new().dim();
            let mut line = format!("HTTP {}", response.status);
            if let Some(reference) = response.ref_token() {
                line.push_str(&format!(" ref={}", reference));
            }
            eprintln!("{}", dim.apply_to(line));
        }

        match &response.body {
            Body::Json(value) => println!("{}", serde_json::to_string_pretty(value)?),
            Body::Raw(text) if text.is_empty() => {}
            Body::Raw(text) => println!("{}", text),
        }
        Ok(())
    }
}

/// Parse a JSON argument.
pub fn parse_json(what: &str, raw: &str) -> Result<serde_json::Value> {
    serde_json::from_str(raw).with_context(|| format!("{} is not valid JSON", what))
}
