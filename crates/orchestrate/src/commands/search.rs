//! Search command.

use anyhow::Result;
use clap::Args;

use super::Context;

/// Arguments for the search command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Collection name
    pub collection: String,

    /// Lucene query
    pub query: String,

    /// Maximum results
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Results to skip
    #[arg(short, long)]
    pub offset: Option<u32>,
}

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let mut search = ctx.client.search_builder().collection(args.collection);
    if let Some(limit) = args.limit {
        search = search.limit(limit);
    }
    if let Some(offset) = args.offset {
        search = search.offset(offset);
    }
    let response = search.query(args.query).await?;
    ctx.print(&response)
}
