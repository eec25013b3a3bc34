//! Graph commands.

use anyhow::Result;
use clap::Args;

use super::Context;

/// Arguments for the relate command.
#[derive(Args, Debug)]
pub struct RelateArgs {
    /// Source collection
    pub from_collection: String,

    /// Source key
    pub from_key: String,

    /// Relation kind
    pub kind: String,

    /// Target collection
    pub to_collection: String,

    /// Target key
    pub to_key: String,

    /// Delete the relation instead of creating it
    #[arg(long)]
    pub remove: bool,
}

/// Arguments for the relations command.
#[derive(Args, Debug)]
pub struct RelationsArgs {
    /// Source collection
    pub collection: String,

    /// Source key
    pub key: String,

    /// Relation kinds, one per hop
    #[arg(required = true)]
    pub kinds: Vec<String>,
}

pub async fn relate(args: RelateArgs, ctx: &Context) -> Result<()> {
    let builder = ctx
        .client
        .graph_builder()
        .from(args.from_collection, args.from_key)
        .related(args.kind)
        .to(args.to_collection, args.to_key);

    let response = if args.remove {
        builder.remove().await?
    } else {
        builder.create().await?
    };
    ctx.print(&response)
}

pub async fn relations(args: RelationsArgs, ctx: &Context) -> Result<()> {
    let mut reader = ctx.client.graph_reader().from(args.collection, args.key);
    for kind in args.kinds {
        reader = reader.related(kind);
    }
    let response = reader.get().await?;
    ctx.print(&response)
}
