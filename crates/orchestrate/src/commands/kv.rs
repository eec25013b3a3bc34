//! Key-value commands.

use anyhow::{Result, bail};
use clap::Args;
use orchestrate_client::{ListQuery, Match};

use super::{Context, parse_json};

/// Arguments for the get command.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Collection name
    pub collection: String,

    /// Item key
    pub key: String,

    /// Fetch this ref instead of the latest value
    #[arg(long = "ref")]
    pub reference: Option<String>,
}

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Collection name
    pub collection: String,

    /// Maximum items to return
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// First key of the page
    #[arg(long)]
    pub start_key: Option<String>,

    /// Last key of the page
    #[arg(long)]
    pub end_key: Option<String>,
}

/// Arguments for the put command.
#[derive(Args, Debug)]
pub struct PutArgs {
    /// Collection name
    pub collection: String,

    /// Item key
    pub key: String,

    /// Item value as JSON
    pub data: String,

    /// Only write if the stored item is at this ref
    #[arg(long, conflicts_with = "if_absent")]
    pub if_match: Option<String>,

    /// Only write if the key is not taken yet
    #[arg(long)]
    pub if_absent: bool,
}

/// Arguments for the remove command.
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Collection name
    pub collection: String,

    /// Item key
    pub key: String,

    /// Remove the item's history too
    #[arg(long)]
    pub purge: bool,
}

/// Arguments for the delete-collection command.
#[derive(Args, Debug)]
pub struct DeleteCollectionArgs {
    /// Collection name
    pub collection: String,

    /// Confirm deletion
    #[arg(long)]
    pub yes: bool,
}

pub async fn get(args: GetArgs, ctx: &Context) -> Result<()> {
    let response = match &args.reference {
        Some(reference) => {
            ctx.client
                .get_ref(&args.collection, &args.key, reference)
                .await?
        }
        None => ctx.client.get(&args.collection, &args.key).await?,
    };
    ctx.print(&response)
}

pub async fn list(args: ListArgs, ctx: &Context) -> Result<()> {
    let query = ListQuery {
        limit: args.limit,
        start_key: args.start_key,
        end_key: args.end_key,
    };
    let response = ctx.client.list(&args.collection, query).await?;
    ctx.print(&response)
}

pub async fn put(args: PutArgs, ctx: &Context) -> Result<()> {
    let data = parse_json("data", &args.data)?;
    let condition = match (args.if_match, args.if_absent) {
        (Some(reference), _) => Match::Ref(reference),
        (None, true) => Match::Absent,
        (None, false) => Match::Any,
    };
    let response = ctx
        .client
        .put(&args.collection, &args.key, &data, condition)
        .await?;
    ctx.print(&response)
}

pub async fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let response = ctx
        .client
        .remove(&args.collection, &args.key, args.purge)
        .await?;
    ctx.print(&response)
}

pub async fn delete_collection(args: DeleteCollectionArgs, ctx: &Context) -> Result<()> {
    if !args.yes {
        bail!(
            "refusing to delete collection {:?} without --yes",
            args.collection
        );
    }
    let response = ctx.client.delete_collection(&args.collection).await?;
    ctx.print(&response)
}
