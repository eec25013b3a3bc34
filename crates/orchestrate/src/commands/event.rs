//! Event commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{Context, parse_json};

/// Arguments for the event command.
#[derive(Args, Debug)]
pub struct EventArgs {
    #[command(subcommand)]
    pub command: EventCommand,
}

#[derive(Subcommand, Debug)]
pub enum EventCommand {
    /// Record an event
    Put {
        /// Collection name
        collection: String,

        /// Item key
        key: String,

        /// Event type
        event_type: String,

        /// Event payload as JSON
        data: String,

        /// Event timestamp (ms since epoch)
        #[arg(long)]
        time: Option<i64>,
    },

    /// Read events of one type
    List {
        /// Collection name
        collection: String,

        /// Item key
        key: String,

        /// Event type
        event_type: String,

        /// Range start (ms since epoch)
        #[arg(long)]
        start: Option<i64>,

        /// Range end (ms since epoch)
        #[arg(long)]
        end: Option<i64>,
    },
}

/// Run the event command.
pub async fn run(args: EventArgs, ctx: &Context) -> Result<()> {
    let response = match args.command {
        EventCommand::Put {
            collection,
            key,
            event_type,
            data,
            time,
        } => {
            let mut builder = ctx
                .client
                .event_builder()
                .from(collection, key)
                .event_type(event_type)
                .data(parse_json("data", &data)?);
            if let Some(time) = time {
                builder = builder.time(time);
            }
            builder.create().await?
        }
        EventCommand::List {
            collection,
            key,
            event_type,
            start,
            end,
        } => {
            let mut reader = ctx
                .client
                .event_reader()
                .from(collection, key)
                .event_type(event_type);
            if let Some(start) = start {
                reader = reader.start(start);
            }
            if let Some(end) = end {
                reader = reader.end(end);
            }
            reader.get().await?
        }
    };
    ctx.print(&response)
}
