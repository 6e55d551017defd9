//! Last event command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use diadoc_client::CancellationToken;

use crate::cli::ConnectionArgs;
use crate::commands::Connection;
use crate::output;

#[derive(Args, Debug)]
pub struct LastEventArgs {
    /// Box identifier
    #[arg(long)]
    pub box_id: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub async fn run(args: LastEventArgs, cancel: &CancellationToken) -> Result<()> {
    let connection = Connection::open(&args.connection, false, cancel).await?;
    let event = connection
        .client
        .get_last_event(&args.box_id, cancel)
        .await
        .context("Failed to fetch the last event")?;
    connection.persist().await?;

    match event {
        Some(event) => {
            output::field("Event record", &format!("{} bytes", event.len()));
            output::field("Preview", &output::hex_preview(&event, 32));
        }
        None => println!("{}", "No events in this box".dimmed()),
    }

    Ok(())
}
