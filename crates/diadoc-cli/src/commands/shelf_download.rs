//! Shelf download command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use diadoc_client::CancellationToken;

use crate::cli::ConnectionArgs;
use crate::commands::Connection;
use crate::output;

#[derive(Args, Debug)]
pub struct ShelfDownloadArgs {
    /// Name returned by shelf-upload
    pub name: String,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub async fn run(args: ShelfDownloadArgs, cancel: &CancellationToken) -> Result<()> {
    let connection = Connection::open(&args.connection, false, cancel).await?;
    let payload = connection
        .client
        .shelf_download(&args.name, cancel)
        .await
        .with_context(|| format!("Failed to download {}", args.name))?;
    connection.persist().await?;

    output::write_payload(&payload, args.output.as_deref())
}
