//! Shelf upload command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use diadoc_client::CancellationToken;

use crate::cli::ConnectionArgs;
use crate::commands::Connection;
use crate::output;

#[derive(Args, Debug)]
pub struct ShelfUploadArgs {
    /// File to upload
    pub file: PathBuf,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub async fn run(args: ShelfUploadArgs, cancel: &CancellationToken) -> Result<()> {
    let payload = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let len = payload.len();

    let connection = Connection::open(&args.connection, false, cancel).await?;
    let name = connection
        .client
        .shelf_upload(payload, cancel)
        .await
        .context("Failed to upload to the shelf")?;
    connection.persist().await?;

    output::success(&format!("Uploaded {} bytes", len));
    output::field("Name on shelf", &name);

    Ok(())
}
