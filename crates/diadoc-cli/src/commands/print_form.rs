//! Print form command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use diadoc_client::CancellationToken;

use crate::cli::ConnectionArgs;
use crate::commands::Connection;
use crate::output;

#[derive(Args, Debug)]
pub struct PrintFormArgs {
    /// Print form identifier
    #[arg(long)]
    pub id: String,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub async fn run(args: PrintFormArgs, cancel: &CancellationToken) -> Result<()> {
    let connection = Connection::open(&args.connection, false, cancel).await?;
    let form = connection
        .client
        .get_generated_print_form(&args.id, cancel)
        .await
        .context("Failed to fetch the print form")?;
    connection.persist().await?;

    output::write_payload(&form, args.output.as_deref())
}
