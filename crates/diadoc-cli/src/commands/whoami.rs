//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;
use diadoc_client::CancellationToken;

use crate::cli::ConnectionArgs;
use crate::commands::Connection;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub async fn run(args: WhoamiArgs, cancel: &CancellationToken) -> Result<()> {
    let connection = Connection::open(&args.connection, false, cancel).await?;

    let user = connection
        .client
        .get_my_user(cancel)
        .await
        .context("Failed to fetch the current user")?;
    connection.persist().await?;

    output::field("Login", &args.connection.login);
    output::field("User record", &format!("{} bytes", user.len()));
    output::field("Preview", &output::hex_preview(&user, 32));

    Ok(())
}
