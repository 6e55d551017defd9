//! Login command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use diadoc_client::CancellationToken;

use crate::cli::ConnectionArgs;
use crate::commands::Connection;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub async fn run(args: LoginArgs, cancel: &CancellationToken) -> Result<()> {
    eprintln!("{}", "Logging in...".dimmed());

    let connection = Connection::open(&args.connection, true, cancel).await?;
    connection.persist().await?;

    output::success("Logged in successfully");
    println!();
    output::field("Login", &args.connection.login);
    output::field("Client", &args.connection.client_id);

    Ok(())
}
