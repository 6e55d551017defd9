//! Subcommand implementations.

mod explain;
mod last_event;
mod login;
mod print_form;
mod resources;
mod shelf_download;
mod shelf_upload;
mod whoami;

use anyhow::{Context, Result};
use clap::Subcommand;
use diadoc_client::{CancellationToken, ClientConfig, DiadocClient};
use diadoc_core::{ApiUrl, Credentials};
use tracing::info_span;

use crate::cli::ConnectionArgs;
use crate::storage::{self, TokenKey};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session token
    Login(login::LoginArgs),

    /// Show the authenticated user
    Whoami(whoami::WhoamiArgs),

    /// Upload a file to the shelf
    ShelfUpload(shelf_upload::ShelfUploadArgs),

    /// Download a file from the shelf
    ShelfDownload(shelf_download::ShelfDownloadArgs),

    /// Fetch the newest event of a box
    LastEvent(last_event::LastEventArgs),

    /// Fetch a generated print form, waiting until it is ready
    PrintForm(print_form::PrintFormArgs),

    /// Explain what a status code means for a resource
    Explain(explain::ExplainArgs),

    /// List the known resources
    Resources(resources::ResourcesArgs),
}

pub async fn handle(cmd: Commands, cancel: &CancellationToken) -> Result<()> {
    match cmd {
        Commands::Login(args) => login::run(args, cancel).await,
        Commands::Whoami(args) => whoami::run(args, cancel).await,
        Commands::ShelfUpload(args) => shelf_upload::run(args, cancel).await,
        Commands::ShelfDownload(args) => shelf_download::run(args, cancel).await,
        Commands::LastEvent(args) => last_event::run(args, cancel).await,
        Commands::PrintForm(args) => print_form::run(args, cancel).await,
        Commands::Explain(args) => explain::run(args),
        Commands::Resources(args) => resources::run(args),
    }
}

/// A connected client plus the key its token is stored under.
pub struct Connection {
    pub client: DiadocClient,
    key: TokenKey,
}

impl Connection {
    /// Build a client from flags and environment.
    ///
    /// The bootstrap token is `--auth-token` if given, else the stored
    /// token for the same account. `fresh` ignores both and logs in.
    pub async fn open(
        args: &ConnectionArgs,
        fresh: bool,
        cancel: &CancellationToken,
    ) -> Result<Self> {
        let base_url = ApiUrl::from_host(&args.host).context("Invalid DIADOC_HOST")?;
        let key = TokenKey {
            login: args.login.clone(),
            client_id: args.client_id.clone(),
            base_url: base_url.to_string(),
        };

        let bootstrap = if fresh {
            None
        } else {
            match &args.auth_token {
                Some(token) => Some(diadoc_core::SessionToken::new(token.clone())),
                None => storage::load_token(&key).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "ignoring unreadable token file");
                    None
                }),
            }
        };

        let credentials = Credentials::new(&args.login, &args.password, &args.client_id);
        let config = ClientConfig::default().with_base_url(base_url);
        let client = DiadocClient::connect(config, credentials, bootstrap, cancel)
            .await
            .context("Failed to connect")?
            .with_span(info_span!("diadoc", login = %args.login));

        Ok(Self { client, key })
    }

    /// Store the session's current token for the next run.
    pub async fn persist(&self) -> Result<()> {
        if let Some(token) = self.client.session().token().await {
            storage::save_token(&self.key, &token).context("Failed to save token")?;
        }
        Ok(())
    }
}
