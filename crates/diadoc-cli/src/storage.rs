//! Token storage for reusing a session between runs.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use diadoc_core::SessionToken;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Which account and endpoint a stored token belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenKey {
    pub login: String,
    pub client_id: String,
    pub base_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    #[serde(flatten)]
    key: TokenKey,
    token: String,
    saved_at: DateTime<Utc>,
}

fn token_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "diadoc").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("token.json"))
}

/// Persist the token for `key`, replacing whatever was stored.
pub fn save_token(key: &TokenKey, token: &SessionToken) -> Result<()> {
    let stored = StoredToken {
        key: key.clone(),
        token: token.as_str().to_string(),
        saved_at: Utc::now(),
    };

    let path = token_path()?;
    let json = serde_json::to_string_pretty(&stored)?;
    fs::write(&path, &json).context("Failed to write token file")?;

    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    tracing::debug!(path = %path.display(), "token saved");
    Ok(())
}

/// Load the stored token if it was saved for the same `key`.
pub fn load_token(key: &TokenKey) -> Result<Option<SessionToken>> {
    let path = token_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read token file")?;
    let stored: StoredToken = serde_json::from_str(&json).context("Invalid token file")?;

    if stored.key != *key {
        tracing::debug!("stored token belongs to another account, ignoring");
        return Ok(None);
    }

    tracing::debug!(saved_at = %stored.saved_at, "using stored token");
    Ok(Some(SessionToken::new(stored.token)))
}
