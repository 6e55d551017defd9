//! Helpers for running the `diadoc` binary in isolation.

use std::path::{Path, PathBuf};
use std::process::Output;

pub const LOGIN: &str = "user@example.com";
pub const PASSWORD: &str = "secret";
pub const CLIENT_ID: &str = "client-42";

/// Environment variables the binary reads that must not leak in from the
/// developer's shell.
const INHERITED: &[&str] = &[
    "DIADOC_LOGIN",
    "DIADOC_PASSWORD",
    "DIADOC_CLIENT_ID",
    "DIADOC_HOST",
    "DIADOC_AUTH_TOKEN",
    "RUST_LOG",
];

fn command(args: &[&str], home: &Path) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_diadoc"));
    cmd.args(args);
    for var in INHERITED {
        cmd.env_remove(var);
    }
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Run the CLI offline with an isolated HOME.
pub async fn run_cli(args: &[&str], home: &Path) -> Output {
    command(args, home)
        .output()
        .await
        .expect("Failed to execute CLI")
}

/// Run the CLI against `host` with the test account in the environment.
pub async fn run_cli_with_account(args: &[&str], home: &Path, host: &str) -> Output {
    command(args, home)
        .env("DIADOC_LOGIN", LOGIN)
        .env("DIADOC_PASSWORD", PASSWORD)
        .env("DIADOC_CLIENT_ID", CLIENT_ID)
        .env("DIADOC_HOST", host)
        .output()
        .await
        .expect("Failed to execute CLI")
}

/// Assert success and return stdout.
pub fn stdout_of(args: &[&str], output: &Output) -> String {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Where the binary stores its session token under `home`.
pub fn token_file(home: &Path) -> PathBuf {
    home.join("data").join("diadoc").join("token.json")
}
