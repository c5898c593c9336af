//! GitHub token discovery

use super::AuthSource;
use crate::error::{Error, Result};
use tokio::process::Command;
use tracing::debug;

/// Environment variables checked after the explicit token, in order
const TOKEN_ENV_VARS: &[&str] = &["GITHUB_TOKEN", "GH_TOKEN"];

/// A discovered GitHub token
#[derive(Clone)]
pub struct GitHubAuthConfig {
    /// The token value
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
}

impl std::fmt::Debug for GitHubAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubAuthConfig")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Resolve a GitHub token.
///
/// Order: explicit token, `GITHUB_TOKEN`, `GH_TOKEN`, then `gh auth token`.
/// Returns `Ok(None)` when nothing is found; callers fall back to
/// anonymous access.
pub async fn get_github_auth(explicit: Option<&str>) -> Result<Option<GitHubAuthConfig>> {
    if let Some(token) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
        debug!("using token from command line");
        return Ok(Some(GitHubAuthConfig {
            token: token.to_string(),
            source: AuthSource::Flag,
        }));
    }

    for var in TOKEN_ENV_VARS {
        if let Ok(token) = std::env::var(var)
            && !token.trim().is_empty()
        {
            debug!(var, "using token from environment");
            return Ok(Some(GitHubAuthConfig {
                token: token.trim().to_string(),
                source: AuthSource::EnvVar,
            }));
        }
    }

    Ok(gh_cli_token().await?.map(|token| GitHubAuthConfig {
        token,
        source: AuthSource::Cli,
    }))
}

/// Ask the `gh` CLI for its token.
///
/// A missing binary or a logged-out `gh` is not an error.
async fn gh_cli_token() -> Result<Option<String>> {
    let output = match Command::new("gh").args(["auth", "token"]).output().await {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("gh CLI not installed");
            return Ok(None);
        }
        Err(e) => return Err(Error::Auth(format!("failed to run gh: {e}"))),
    };

    if !output.status.success() {
        debug!(status = %output.status, "gh auth token failed");
        return Ok(None);
    }

    let token = String::from_utf8(output.stdout)
        .map_err(|e| Error::Auth(format!("gh returned a non-UTF-8 token: {e}")))?;
    let token = token.trim();

    if token.is_empty() {
        Ok(None)
    } else {
        debug!("using token from gh CLI");
        Ok(Some(token.to_string()))
    }
}
