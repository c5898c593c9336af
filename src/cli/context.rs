//! Shared command context
//!
//! Extracts the setup every run needs: token discovery and forge creation.

use jaelon::auth::{AuthSource, get_github_auth};
use jaelon::config::Config;
use jaelon::error::Result;
use jaelon::platform::{ForgeService, GitHubService};
use tracing::{debug, warn};

/// Everything a command needs to talk to the forge
pub struct CommandContext {
    /// Immutable run configuration
    pub config: Config,
    /// Forge service (GitHub)
    pub forge: Box<dyn ForgeService>,
    /// Where the token came from; `None` for anonymous access
    pub auth_source: Option<AuthSource>,
}

impl CommandContext {
    /// Create a new command context
    ///
    /// Resolves a token (explicit, environment, then `gh`) and builds the
    /// GitHub service. A missing token is allowed: reads work anonymously.
    pub async fn new(config: Config, token: Option<&str>, host: Option<&str>) -> Result<Self> {
        let auth = get_github_auth(token).await?;

        match &auth {
            Some(a) => debug!(source = %a.source, "using GitHub token"),
            None if config.dry_run => {
                warn!("no GitHub token found, using anonymous access");
            }
            None => warn!("no GitHub token found, milestone updates will be rejected"),
        }

        let forge = GitHubService::new(
            auth.as_ref().map(|a| a.token.as_str()),
            config.repo.clone(),
            host,
        )?;

        Ok(Self {
            config,
            forge: Box::new(forge),
            auth_source: auth.map(|a| a.source),
        })
    }
}
