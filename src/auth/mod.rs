//! Authentication for GitHub
//!
//! Supports explicit tokens, environment variables and the `gh` CLI.

mod github;

pub use github::{GitHubAuthConfig, get_github_auth};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token passed on the command line (or its clap-bound env var)
    Flag,
    /// Token from environment variable
    EnvVar,
    /// Token from CLI tool (gh)
    Cli,
}

impl std::fmt::Display for AuthSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--token"),
            Self::EnvVar => write!(f, "environment"),
            Self::Cli => write!(f, "gh CLI"),
        }
    }
}
