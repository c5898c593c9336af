//! Error types for jaelon

use crate::types::RepoId;
use thiserror::Error;

/// Errors surfaced by the reconciliation engine and its collaborators
#[derive(Debug, Error)]
pub enum Error {
    /// A git reference did not resolve to a commit
    #[error("ref '{reference}' not found in {repo}")]
    RefNotFound {
        /// Repository the lookup ran against
        repo: RepoId,
        /// The unresolved reference
        reference: String,
    },

    /// Network, auth or rate-limit failure from the forge API
    #[error("GitHub API error: {0}")]
    Transport(String),

    /// A page fetch failed during search pagination
    #[error("search failed on page {page} for query '{query}': {source}")]
    Search {
        /// The query being paginated
        query: String,
        /// Page number that failed
        page: u32,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },

    /// A milestone assignment failed
    #[error("failed to set milestone on {repo}#{number}: {source}")]
    Update {
        /// Repository of the pull request
        repo: RepoId,
        /// Pull request number
        number: u64,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },

    /// No milestone title matches the expected version
    #[error("milestone not found: {0}")]
    MilestoneNotFound(String),

    /// Invalid or incomplete configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Token discovery failed
    #[error("authentication error: {0}")]
    Auth(String),

    /// The run was interrupted
    #[error("operation cancelled")]
    Cancelled,

    /// The run exceeded its deadline
    #[error("deadline of {0}s exceeded")]
    Timeout(u64),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => Self::Transport(format!(
                "{} ({})",
                source.message, source.status_code
            )),
            other => Self::Transport(other.to_string()),
        }
    }
}

/// Result type alias for jaelon operations
pub type Result<T> = std::result::Result<T, Error>;
