//! Forge services
//!
//! Provides the remote operations the reconciliation engine needs.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::{CommitInfo, Milestone, RepoId, SearchPage, SearchRequest};
use async_trait::async_trait;

/// Maximum search page size accepted by the GitHub search API
pub const SEARCH_PAGE_SIZE: u8 = 100;

/// Forge service trait for milestone reconciliation
///
/// Every call is scoped to the repository returned by [`config`].
/// Implementations must surface unknown refs as
/// [`Error::RefNotFound`](crate::error::Error::RefNotFound) and all other
/// remote failures as [`Error::Transport`](crate::error::Error::Transport).
///
/// [`config`]: Self::config
#[async_trait]
pub trait ForgeService: Send + Sync {
    /// Resolve a ref (branch, tag or SHA) to its commit
    async fn get_commit(&self, reference: &str) -> Result<CommitInfo>;

    /// List every milestone, open and closed, in server order
    async fn list_milestones(&self) -> Result<Vec<Milestone>>;

    /// Fetch one page of pull requests matching a search query
    ///
    /// Results are sorted by creation time, ascending.
    async fn search_pull_requests(&self, request: SearchRequest<'_>) -> Result<SearchPage>;

    /// Set the milestone of an issue or pull request
    ///
    /// `milestone_number` is the per-repository milestone number.
    async fn edit_issue_milestone(&self, number: u64, milestone_number: u64) -> Result<()>;

    /// Repository this service operates on
    fn config(&self) -> &RepoId;
}
