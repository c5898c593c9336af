//! Progress reporting for reconciliation runs

use crate::types::{Milestone, Reconciliation, RepoId, SearchCriteria};
use async_trait::async_trait;

/// Callback for surfacing run progress to a user interface
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// A pass is about to reconcile the results of `query`
    async fn on_pass_start(&self, index: usize, criteria: &SearchCriteria, query: &str);

    /// A PR has been reconciled
    async fn on_reconciled(&self, repo: &RepoId, reconciliation: &Reconciliation, dry_run: bool);

    /// The target milestone has been resolved, before any pass starts
    async fn on_milestone(&self, milestone: &Milestone);
}

/// Progress callback that discards everything
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_pass_start(&self, _index: usize, _criteria: &SearchCriteria, _query: &str) {}

    async fn on_reconciled(&self, _repo: &RepoId, _reconciliation: &Reconciliation, _dry_run: bool) {
    }

    async fn on_milestone(&self, _milestone: &Milestone) {}
}
