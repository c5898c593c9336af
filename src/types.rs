//! Core types for jaelon

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository a run operates on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoId {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoId {
    /// Create a repository identity
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Refs and base branch bounding one reconciliation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchCriteria {
    /// Ref whose commit time closes the window
    pub current_ref: String,
    /// Ref whose commit time opens the window
    pub previous_ref: String,
    /// Branch the pull requests must target
    pub base_branch: String,
}

/// Merge-date window derived from two commits
///
/// `start_exclusive` is already shifted one second past the previous ref's
/// commit, so both bounds can be used verbatim in an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    /// Previous ref commit time + 1s
    pub start_exclusive: DateTime<Utc>,
    /// Current ref commit time
    pub end_inclusive: DateTime<Utc>,
}

/// A resolved commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Commit SHA
    pub sha: String,
    /// Committer timestamp
    pub committed_at: DateTime<Utc>,
}

/// A repository milestone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Global milestone ID
    pub id: u64,
    /// Per-repository milestone number (used when assigning)
    pub number: u64,
    /// Milestone title
    pub title: String,
}

/// A merged pull request returned by search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRecord {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// Milestone currently set on the PR
    pub milestone: Option<Milestone>,
    /// When the PR was closed
    pub closed_at: Option<DateTime<Utc>>,
}

/// One page of search results
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    /// Items on this page, in server order
    pub items: Vec<PullRequestRecord>,
    /// Next page number; `None` or `Some(0)` ends pagination
    pub next_page: Option<u32>,
}

/// A single search page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest<'a> {
    /// Search expression
    pub query: &'a str,
    /// 1-based page number
    pub page: u32,
    /// Items per page
    pub per_page: u8,
}

/// Milestone state of a pull request relative to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReconciliationOutcome {
    /// PR had no milestone; the target is (or would be) assigned
    Assigned,
    /// PR already carries the target milestone
    AlreadyCorrect,
    /// PR carries a different milestone; left untouched
    Divergent,
}

impl std::fmt::Display for ReconciliationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assigned => write!(f, "assigned"),
            Self::AlreadyCorrect => write!(f, "already correct"),
            Self::Divergent => write!(f, "divergent"),
        }
    }
}

/// Result of reconciling one pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// When the PR was closed
    pub closed_at: Option<DateTime<Utc>>,
    /// Classification
    pub outcome: ReconciliationOutcome,
    /// Milestone the PR carried before reconciliation
    pub existing: Option<Milestone>,
    /// Whether a milestone update was sent
    pub applied: bool,
}

/// Outcome of a single criteria pass
#[derive(Debug, Clone)]
pub struct PassReport {
    /// Criteria the pass ran with
    pub criteria: SearchCriteria,
    /// Rendered search query
    pub query: String,
    /// Per-PR results, in search order
    pub reconciliations: Vec<Reconciliation>,
}

impl PassReport {
    /// Count reconciliations with the given outcome
    pub fn count(&self, outcome: ReconciliationOutcome) -> usize {
        self.reconciliations
            .iter()
            .filter(|r| r.outcome == outcome)
            .count()
    }

    /// Number of milestone updates actually sent
    pub fn applied_count(&self) -> usize {
        self.reconciliations.iter().filter(|r| r.applied).count()
    }
}

/// Outcome of a whole run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Milestone every PR was reconciled against
    pub milestone: Milestone,
    /// One entry per pass, in execution order
    pub passes: Vec<PassReport>,
}

impl RunReport {
    /// Count reconciliations with the given outcome across all passes
    pub fn count(&self, outcome: ReconciliationOutcome) -> usize {
        self.passes.iter().map(|p| p.count(outcome)).sum()
    }

    /// Number of milestone updates sent across all passes
    pub fn applied_count(&self) -> usize {
        self.passes.iter().map(PassReport::applied_count).sum()
    }

    /// Total pull requests examined
    pub fn total(&self) -> usize {
        self.passes.iter().map(|p| p.reconciliations.len()).sum()
    }
}
