//! Mock forge service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jaelon::error::{Error, Result};
use jaelon::platform::ForgeService;
use jaelon::types::{CommitInfo, Milestone, PullRequestRecord, RepoId, SearchPage, SearchRequest};
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `search_pull_requests`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCall {
    pub query: String,
    pub page: u32,
    pub per_page: u8,
}

/// Call record for `edit_issue_milestone`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCall {
    pub number: u64,
    pub milestone_number: u64,
}

/// Simple mock forge service for testing
///
/// Features:
/// - Configurable commit timestamps per ref
/// - Search results keyed by base branch, split into pages
/// - Edits are applied to the stored results, so a second run sees them
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockForgeService {
    repo: RepoId,
    commits: Mutex<HashMap<String, DateTime<Utc>>>,
    milestones: Mutex<Vec<Milestone>>,
    /// base branch -> pages of results
    search_pages: Mutex<HashMap<String, Vec<Vec<PullRequestRecord>>>>,
    // Call tracking
    get_commit_calls: Mutex<Vec<String>>,
    search_calls: Mutex<Vec<SearchCall>>,
    edit_calls: Mutex<Vec<EditCall>>,
    // Error injection
    error_on_search_page: Mutex<Option<(u32, String)>>,
    error_on_edit: Mutex<Option<String>>,
    error_on_get_commit: Mutex<Option<String>>,
}

impl MockForgeService {
    /// Create a new mock for the given repository
    pub fn new(repo: RepoId) -> Self {
        Self {
            repo,
            commits: Mutex::new(HashMap::new()),
            milestones: Mutex::new(Vec::new()),
            search_pages: Mutex::new(HashMap::new()),
            get_commit_calls: Mutex::new(Vec::new()),
            search_calls: Mutex::new(Vec::new()),
            edit_calls: Mutex::new(Vec::new()),
            error_on_search_page: Mutex::new(None),
            error_on_edit: Mutex::new(None),
            error_on_get_commit: Mutex::new(None),
        }
    }

    // === Setup methods ===

    /// Make `reference` resolve to a commit at `at`
    pub fn set_commit(&self, reference: &str, at: DateTime<Utc>) {
        self.commits
            .lock()
            .unwrap()
            .insert(reference.to_string(), at);
    }

    /// Set the milestone listing
    pub fn set_milestones(&self, milestones: Vec<Milestone>) {
        *self.milestones.lock().unwrap() = milestones;
    }

    /// Set the search results for queries targeting `base_branch`
    pub fn set_search_pages(&self, base_branch: &str, pages: Vec<Vec<PullRequestRecord>>) {
        self.search_pages
            .lock()
            .unwrap()
            .insert(base_branch.to_string(), pages);
    }

    // === Error injection methods ===

    /// Make the search fail on a specific page
    pub fn fail_search_page(&self, page: u32, msg: &str) {
        *self.error_on_search_page.lock().unwrap() = Some((page, msg.to_string()));
    }

    /// Make `edit_issue_milestone` return an error
    pub fn fail_edit(&self, msg: &str) {
        *self.error_on_edit.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `get_commit` return a transport error
    pub fn fail_get_commit(&self, msg: &str) {
        *self.error_on_get_commit.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// Get all refs `get_commit` was called with, in order
    pub fn get_commit_calls(&self) -> Vec<String> {
        self.get_commit_calls.lock().unwrap().clone()
    }

    /// Get all `search_pull_requests` calls
    pub fn get_search_calls(&self) -> Vec<SearchCall> {
        self.search_calls.lock().unwrap().clone()
    }

    /// Get all `edit_issue_milestone` calls
    pub fn get_edit_calls(&self) -> Vec<EditCall> {
        self.edit_calls.lock().unwrap().clone()
    }

    /// Assert that no mutation happened
    pub fn assert_no_edits(&self) {
        let calls = self.get_edit_calls();
        assert!(calls.is_empty(), "Expected no edits but got: {calls:?}");
    }

    /// Extract the base branch from a rendered query
    fn base_branch_of(query: &str) -> Option<&str> {
        query
            .split_whitespace()
            .find_map(|part| part.strip_prefix("base:"))
    }
}

#[async_trait]
impl ForgeService for MockForgeService {
    async fn get_commit(&self, reference: &str) -> Result<CommitInfo> {
        self.get_commit_calls
            .lock()
            .unwrap()
            .push(reference.to_string());

        if let Some(msg) = self.error_on_get_commit.lock().unwrap().as_ref() {
            return Err(Error::Transport(msg.clone()));
        }

        let commits = self.commits.lock().unwrap();
        commits
            .get(reference)
            .map(|at| CommitInfo {
                sha: format!("sha-{reference}"),
                committed_at: *at,
            })
            .ok_or_else(|| Error::RefNotFound {
                repo: self.repo.clone(),
                reference: reference.to_string(),
            })
    }

    async fn list_milestones(&self) -> Result<Vec<Milestone>> {
        Ok(self.milestones.lock().unwrap().clone())
    }

    async fn search_pull_requests(&self, request: SearchRequest<'_>) -> Result<SearchPage> {
        self.search_calls.lock().unwrap().push(SearchCall {
            query: request.query.to_string(),
            page: request.page,
            per_page: request.per_page,
        });

        if let Some((page, msg)) = self.error_on_search_page.lock().unwrap().as_ref()
            && *page == request.page
        {
            return Err(Error::Transport(msg.clone()));
        }

        let pages = self.search_pages.lock().unwrap();
        let Some(results) = Self::base_branch_of(request.query).and_then(|b| pages.get(b)) else {
            return Ok(SearchPage::default());
        };

        let index = usize::try_from(request.page.saturating_sub(1)).unwrap();
        let items = results.get(index).cloned().unwrap_or_default();
        let next_page = (index + 1 < results.len()).then(|| request.page + 1);
        Ok(SearchPage { items, next_page })
    }

    async fn edit_issue_milestone(&self, number: u64, milestone_number: u64) -> Result<()> {
        self.edit_calls.lock().unwrap().push(EditCall {
            number,
            milestone_number,
        });

        if let Some(msg) = self.error_on_edit.lock().unwrap().as_ref() {
            return Err(Error::Transport(msg.clone()));
        }

        let milestone = self
            .milestones
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.number == milestone_number)
            .cloned();

        let mut pages = self.search_pages.lock().unwrap();
        for record in pages.values_mut().flatten().flatten() {
            if record.number == number {
                record.milestone.clone_from(&milestone);
            }
        }
        Ok(())
    }

    fn config(&self) -> &RepoId {
        &self.repo
    }
}
