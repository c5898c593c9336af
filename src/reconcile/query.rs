//! Search query rendering

use crate::types::{DateWindow, RepoId};
use chrono::{DateTime, Utc};

/// Timestamp format accepted by GitHub's `merged:` qualifier
const SEARCH_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format a timestamp for a search qualifier (second precision, UTC)
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(SEARCH_TIMESTAMP_FORMAT).to_string()
}

/// Build the search query for merged PRs into `base_branch` within `window`
pub fn build_query(repo: &RepoId, base_branch: &str, window: &DateWindow) -> String {
    format!(
        "type:pr is:merged repo:{}/{} base:{} merged:{}..{}",
        repo.owner,
        repo.name,
        base_branch,
        format_timestamp(window.start_exclusive),
        format_timestamp(window.end_inclusive)
    )
}
