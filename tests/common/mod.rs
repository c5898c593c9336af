//! Shared test fixtures

#![allow(dead_code)]

mod mock_forge;

pub use mock_forge::{EditCall, MockForgeService, SearchCall};

use chrono::{DateTime, TimeZone, Utc};
use jaelon::config::{Config, RefTemplates};
use jaelon::types::{Milestone, PullRequestRecord, RepoId};

/// The repository every fixture lives in
pub fn repo() -> RepoId {
    RepoId::new("acme", "widget")
}

/// Config for acme/widget 2.5 in release-branch mode
pub fn config(dry_run: bool) -> Config {
    Config {
        repo: repo(),
        major: 2,
        minor: 5,
        current: false,
        base_branch: "master".to_string(),
        templates: RefTemplates::default(),
        dry_run,
        debug: false,
    }
}

/// UTC timestamp at midnight
pub fn day(year: i32, month: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, d, 0, 0, 0).unwrap()
}

/// Milestone whose number is its id minus 100
pub fn milestone(id: u64, title: &str) -> Milestone {
    Milestone {
        id,
        number: id - 100,
        title: title.to_string(),
    }
}

/// The 2.5 target milestone
pub fn target() -> Milestone {
    milestone(105, "v2.5")
}

/// A merged PR record
pub fn make_pr(number: u64, milestone: Option<Milestone>) -> PullRequestRecord {
    PullRequestRecord {
        number,
        html_url: format!("https://github.com/acme/widget/pull/{number}"),
        milestone,
        closed_at: Some(day(2024, 1, 15)),
    }
}

/// `count` PRs numbered from `start`, none carrying a milestone
pub fn make_prs(start: u64, count: u64) -> Vec<PullRequestRecord> {
    (start..start + count).map(|n| make_pr(n, None)).collect()
}

/// Mock with the acme/widget 2.5 refs and milestones configured
///
/// v2.4.0 at 2024-01-01, v2.5.0 and the v2.5 branch head at 2024-02-01,
/// master head at 2024-03-01.
pub fn release_mock() -> MockForgeService {
    let mock = MockForgeService::new(repo());
    mock.set_commit("v2.4.0", day(2024, 1, 1));
    mock.set_commit("v2.5.0", day(2024, 2, 1));
    mock.set_commit("v2.5", day(2024, 2, 1));
    mock.set_commit("master", day(2024, 3, 1));
    mock.set_milestones(vec![milestone(104, "v2.4"), target(), milestone(110, "v2.10")]);
    mock
}
