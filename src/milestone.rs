//! Milestone lookup by version

use crate::error::{Error, Result};
use crate::platform::ForgeService;
use crate::types::Milestone;
use tracing::{debug, info};

/// Check whether `title` contains `version`
///
/// This is a plain substring test: `1.1` matches `v1.1` and `Release 1.1`,
/// and also `v1.10` or `2.1.1`. Listing order decides between several hits.
pub fn title_matches_version(title: &str, version: &str) -> bool {
    title.contains(version)
}

/// Find the first milestone, in listing order, whose title contains `major.minor`
pub async fn find_milestone(forge: &dyn ForgeService, major: u64, minor: u64) -> Result<Milestone> {
    let version = format!("{major}.{minor}");
    let milestones = forge.list_milestones().await?;
    debug!(count = milestones.len(), %version, "searching milestones");

    let found = milestones
        .into_iter()
        .find(|m| title_matches_version(&m.title, &version))
        .ok_or(Error::MilestoneNotFound(version))?;

    info!(id = found.id, title = %found.title, "found milestone");
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_matches_plain_and_prefixed() {
        assert!(title_matches_version("1.1", "1.1"));
        assert!(title_matches_version("v1.1", "1.1"));
        assert!(title_matches_version("Release 1.1", "1.1"));
        assert!(title_matches_version("v1.1.0", "1.1"));
    }

    #[test]
    fn test_title_matches_any_substring() {
        assert!(title_matches_version("v1.10", "1.1"));
        assert!(title_matches_version("2.1.1", "1.1"));
        assert!(title_matches_version("12.5", "2.5"));
    }

    #[test]
    fn test_title_without_version_does_not_match() {
        assert!(!title_matches_version("v1.2", "1.1"));
        assert!(!title_matches_version("backlog", "1.1"));
    }
}
