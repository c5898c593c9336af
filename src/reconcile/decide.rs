//! Per-PR milestone decision

use crate::error::{Error, Result};
use crate::platform::ForgeService;
use crate::types::{Milestone, PullRequestRecord, Reconciliation, ReconciliationOutcome};
use tracing::{debug, warn};

/// Classify a PR's milestone against the target (PURE)
///
/// Missing takes precedence over a match, which takes precedence over
/// divergence. Milestones are compared by ID, never by title.
pub fn classify(pr: &PullRequestRecord, target: &Milestone) -> ReconciliationOutcome {
    match &pr.milestone {
        None => ReconciliationOutcome::Assigned,
        Some(existing) if existing.id == target.id => ReconciliationOutcome::AlreadyCorrect,
        Some(_) => ReconciliationOutcome::Divergent,
    }
}

/// Reconcile one PR against the target milestone (EFFECTFUL)
///
/// Only a PR without a milestone is ever updated, and only when `dry_run`
/// is false. A divergent milestone is reported and left in place.
pub async fn reconcile_pull_request(
    forge: &dyn ForgeService,
    pr: &PullRequestRecord,
    target: &Milestone,
    dry_run: bool,
) -> Result<Reconciliation> {
    let outcome = classify(pr, target);
    let mut applied = false;

    match outcome {
        ReconciliationOutcome::Assigned => {
            let closed_at = pr
                .closed_at
                .map_or_else(|| "unknown".to_string(), |t| t.to_rfc3339());
            warn!(
                number = pr.number,
                url = %pr.html_url,
                %closed_at,
                dry_run,
                "no milestone"
            );

            if !dry_run {
                forge
                    .edit_issue_milestone(pr.number, target.number)
                    .await
                    .map_err(|e| Error::Update {
                        repo: forge.config().clone(),
                        number: pr.number,
                        source: Box::new(e),
                    })?;
                applied = true;
                debug!(number = pr.number, milestone = %target.title, "milestone assigned");
            }
        }
        ReconciliationOutcome::AlreadyCorrect => {
            debug!(number = pr.number, "milestone already correct");
        }
        ReconciliationOutcome::Divergent => {
            let existing = pr.milestone.as_ref().map_or("", |m| m.title.as_str());
            warn!(
                number = pr.number,
                url = %pr.html_url,
                existing,
                expected = %target.title,
                "milestone divergence"
            );
        }
    }

    Ok(Reconciliation {
        number: pr.number,
        html_url: pr.html_url.clone(),
        closed_at: pr.closed_at,
        outcome,
        existing: pr.milestone.clone(),
        applied,
    })
}
