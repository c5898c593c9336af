//! Pass execution - effectful operations
//!
//! Drives each planned pass through window resolution, search and
//! per-PR reconciliation via the forge API. Passes run one after another
//! and the first error aborts the run.

use crate::config::Config;
use crate::error::Result;
use crate::milestone::find_milestone;
use crate::platform::ForgeService;
use crate::reconcile::decide::reconcile_pull_request;
use crate::reconcile::plan::plan_criteria;
use crate::reconcile::progress::ProgressCallback;
use crate::reconcile::query::build_query;
use crate::reconcile::search::search_all;
use crate::reconcile::window::resolve_window;
use crate::types::{Milestone, PassReport, RunReport, SearchCriteria};
use tracing::{debug, info};

/// Run one criteria pass against `target` (EFFECTFUL)
pub async fn run_pass(
    forge: &dyn ForgeService,
    index: usize,
    criteria: &SearchCriteria,
    target: &Milestone,
    dry_run: bool,
    progress: &dyn ProgressCallback,
) -> Result<PassReport> {
    let repo = forge.config();
    let window = resolve_window(forge, &criteria.previous_ref, &criteria.current_ref).await?;
    let query = build_query(repo, &criteria.base_branch, &window);
    debug!(%query, "search query");

    progress.on_pass_start(index, criteria, &query).await;

    let records = search_all(forge, &query).await?;
    info!(
        base_branch = %criteria.base_branch,
        count = records.len(),
        "found merged pull requests"
    );

    let mut reconciliations = Vec::with_capacity(records.len());
    for record in &records {
        let reconciliation = reconcile_pull_request(forge, record, target, dry_run).await?;
        progress.on_reconciled(repo, &reconciliation, dry_run).await;
        reconciliations.push(reconciliation);
    }

    Ok(PassReport {
        criteria: criteria.clone(),
        query,
        reconciliations,
    })
}

/// Plan and run every pass against an already-resolved milestone
pub async fn run_passes(
    forge: &dyn ForgeService,
    config: &Config,
    target: &Milestone,
    progress: &dyn ProgressCallback,
) -> Result<RunReport> {
    let criteria = plan_criteria(config)?;
    debug!(passes = criteria.len(), "planned criteria");

    let mut passes = Vec::with_capacity(criteria.len());
    for (index, c) in criteria.iter().enumerate() {
        info!(
            pass = index + 1,
            base_branch = %c.base_branch,
            previous_ref = %c.previous_ref,
            current_ref = %c.current_ref,
            "starting pass"
        );
        passes.push(run_pass(forge, index, c, target, config.dry_run, progress).await?);
    }

    Ok(RunReport {
        milestone: target.clone(),
        passes,
    })
}

/// Find the milestone for `config.major.config.minor` and reconcile every pass
pub async fn reconcile_release(
    forge: &dyn ForgeService,
    config: &Config,
    progress: &dyn ProgressCallback,
) -> Result<RunReport> {
    let target = find_milestone(forge, config.major, config.minor).await?;
    progress.on_milestone(&target).await;
    run_passes(forge, config, &target, progress).await
}
