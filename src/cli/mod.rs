//! Command-line front end

pub mod check;
pub mod context;
pub mod style;

use crate::cli::style::{CHECK, DIVERGE, Stylize, WARN, arrow, check, pr_link};
use anstream::println;
use async_trait::async_trait;
use indicatif::ProgressBar;
use jaelon::reconcile::ProgressCallback;
use jaelon::types::{Milestone, Reconciliation, ReconciliationOutcome, RepoId, SearchCriteria};
use std::sync::OnceLock;

/// Progress callback that prints reconciliation results
pub struct CliProgress {
    /// Spinner shown while the milestone is looked up
    spinner: ProgressBar,
    /// Title of the milestone PRs are reconciled against
    milestone_title: OnceLock<String>,
    /// Also print PRs that need no change, and the raw search query
    verbose: bool,
}

impl CliProgress {
    /// Create a progress printer that finishes `spinner` once the milestone is known
    pub const fn new(spinner: ProgressBar, verbose: bool) -> Self {
        Self {
            spinner,
            milestone_title: OnceLock::new(),
            verbose,
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_pass_start(&self, index: usize, criteria: &SearchCriteria, query: &str) {
        println!();
        println!(
            "{} {} {} {}",
            format!("Pass {}:", index + 1).emphasis(),
            criteria.base_branch.accent(),
            arrow(),
            format!("{}..{}", criteria.previous_ref, criteria.current_ref).muted()
        );
        if self.verbose {
            println!("  {}", query.muted());
        }
    }

    async fn on_reconciled(&self, _repo: &RepoId, r: &Reconciliation, dry_run: bool) {
        let link = pr_link(r.number, &r.html_url);
        match r.outcome {
            ReconciliationOutcome::Assigned => {
                let closed = r
                    .closed_at
                    .map_or_else(String::new, |t| format!(" (closed {})", t.format("%Y-%m-%d")));
                if dry_run {
                    println!(
                        "  {} No milestone: {link}{}",
                        WARN.warn(),
                        closed.muted()
                    );
                } else {
                    println!(
                        "  {} Milestone assigned: {link}{}",
                        CHECK.success(),
                        closed.muted()
                    );
                }
            }
            ReconciliationOutcome::Divergent => {
                let existing = r.existing.as_ref().map_or("", |m| m.title.as_str());
                let expected = self.milestone_title.get().map_or("", String::as_str);
                println!(
                    "  {} Milestone divergence on {link}: {} instead of {}",
                    DIVERGE.danger(),
                    existing.warn(),
                    expected.accent()
                );
            }
            ReconciliationOutcome::AlreadyCorrect => {
                if self.verbose {
                    println!("  {} {link}", "ok".muted());
                }
            }
        }
    }

    async fn on_milestone(&self, milestone: &Milestone) {
        let _ = self.milestone_title.set(milestone.title.clone());
        self.spinner
            .finish_with_message(format!("{} Milestone {}", check(), milestone.title.accent()));
    }
}
