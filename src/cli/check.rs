//! Check command - find merged PRs and reconcile their milestones

use crate::cli::CliProgress;
use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check, spinner_style};
use anstream::println;
use indicatif::ProgressBar;
use jaelon::error::Result;
use jaelon::reconcile::reconcile_release;
use jaelon::types::{ReconciliationOutcome, RunReport};
use std::time::Duration;

/// Run the milestone check for the configured release
pub async fn run_check(ctx: &CommandContext) -> Result<RunReport> {
    let config = &ctx.config;

    if config.dry_run {
        println!(
            "{}",
            "IMPORTANT: you are using the dry-run mode. Use `--dry-run=false` to disable this mode."
                .warn()
        );
    }
    if let Some(source) = ctx.auth_source {
        println!("{}", format!("Authenticated via {source}").muted());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!(
        "Looking up milestone {} in {}...",
        config.version().emphasis(),
        config.repo.accent()
    ));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let progress = CliProgress::new(spinner.clone(), config.debug);
    let result = reconcile_release(ctx.forge.as_ref(), config, &progress).await;

    // Lookup failures leave the spinner running
    if !spinner.is_finished() {
        spinner.finish_and_clear();
    }

    let report = result?;
    print_summary(&report, config.dry_run);
    Ok(report)
}

/// Print outcome counts across all passes
fn print_summary(report: &RunReport, dry_run: bool) {
    let missing = report.count(ReconciliationOutcome::Assigned);
    let correct = report.count(ReconciliationOutcome::AlreadyCorrect);
    let divergent = report.count(ReconciliationOutcome::Divergent);

    println!();
    if dry_run {
        println!(
            "{} {} pull request(s): {} missing a milestone, {} correct, {} divergent",
            "Dry run complete:".muted(),
            report.total().accent(),
            missing.accent(),
            correct.accent(),
            divergent.accent()
        );
    } else {
        println!(
            "{} {} pull request(s): {} assigned, {} correct, {} divergent",
            format!("{} Check complete:", check()).success(),
            report.total().accent(),
            report.applied_count().accent(),
            correct.accent(),
            divergent.accent()
        );
    }
}
