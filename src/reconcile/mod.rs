//! Milestone reconciliation engine
//!
//! Same functional-core split as the rest of the crate:
//! 1. Plan - derive the criteria for each pass (pure)
//! 2. Gather - resolve the date window and page through search (effectful)
//! 3. Reconcile - classify each PR (pure) and fix missing milestones (effectful)

mod decide;
mod execute;
mod plan;
mod progress;
mod query;
mod search;
mod window;

pub use decide::{classify, reconcile_pull_request};
pub use execute::{reconcile_release, run_pass, run_passes};
pub use plan::{plan_criteria, previous_ref};
pub use progress::{NoopProgress, ProgressCallback};
pub use query::{build_query, format_timestamp};
pub use search::search_all;
pub use window::resolve_window;
