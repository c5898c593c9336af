//! Merge-date window resolution

use crate::error::{Error, Result};
use crate::platform::ForgeService;
use crate::types::{CommitInfo, DateWindow};
use chrono::TimeDelta;
use tracing::debug;

/// Resolve two refs into the merge-date window between them.
///
/// The previous ref is resolved first. The window starts one second after
/// the previous commit so merges landing exactly on it are excluded, and
/// ends at the current commit. An inverted window is returned as-is.
pub async fn resolve_window(
    forge: &dyn ForgeService,
    previous_ref: &str,
    current_ref: &str,
) -> Result<DateWindow> {
    let previous = resolve_ref(forge, previous_ref).await?;
    let current = resolve_ref(forge, current_ref).await?;

    let window = DateWindow {
        start_exclusive: previous.committed_at + TimeDelta::seconds(1),
        end_inclusive: current.committed_at,
    };

    debug!(
        previous_ref,
        current_ref,
        start = %window.start_exclusive,
        end = %window.end_inclusive,
        "resolved date window"
    );
    Ok(window)
}

async fn resolve_ref(forge: &dyn ForgeService, reference: &str) -> Result<CommitInfo> {
    forge.get_commit(reference).await.map_err(|e| match e {
        Error::Transport(msg) => Error::Transport(format!(
            "failed to resolve '{reference}' in {}: {msg}",
            forge.config()
        )),
        other => other,
    })
}
