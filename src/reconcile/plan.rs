//! Criteria planning - pure functions for deciding which passes to run
//!
//! No I/O happens here; the result depends only on the configuration.

use crate::config::{Config, render_template};
use crate::error::{Error, Result};
use crate::types::SearchCriteria;

/// Ref opening every window: the previous-version template at `minor - 1`
pub fn previous_ref(config: &Config) -> Result<String> {
    let minor = config.minor.checked_sub(1).ok_or_else(|| {
        Error::Config("minor must be at least 1 to derive the previous version".to_string())
    })?;
    Ok(render_template(
        &config.templates.previous_version,
        config.major,
        minor,
    ))
}

/// Plan the reconciliation passes (PURE - no I/O, easily testable)
///
/// The first pass always targets the base branch. Outside current mode a
/// second pass targets the release branch, comparing its head against the
/// same previous ref.
pub fn plan_criteria(config: &Config) -> Result<Vec<SearchCriteria>> {
    let previous = previous_ref(config)?;

    let mainline_current = if config.current {
        config.base_branch.clone()
    } else {
        render_template(
            &config.templates.current_version,
            config.major,
            config.minor,
        )
    };

    let mut criteria = vec![SearchCriteria {
        current_ref: mainline_current,
        previous_ref: previous.clone(),
        base_branch: config.base_branch.clone(),
    }];

    if !config.current {
        let release_branch = render_template(
            &config.templates.release_branch,
            config.major,
            config.minor,
        );
        criteria.push(SearchCriteria {
            current_ref: release_branch.clone(),
            previous_ref: previous,
            base_branch: release_branch,
        });
    }

    Ok(criteria)
}
