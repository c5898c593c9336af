//! Exhaustive search pagination

use crate::error::{Error, Result};
use crate::platform::{ForgeService, SEARCH_PAGE_SIZE};
use crate::types::{PullRequestRecord, SearchRequest};
use tracing::{debug, warn};

/// Run `query` across every result page.
///
/// Pages are fetched one at a time starting at page 1 and concatenated in
/// order. Pagination ends when a page reports no next page (or one that
/// does not advance). Any failing page aborts the whole search; nothing
/// fetched so far is returned.
pub async fn search_all(forge: &dyn ForgeService, query: &str) -> Result<Vec<PullRequestRecord>> {
    let mut records = Vec::new();
    let mut page = 1;

    loop {
        let request = SearchRequest {
            query,
            page,
            per_page: SEARCH_PAGE_SIZE,
        };

        let result = forge
            .search_pull_requests(request)
            .await
            .map_err(|e| Error::Search {
                query: query.to_string(),
                page,
                source: Box::new(e),
            })?;

        records.extend(result.items);

        match result.next_page {
            Some(next) if next > page => page = next,
            Some(next) if next != 0 => {
                warn!(page, next, "search returned a non-advancing next page, stopping");
                break;
            }
            _ => break,
        }
    }

    debug!(last_page = page, count = records.len(), "search complete");
    Ok(records)
}
