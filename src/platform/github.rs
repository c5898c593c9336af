//! GitHub forge service implementation

use crate::error::{Error, Result};
use crate::platform::ForgeService;
use crate::types::{CommitInfo, Milestone, PullRequestRecord, RepoId, SearchPage, SearchRequest};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Page size for milestone listing
const MILESTONES_PER_PAGE: u8 = 100;

// REST response types for endpoints read through raw routes

#[derive(Deserialize)]
struct CommitResponse {
    sha: String,
    commit: GitCommit,
}

#[derive(Deserialize)]
struct GitCommit {
    committer: Option<GitSignature>,
}

#[derive(Deserialize)]
struct GitSignature {
    date: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct MilestoneResponse {
    id: u64,
    number: u64,
    title: String,
}

impl From<MilestoneResponse> for Milestone {
    fn from(m: MilestoneResponse) -> Self {
        Self {
            id: m.id,
            number: m.number,
            title: m.title,
        }
    }
}

#[derive(Serialize)]
struct MilestoneListParams {
    state: &'static str,
    per_page: u8,
    page: u32,
}

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    repo: RepoId,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// Without a token the service uses anonymous access, which GitHub
    /// rate-limits heavily and which cannot edit milestones.
    pub fn new(token: Option<&str>, repo: RepoId, host: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder();

        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }

        if let Some(h) = host {
            let base_url = if h.starts_with("http://") || h.starts_with("https://") {
                h.to_string()
            } else {
                format!("https://{h}/api/v3")
            };
            builder = builder
                .base_uri(base_url)
                .map_err(|e| Error::Transport(e.to_string()))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self { client, repo })
    }
}

/// Extract the `page` query parameter from a pagination link
pub(crate) fn page_from_link(link: &str) -> Option<u32> {
    let url = url::Url::parse(link).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

/// Helper to convert an octocrab milestone to our `Milestone` type
fn milestone_from_octocrab(m: &octocrab::models::Milestone) -> Result<Milestone> {
    let number = u64::try_from(m.number).map_err(|_| {
        Error::Transport(format!(
            "milestone '{}' has invalid number {}",
            m.title, m.number
        ))
    })?;
    Ok(Milestone {
        id: m.id.0,
        number,
        title: m.title.clone(),
    })
}

/// Helper to convert an octocrab issue to our `PullRequestRecord` type
fn record_from_octocrab(issue: &octocrab::models::issues::Issue) -> Result<PullRequestRecord> {
    Ok(PullRequestRecord {
        number: issue.number,
        html_url: issue.html_url.to_string(),
        milestone: issue
            .milestone
            .as_ref()
            .map(milestone_from_octocrab)
            .transpose()?,
        closed_at: issue.closed_at,
    })
}

#[async_trait]
impl ForgeService for GitHubService {
    async fn get_commit(&self, reference: &str) -> Result<CommitInfo> {
        debug!(reference, "resolving ref");
        let route = format!(
            "/repos/{}/{}/commits/{}",
            self.repo.owner,
            self.repo.name,
            urlencoding::encode(reference)
        );

        let response: CommitResponse = match self.client.get(route, None::<&()>).await {
            Ok(response) => response,
            Err(octocrab::Error::GitHub { source, .. })
                if matches!(source.status_code.as_u16(), 404 | 422) =>
            {
                return Err(Error::RefNotFound {
                    repo: self.repo.clone(),
                    reference: reference.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let committed_at = response
            .commit
            .committer
            .and_then(|c| c.date)
            .ok_or_else(|| {
                Error::Transport(format!("commit for '{reference}' has no committer date"))
            })?;

        debug!(reference, sha = %response.sha, %committed_at, "resolved ref");
        Ok(CommitInfo {
            sha: response.sha,
            committed_at,
        })
    }

    async fn list_milestones(&self) -> Result<Vec<Milestone>> {
        debug!("listing milestones");
        let route = format!("/repos/{}/{}/milestones", self.repo.owner, self.repo.name);
        let mut milestones = Vec::new();
        let mut page = 1;

        loop {
            let params = MilestoneListParams {
                state: "all",
                per_page: MILESTONES_PER_PAGE,
                page,
            };
            let batch: Vec<MilestoneResponse> = self.client.get(&route, Some(&params)).await?;
            let short_page = batch.len() < usize::from(MILESTONES_PER_PAGE);
            milestones.extend(batch.into_iter().map(Milestone::from));

            if short_page {
                break;
            }
            page += 1;
        }

        debug!(count = milestones.len(), "listed milestones");
        Ok(milestones)
    }

    async fn search_pull_requests(&self, request: SearchRequest<'_>) -> Result<SearchPage> {
        debug!(page = request.page, "searching pull requests");
        let page = self
            .client
            .search()
            .issues_and_pull_requests(request.query)
            .sort("created")
            .order("asc")
            .per_page(request.per_page)
            .page(request.page)
            .send()
            .await?;

        let items = page
            .items
            .iter()
            .map(record_from_octocrab)
            .collect::<Result<Vec<_>>>()?;
        let next_page = page
            .next
            .as_ref()
            .and_then(|link| page_from_link(&link.to_string()));

        debug!(
            page = request.page,
            count = items.len(),
            next_page = ?next_page,
            "searched pull requests"
        );
        Ok(SearchPage { items, next_page })
    }

    async fn edit_issue_milestone(&self, number: u64, milestone_number: u64) -> Result<()> {
        debug!(number, milestone_number, "setting milestone");
        self.client
            .issues(&self.repo.owner, &self.repo.name)
            .update(number)
            .milestone(milestone_number)
            .send()
            .await?;
        debug!(number, "set milestone");
        Ok(())
    }

    fn config(&self) -> &RepoId {
        &self.repo
    }
}
