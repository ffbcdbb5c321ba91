use chrono::Utc;
use log::{debug, error, info, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::config::{FetchConfig, GitHubConfig, ListingConfig};
use crate::error::{IssueDigestError, Result};
use crate::filters::AuthorFilter;
use crate::types::{CollectionResult, IssueRecord, PageResponse, Repository, StopReason};

pub struct IssuesClient {
    http: reqwest::Client,
    config: GitHubConfig,
    listing: ListingConfig,
}

impl IssuesClient {
    pub fn new() -> Result<Self> {
        Self::with_config(FetchConfig::default())
    }

    pub fn with_config(config: FetchConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_str(&config.github.accept)
                .map_err(|e| IssueDigestError::Config(format!("Invalid accept header: {}", e)))?,
        );

        let mut builder = reqwest::Client::builder()
            .user_agent(config.github.user_agent.clone())
            .default_headers(headers);

        if let Some(timeout) = config.github.timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder.build()?;

        Ok(Self {
            http,
            config: config.github,
            listing: config.listing,
        })
    }

    fn issues_url(&self, repo: &Repository) -> String {
        format!(
            "{}{}",
            self.config.api_base_url.trim_end_matches('/'),
            repo.issues_path()
        )
    }

    /// Requests one page. A non-success status is returned as
    /// [`PageResponse::Failed`]; transport and decoding problems are errors.
    pub async fn fetch_page(&self, repo: &Repository, page: u32) -> Result<PageResponse> {
        let response = self
            .http
            .get(self.issues_url(repo))
            .query(&[
                ("page", page.to_string()),
                ("per_page", self.listing.per_page.to_string()),
                ("state", self.listing.state.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Ok(PageResponse::Failed {
                status: status.as_u16(),
                text,
            });
        }

        let body = response.text().await?;
        let issues: Vec<IssueRecord> = serde_json::from_str(&body)?;
        Ok(PageResponse::Issues(issues))
    }

    /// Walks pages from 1 until an empty page, a failed page, or the
    /// configured page cap. Issues already collected are kept on failure.
    pub async fn fetch_issues(
        &self,
        repo: &Repository,
        filter: &AuthorFilter,
    ) -> Result<CollectionResult> {
        info!("Collecting issues from {}", repo.full_name);

        let mut all_issues = Vec::new();
        let mut skipped = 0usize;
        let mut pages_fetched = 0u32;
        let mut page = 1u32;

        let stop_reason = loop {
            if let Some(limit) = self.listing.max_pages {
                if pages_fetched >= limit {
                    warn!("Reached maximum page limit ({}) for {}", limit, repo.full_name);
                    break StopReason::PageLimit { limit };
                }
            }

            info!("Fetching page {}...", page);
            let response = self.fetch_page(repo, page).await?;
            pages_fetched += 1;

            match response {
                PageResponse::Failed { status, text } => {
                    let reason = StopReason::HttpFailure { page, status, text };
                    error!("{}", reason);
                    break reason;
                }
                PageResponse::Issues(issues) if issues.is_empty() => {
                    break StopReason::EmptyPage { page };
                }
                PageResponse::Issues(issues) => {
                    let (kept, dropped) = filter.partition(issues);
                    if dropped > 0 {
                        debug!("Skipped {} bot-authored entries on page {}", dropped, page);
                    }
                    skipped += dropped;
                    all_issues.extend(kept);
                }
            }

            page += 1;
        };

        info!(
            "Collected {} issues from {} ({} pages)",
            all_issues.len(),
            repo.full_name,
            pages_fetched
        );

        Ok(CollectionResult {
            repository: repo.clone(),
            issues: all_issues,
            pages_fetched,
            skipped_authored_by_bot: skipped,
            stop_reason,
            collection_time: Utc::now(),
        })
    }
}
