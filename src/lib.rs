pub mod client;
pub mod config;
pub mod error;
pub mod filters;
pub mod report;
pub mod types;

pub use client::IssuesClient;
pub use config::{FetchConfig, GitHubConfig, IssueState, ListingConfig};
pub use error::{IssueDigestError, Result};
pub use filters::{AuthorFilter, DEPENDABOT_LOGIN};
pub use report::Reporter;
pub use types::{CollectionResult, IssueAuthor, IssueRecord, PageResponse, Repository, StopReason};

use std::io::Write;

pub struct IssueDigest {
    client: IssuesClient,
    filter: AuthorFilter,
}

impl IssueDigest {
    pub fn new() -> Result<Self> {
        Self::with_config(FetchConfig::default(), AuthorFilter::default())
    }

    pub fn with_config(config: FetchConfig, filter: AuthorFilter) -> Result<Self> {
        let client = IssuesClient::with_config(config)?;
        Ok(Self { client, filter })
    }

    pub fn filter(&self) -> &AuthorFilter {
        &self.filter
    }

    pub async fn fetch_issues(&self, repo: &Repository) -> Result<CollectionResult> {
        self.client.fetch_issues(repo, &self.filter).await
    }

    /// Fetches every page and writes the listing to `out`.
    pub async fn run<W: Write>(&self, repo: &Repository, out: W) -> Result<CollectionResult> {
        let result = self.fetch_issues(repo).await?;
        let mut reporter = Reporter::new(out);
        reporter.write_report(&result)?;
        Ok(result)
    }
}

pub struct IssueDigestBuilder {
    config: FetchConfig,
    filter: AuthorFilter,
}

impl IssueDigestBuilder {
    pub fn new() -> Self {
        Self {
            config: FetchConfig::default(),
            filter: AuthorFilter::default(),
        }
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.github.api_base_url = url.into();
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.github.user_agent = agent.into();
        self
    }

    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.github.timeout_seconds = Some(seconds);
        self
    }

    pub fn per_page(mut self, per_page: u8) -> Self {
        self.config.listing.per_page = per_page;
        self
    }

    pub fn state(mut self, state: IssueState) -> Self {
        self.config.listing.state = state;
        self
    }

    pub fn max_pages(mut self, pages: u32) -> Self {
        self.config.listing.max_pages = Some(pages);
        self
    }

    pub fn exclude_author(mut self, login: impl Into<String>) -> Self {
        self.filter = self.filter.exclude(login);
        self
    }

    pub fn author_filter(mut self, filter: AuthorFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn build(self) -> Result<IssueDigest> {
        IssueDigest::with_config(self.config, self.filter)
    }
}

impl Default for IssueDigestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
