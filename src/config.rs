use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::error::{IssueDigestError, Result};

/// Media type GitHub documents for the v3 REST API.
pub const GITHUB_V3_ACCEPT: &str = "application/vnd.github.v3+json";

/// Largest page size the issues endpoint honours.
pub const MAX_PER_PAGE: u8 = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchConfig {
    pub github: GitHubConfig,
    pub listing: ListingConfig,
}

impl FetchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.github.api_base_url.trim().is_empty() {
            return Err(IssueDigestError::Config(
                "api_base_url must not be empty".to_string(),
            ));
        }
        self.listing.validate()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    pub api_base_url: String,
    pub user_agent: String,
    pub accept: String,
    /// `None` leaves the HTTP client's own default in place.
    pub timeout_seconds: Option<u64>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            user_agent: "issue-digest/0.1.0".to_string(),
            accept: GITHUB_V3_ACCEPT.to_string(),
            timeout_seconds: None,
        }
    }
}

impl GitHubConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
    All,
}

impl IssueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
            IssueState::All => "all",
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    pub per_page: u8,
    pub state: IssueState,
    /// Stop after this many pages even if the API keeps returning entries.
    pub max_pages: Option<u32>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            per_page: MAX_PER_PAGE,
            state: IssueState::All,
            max_pages: None,
        }
    }
}

impl ListingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(IssueDigestError::Config(format!(
                "per_page must be between 1 and {}, got {}",
                MAX_PER_PAGE, self.per_page
            )));
        }
        if self.max_pages == Some(0) {
            return Err(IssueDigestError::Config(
                "max_pages must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_public_api() {
        let config = FetchConfig::default();
        assert_eq!(config.github.api_base_url, "https://api.github.com");
        assert_eq!(config.github.accept, "application/vnd.github.v3+json");
        assert!(config.github.timeout().is_none());
        assert_eq!(config.listing.per_page, 100);
        assert_eq!(config.listing.state, IssueState::All);
        assert!(config.listing.max_pages.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn per_page_out_of_range_is_rejected() {
        let mut listing = ListingConfig::default();
        listing.per_page = 0;
        assert!(listing.validate().is_err());

        listing.per_page = 101;
        assert!(listing.validate().is_err());
    }

    #[test]
    fn zero_page_cap_is_rejected() {
        let listing = ListingConfig {
            max_pages: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            listing.validate(),
            Err(IssueDigestError::Config(_))
        ));
    }

    #[test]
    fn issue_state_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&IssueState::All).unwrap(), "\"all\"");
        assert_eq!(IssueState::Closed.to_string(), "closed");
    }
}
