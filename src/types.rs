use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IssueDigestError, Result};

/// One entry of the issues endpoint. Pull requests come through here too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub title: String,
    pub user: IssueAuthor,
    #[serde(default)]
    pub body: Option<String>,
}

impl IssueRecord {
    pub fn new(title: impl Into<String>, login: impl Into<String>, body: Option<&str>) -> Self {
        Self {
            title: title.into(),
            user: IssueAuthor {
                login: login.into(),
            },
            body: body.map(str::to_string),
        }
    }

    pub fn author(&self) -> &str {
        &self.user.login
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueAuthor {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub owner: String,
    pub name: String,
    pub full_name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        let owner = owner.into();
        let name = name.into();
        let full_name = format!("{}/{}", owner, name);
        Self {
            owner,
            name,
            full_name,
        }
    }

    pub fn from_full_name(full_name: &str) -> Result<Self> {
        match full_name.split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(Self::new(*owner, *name)),
            _ => Err(IssueDigestError::InvalidRepository(format!(
                "expected 'owner/name', got: {}",
                full_name
            ))),
        }
    }

    pub fn issues_path(&self) -> String {
        format!("/repos/{}/{}/issues", self.owner, self.name)
    }
}

/// Result of requesting a single page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageResponse {
    Issues(Vec<IssueRecord>),
    /// Non-success HTTP status together with the response text.
    Failed { status: u16, text: String },
}

/// Why pagination ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    EmptyPage { page: u32 },
    HttpFailure { page: u32, status: u16, text: String },
    PageLimit { limit: u32 },
}

impl StopReason {
    pub fn is_failure(&self) -> bool {
        matches!(self, StopReason::HttpFailure { .. })
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::EmptyPage { page } => write!(f, "page {} was empty", page),
            StopReason::HttpFailure { status, text, .. } => {
                write!(f, "Failed to fetch issues: {}, {}", status, text)
            }
            StopReason::PageLimit { limit } => write!(f, "reached page limit ({})", limit),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionResult {
    pub repository: Repository,
    pub issues: Vec<IssueRecord>,
    pub pages_fetched: u32,
    pub skipped_authored_by_bot: usize,
    pub stop_reason: StopReason,
    pub collection_time: DateTime<Utc>,
}
