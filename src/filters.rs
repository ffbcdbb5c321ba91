use serde::{Deserialize, Serialize};

use crate::types::IssueRecord;

/// Login GitHub assigns to the Dependabot app.
pub const DEPENDABOT_LOGIN: &str = "dependabot[bot]";

/// Drops entries whose author login is listed. Comparison is exact and
/// case-sensitive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthorFilter {
    pub excluded_logins: Vec<String>,
}

impl Default for AuthorFilter {
    fn default() -> Self {
        Self {
            excluded_logins: vec![DEPENDABOT_LOGIN.to_string()],
        }
    }
}

impl AuthorFilter {
    /// A filter that keeps everything.
    pub fn none() -> Self {
        Self {
            excluded_logins: vec![],
        }
    }

    pub fn exclude(mut self, login: impl Into<String>) -> Self {
        let login = login.into();
        if !self.excluded_logins.contains(&login) {
            self.excluded_logins.push(login);
        }
        self
    }

    pub fn matches(&self, issue: &IssueRecord) -> bool {
        !self
            .excluded_logins
            .iter()
            .any(|login| login == issue.author())
    }

    /// Splits a page into the entries to keep, in their original order, and
    /// the number dropped.
    pub fn partition(&self, issues: Vec<IssueRecord>) -> (Vec<IssueRecord>, usize) {
        let total = issues.len();
        let kept: Vec<IssueRecord> = issues.into_iter().filter(|i| self.matches(i)).collect();
        let dropped = total - kept.len();
        (kept, dropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_drops_dependabot_only() {
        let filter = AuthorFilter::default();
        assert!(!filter.matches(&IssueRecord::new("bump", DEPENDABOT_LOGIN, None)));
        assert!(filter.matches(&IssueRecord::new("bug", "alice", Some("hi"))));
    }

    #[test]
    fn login_match_is_exact() {
        let filter = AuthorFilter::default();
        assert!(filter.matches(&IssueRecord::new("a", "Dependabot[bot]", None)));
        assert!(filter.matches(&IssueRecord::new("b", "dependabot", None)));
        assert!(filter.matches(&IssueRecord::new("c", " dependabot[bot]", None)));
    }

    #[test]
    fn partition_keeps_order_and_counts_drops() {
        let filter = AuthorFilter::default().exclude("renovate[bot]");
        let page = vec![
            IssueRecord::new("one", "alice", None),
            IssueRecord::new("bump serde", DEPENDABOT_LOGIN, None),
            IssueRecord::new("two", "bob", None),
            IssueRecord::new("lockfile", "renovate[bot]", None),
            IssueRecord::new("three", "carol", None),
        ];

        let (kept, dropped) = filter.partition(page);
        let titles: Vec<&str> = kept.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
        assert_eq!(dropped, 2);
    }

    #[test]
    fn exclude_does_not_duplicate() {
        let filter = AuthorFilter::default().exclude(DEPENDABOT_LOGIN);
        assert_eq!(filter.excluded_logins.len(), 1);
        assert!(AuthorFilter::none().excluded_logins.is_empty());
    }
}
