use std::io::{self, Write};

use crate::types::{CollectionResult, IssueRecord};

pub const SEPARATOR_WIDTH: usize = 80;
pub const MISSING_BODY: &str = "No body";

/// Writes the human-readable listing.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write_summary(&mut self, result: &CollectionResult) -> io::Result<()> {
        writeln!(
            self.out,
            "Fetched {} issues (excluding dependabot)",
            result.issues.len()
        )
    }

    pub fn write_issue(&mut self, issue: &IssueRecord) -> io::Result<()> {
        writeln!(self.out, "Title: {}", issue.title)?;
        writeln!(self.out, "Author: {}", issue.author())?;
        writeln!(
            self.out,
            "Body: {}",
            issue.body.as_deref().unwrap_or(MISSING_BODY)
        )?;
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))
    }

    pub fn write_issues(&mut self, issues: &[IssueRecord]) -> io::Result<()> {
        for issue in issues {
            self.write_issue(issue)?;
        }
        Ok(())
    }

    pub fn write_report(&mut self, result: &CollectionResult) -> io::Result<()> {
        self.write_summary(result)?;
        self.write_issues(&result.issues)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Repository, StopReason};
    use chrono::Utc;

    fn render(issues: Vec<IssueRecord>) -> String {
        let result = CollectionResult {
            repository: Repository::new("octo", "repo"),
            issues,
            pages_fetched: 2,
            skipped_authored_by_bot: 0,
            stop_reason: StopReason::EmptyPage { page: 2 },
            collection_time: Utc::now(),
        };
        let mut reporter = Reporter::new(Vec::new());
        reporter.write_report(&result).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn issue_block_layout() {
        let output = render(vec![IssueRecord::new("A", "alice", Some("hi"))]);
        let separator = "-".repeat(80);
        let expected = format!(
            "Fetched 1 issues (excluding dependabot)\nTitle: A\nAuthor: alice\nBody: hi\n{}\n",
            separator
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn absent_body_uses_placeholder() {
        let output = render(vec![IssueRecord::new("B", "bob", None)]);
        assert!(output.contains("Body: No body\n"));
    }

    #[test]
    fn empty_body_is_printed_as_is() {
        let output = render(vec![IssueRecord::new("C", "carol", Some(""))]);
        assert!(output.contains("Body: \n"));
    }

    #[test]
    fn no_issues_prints_only_summary() {
        assert_eq!(render(vec![]), "Fetched 0 issues (excluding dependabot)\n");
    }

    #[test]
    fn issues_keep_their_order() {
        let output = render(vec![
            IssueRecord::new("first", "a", None),
            IssueRecord::new("second", "b", None),
        ]);
        let first = output.find("Title: first").unwrap();
        let second = output.find("Title: second").unwrap();
        assert!(first < second);
        assert_eq!(output.matches(&"-".repeat(80)).count(), 2);
    }
}
