//! Issue payload parsing and commit message composition.

use serde::Deserialize;
use serde_json::Value;

use crate::error::CommitError;

/// One open issue from the code-host search response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}: {}", self.number, self.title)
    }
}

/// Parses the search response text into issues.
///
/// Two shapes are accepted as first-class, branching on the first
/// non-whitespace byte: an envelope object whose `items` field is the
/// issue array, or a bare array. Some providers wrap results, others
/// don't; neither shape is treated as canonical. Anything else is
/// [`CommitError::MalformedIssuePayload`].
pub fn parse_issues(text: &str) -> Result<Vec<Issue>, CommitError> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('{') {
        let value: Value =
            serde_json::from_str(text).map_err(|_| CommitError::MalformedIssuePayload)?;
        match value.get("items") {
            Some(items @ Value::Array(_)) => serde_json::from_value(items.clone())
                .map_err(|_| CommitError::MalformedIssuePayload),
            _ => Err(CommitError::MalformedIssuePayload),
        }
    } else if trimmed.starts_with('[') {
        serde_json::from_str(text).map_err(|_| CommitError::MalformedIssuePayload)
    } else {
        Err(CommitError::MalformedIssuePayload)
    }
}

/// Composes the commit message. Pure; the summary is used verbatim.
pub fn compose_commit_message(issue_number: u64, summary: &str) -> String {
    format!("Closing #{}. {}", issue_number, summary)
}

/// The code-host search query for the caller's open assigned issues.
pub fn issue_search_query(org: &str) -> String {
    format!("org:{} is:issue is:open assignee:@me", org)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_envelope_with_items() {
        let issues = parse_issues(r#"{"items": [{"number": 1, "title": "A"}]}"#).unwrap();
        assert_eq!(
            issues,
            vec![Issue {
                number: 1,
                title: "A".into()
            }]
        );
    }

    #[test]
    fn parses_bare_array() {
        let issues = parse_issues(r#"[{"number": 2, "title": "B"}]"#).unwrap();
        assert_eq!(
            issues,
            vec![Issue {
                number: 2,
                title: "B".into()
            }]
        );
    }

    #[test]
    fn parses_with_leading_whitespace() {
        let issues = parse_issues("  \n\t[{\"number\": 3, \"title\": \"C\"}]").unwrap();
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn extra_issue_fields_are_ignored() {
        let issues =
            parse_issues(r#"[{"number": 4, "title": "D", "state": "open", "labels": []}]"#)
                .unwrap();
        assert_eq!(issues[0].number, 4);
    }

    #[test]
    fn object_without_items_is_malformed() {
        assert!(matches!(
            parse_issues("{}"),
            Err(CommitError::MalformedIssuePayload)
        ));
        assert!(matches!(
            parse_issues(r#"{"total_count": 0}"#),
            Err(CommitError::MalformedIssuePayload)
        ));
    }

    #[test]
    fn non_json_is_malformed() {
        assert!(matches!(
            parse_issues("rate limit exceeded"),
            Err(CommitError::MalformedIssuePayload)
        ));
        assert!(matches!(
            parse_issues("{broken"),
            Err(CommitError::MalformedIssuePayload)
        ));
    }

    #[test]
    fn composes_commit_message() {
        assert_eq!(compose_commit_message(42, "add foo"), "Closing #42. add foo");
    }

    #[test]
    fn builds_search_query() {
        assert_eq!(
            issue_search_query("acme"),
            "org:acme is:issue is:open assignee:@me"
        );
    }

    #[test]
    fn issue_display_format() {
        let issue = Issue {
            number: 7,
            title: "Fix the thing".into(),
        };
        assert_eq!(issue.to_string(), "#7: Fix the thing");
    }
}
