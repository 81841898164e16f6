// Rust guideline compliant 2026-10-19

//! Listing and filtering helpers for Abundant.

use crate::db::Database;
use crate::error::Result;
use abundant_core::{Issue, MetaKind};

/// Who an issue must be assigned to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Assignee {
    /// Any assignment, including none.
    #[default]
    Anyone,
    /// Not assigned to anybody.
    Nobody,
    /// Assigned to this exact user line.
    User(String),
}

impl Assignee {
    fn matches(&self, assigned_to: Option<&str>) -> bool {
        match self {
            Assignee::Anyone => true,
            Assignee::Nobody => assigned_to.is_none(),
            Assignee::User(user) => assigned_to == Some(user.as_str()),
        }
    }
}

/// Filters for listing issues. Every set filter must match.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// List resolved issues instead of open ones.
    pub resolved: bool,
    /// Assignee filter; `Anyone` disables it.
    pub assigned_to: Assignee,
    /// Issues followed by any of these users.
    pub listeners: Vec<String>,
    /// Filter by issue type.
    pub issue: Option<String>,
    /// Filter by target release.
    pub target: Option<String>,
    /// Filter by severity.
    pub severity: Option<String>,
    /// Filter by status.
    pub status: Option<String>,
    /// Filter by category.
    pub category: Option<String>,
    /// Filter by resolution; only meaningful for resolved issues.
    pub resolution: Option<String>,
    /// Filter by creator; `Nobody` matches issues without one.
    pub creator: Option<Assignee>,
    /// Case-insensitive substring of the title.
    pub grep: Option<String>,
}

impl ListOptions {
    /// Returns true if `issue` passes every filter.
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        let eq = |filter: &Option<String>, value: &Option<String>| match filter {
            Some(filter) => value.as_deref() == Some(filter.as_str()),
            None => true,
        };

        issue.is_resolved() == self.resolved
            && self.assigned_to.matches(issue.assigned_to.as_deref())
            && (self.listeners.is_empty()
                || issue.listeners.iter().any(|l| self.listeners.contains(l)))
            && eq(&self.issue, &issue.issue)
            && eq(&self.target, &issue.target)
            && eq(&self.severity, &issue.severity)
            && eq(&self.status, &issue.status)
            && eq(&self.category, &issue.category)
            && eq(&self.resolution, &issue.resolution)
            && self
                .creator
                .as_ref()
                .map_or(true, |creator| creator.matches(issue.creator.as_deref()))
            && self.grep.as_ref().map_or(true, |needle| {
                issue.title().to_lowercase().contains(&needle.to_lowercase())
            })
    }

    /// Resolves metadata filters against the database vocabularies.
    ///
    /// Values outside a vocabulary are kept as typed.
    ///
    /// # Errors
    ///
    /// Returns `Abort` if a value is an ambiguous prefix of several choices.
    pub fn resolve_meta(&mut self, db: &Database) -> Result<()> {
        let fields = [
            (MetaKind::Issue, &mut self.issue),
            (MetaKind::Severity, &mut self.severity),
            (MetaKind::Status, &mut self.status),
            (MetaKind::Category, &mut self.category),
            (MetaKind::Resolution, &mut self.resolution),
        ];
        for (kind, value) in fields {
            if let Some(typed) = value.as_deref() {
                let resolved = db.meta_filter(kind, typed)?;
                *value = Some(resolved);
            }
        }
        Ok(())
    }
}

/// Filters issues and orders them oldest first.
///
/// # Arguments
///
/// * `issues` - Issues to filter
/// * `options` - List options
#[must_use]
pub fn list_issues(issues: Vec<Issue>, options: &ListOptions) -> Vec<Issue> {
    let mut issues: Vec<Issue> = issues
        .into_iter()
        .filter(|issue| options.matches(issue))
        .collect();
    issues.sort_by(|a, b| {
        a.creation_date
            .cmp(&b.creation_date)
            .then_with(|| a.id.cmp(&b.id))
    });
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_issue(title: &str, timestamp: i64) -> Issue {
        let mut issue = Issue::new(title.to_string(), Some("Jane".to_string()), timestamp, 0);
        issue.assigned_to = Some("Jane".to_string());
        issue.severity = Some("high".to_string());
        issue
    }

    #[test]
    fn test_open_issues_by_default() {
        let open = sample_issue("Open", 2);
        let mut closed = sample_issue("Closed", 1);
        closed.resolution = Some("fixed".to_string());

        let listed = list_issues(vec![closed.clone(), open.clone()], &ListOptions::default());
        assert_eq!(listed, vec![open]);

        let resolved = ListOptions {
            resolved: true,
            ..ListOptions::default()
        };
        assert_eq!(list_issues(vec![closed.clone()], &resolved), vec![closed]);
    }

    #[test]
    fn test_assignee_filter() {
        let mut unassigned = sample_issue("Unassigned", 1);
        unassigned.assigned_to = None;
        let assigned = sample_issue("Assigned", 2);
        let issues = vec![unassigned.clone(), assigned.clone()];

        let nobody = ListOptions {
            assigned_to: Assignee::Nobody,
            ..ListOptions::default()
        };
        assert_eq!(list_issues(issues.clone(), &nobody), vec![unassigned]);

        let jane = ListOptions {
            assigned_to: Assignee::User("Jane".to_string()),
            ..ListOptions::default()
        };
        assert_eq!(list_issues(issues, &jane), vec![assigned]);
    }

    #[test]
    fn test_grep_is_case_insensitive() {
        let issues = vec![sample_issue("Crash on START", 1), sample_issue("Typo", 2)];
        let options = ListOptions {
            grep: Some("start".to_string()),
            ..ListOptions::default()
        };
        let listed = list_issues(issues, &options);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title(), "Crash on START");
    }

    #[test]
    fn test_metadata_and_listener_filters() {
        let mut followed = sample_issue("Followed", 1);
        followed.listeners = vec!["Bob".to_string()];
        let other = sample_issue("Other", 2);
        let issues = vec![followed.clone(), other];

        let options = ListOptions {
            listeners: vec!["Bob".to_string(), "Eve".to_string()],
            severity: Some("high".to_string()),
            ..ListOptions::default()
        };
        assert_eq!(list_issues(issues.clone(), &options), vec![followed]);

        let low = ListOptions {
            severity: Some("low".to_string()),
            ..ListOptions::default()
        };
        assert!(list_issues(issues, &low).is_empty());
    }

    #[test]
    fn test_each_metadata_field_filters() {
        let mut tagged = sample_issue("Tagged", 1);
        tagged.target = Some("1.0".to_string());
        tagged.status = Some("started".to_string());
        tagged.category = Some("ui".to_string());
        tagged.resolution = Some("fixed".to_string());
        let mut plain = sample_issue("Plain", 2);
        plain.resolution = Some("wontfix".to_string());
        let issues = vec![tagged.clone(), plain.clone()];

        let base = ListOptions {
            resolved: true,
            ..ListOptions::default()
        };
        let by_target = ListOptions {
            target: Some("1.0".to_string()),
            ..base.clone()
        };
        let by_status = ListOptions {
            status: Some("started".to_string()),
            ..base.clone()
        };
        let by_category = ListOptions {
            category: Some("ui".to_string()),
            ..base.clone()
        };
        let by_resolution = ListOptions {
            resolution: Some("wontfix".to_string()),
            ..base.clone()
        };
        assert_eq!(list_issues(issues.clone(), &by_target), vec![tagged.clone()]);
        assert_eq!(list_issues(issues.clone(), &by_status), vec![tagged.clone()]);
        assert_eq!(list_issues(issues.clone(), &by_category), vec![tagged]);
        assert_eq!(list_issues(issues, &by_resolution), vec![plain]);
    }
}
