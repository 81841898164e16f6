// Rust guideline compliant 2026-10-19

//! Issue records and their field-level comparison.
//!
//! Almost every field of an [`Issue`] is optional. Empty values are omitted
//! from the JSON file and treated as absent everywhere else, so a field set
//! to an empty list and a field never set are indistinguishable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// File extension of issue records in the issues directory.
pub const ISSUE_EXT: &str = "issue";

/// A comment attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment author, if a username was configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Unix timestamp of creation.
    pub timestamp: i64,
    /// Comment body.
    pub text: String,
}

/// A tracked issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Content-derived identifier, also the file stem.
    #[serde(default)]
    pub id: String,

    /// Parent issue ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Child issue IDs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    /// ID of the issue this one duplicates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicates: Option<String>,

    /// User who filed the issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// User the issue is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// Users following the issue.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub listeners: Vec<String>,

    /// Issue type, such as bug or feature request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    /// Target date or milestone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Resolution; an issue is resolved exactly when this is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Unix timestamp of creation.
    pub creation_date: i64,
    /// Unix timestamp of resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<String>,

    /// One-line summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Source paths related to the issue.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Steps to reproduce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reproduction: Option<String>,
    /// Expected result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Stack trace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

/// Displayable issue fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Parent,
    Children,
    Duplicates,
    Creator,
    AssignedTo,
    Listeners,
    Issue,
    Target,
    Severity,
    Status,
    Resolution,
    Category,
    CreationDate,
    ResolvedDate,
    Projection,
    Estimate,
    Title,
    Paths,
    Description,
    Reproduction,
    Expected,
    Trace,
    Comments,
}

impl Field {
    /// Every field in display order.
    pub const ALL: [Field; 24] = [
        Field::Id,
        Field::Parent,
        Field::Children,
        Field::Duplicates,
        Field::Creator,
        Field::AssignedTo,
        Field::Listeners,
        Field::Issue,
        Field::Target,
        Field::Severity,
        Field::Status,
        Field::Resolution,
        Field::Category,
        Field::CreationDate,
        Field::ResolvedDate,
        Field::Projection,
        Field::Estimate,
        Field::Title,
        Field::Paths,
        Field::Description,
        Field::Reproduction,
        Field::Expected,
        Field::Trace,
        Field::Comments,
    ];

    /// Returns the human-readable label of the field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Parent => "Parent",
            Field::Children => "Children",
            Field::Duplicates => "Duplicates",
            Field::Creator => "Creator",
            Field::AssignedTo => "Assigned To",
            Field::Listeners => "Listeners",
            Field::Issue => "Issue Type",
            Field::Target => "Target",
            Field::Severity => "Severity",
            Field::Status => "Status",
            Field::Resolution => "Resolution",
            Field::Category => "Category",
            Field::CreationDate => "Created",
            Field::ResolvedDate => "Resolved",
            Field::Projection => "Projection",
            Field::Estimate => "Estimate",
            Field::Title => "Title",
            Field::Paths => "Paths",
            Field::Description => "Description",
            Field::Reproduction => "Reproduction Steps",
            Field::Expected => "Expected Result",
            Field::Trace => "Stack Trace",
            Field::Comments => "Comments",
        }
    }

    /// Returns true for fields holding issue IDs.
    #[must_use]
    pub fn is_id(self) -> bool {
        matches!(
            self,
            Field::Id | Field::Parent | Field::Children | Field::Duplicates
        )
    }

    /// Returns true for fields likely to span several lines.
    #[must_use]
    pub fn is_long(self) -> bool {
        matches!(
            self,
            Field::Listeners
                | Field::Paths
                | Field::Description
                | Field::Reproduction
                | Field::Expected
                | Field::Trace
                | Field::Comments
        )
    }
}

/// A borrowed, non-empty field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'a> {
    /// A single string.
    Text(&'a str),
    /// A list of strings.
    List(&'a [String]),
    /// A Unix timestamp.
    Time(i64),
    /// Comments, oldest first.
    Comments(&'a [Comment]),
}

/// A single field difference between two versions of an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change<'a> {
    /// A scalar field was set, replacing `was` if present.
    Set {
        field: Field,
        now: Value<'a>,
        was: Option<Value<'a>>,
    },
    /// A scalar field was cleared.
    Removed { field: Field, was: Value<'a> },
    /// Entries were added to or removed from a list field.
    Listed {
        field: Field,
        added: Vec<&'a str>,
        removed: Vec<&'a str>,
    },
}

impl Issue {
    /// Creates a new open issue with a generated ID.
    ///
    /// # Arguments
    ///
    /// * `title` - One-line summary
    /// * `creator` - Filing user, if known
    /// * `timestamp` - Unix timestamp of creation
    /// * `nonce` - Collision counter passed to ID generation
    #[must_use]
    pub fn new(title: String, creator: Option<String>, timestamp: i64, nonce: u32) -> Self {
        let id = crate::identity::generate_id(
            &title,
            creator.as_deref().unwrap_or_default(),
            timestamp,
            nonce,
        );
        Self {
            id,
            creator,
            creation_date: timestamp,
            title: Some(title).filter(|t| !t.is_empty()),
            ..Self::default()
        }
    }

    /// Returns the file name the issue is stored under.
    #[must_use]
    pub fn filename(&self) -> String {
        format!("{}.{}", self.id, ISSUE_EXT)
    }

    /// Returns true if the issue carries a resolution.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    /// Returns the title, or an empty string.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Returns the value of `field`, or `None` if it is empty.
    #[must_use]
    pub fn value(&self, field: Field) -> Option<Value<'_>> {
        fn text(value: &Option<String>) -> Option<Value<'_>> {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(Value::Text)
        }
        fn list(values: &[String]) -> Option<Value<'_>> {
            (!values.is_empty()).then_some(Value::List(values))
        }

        match field {
            Field::Id => Some(Value::Text(&self.id)),
            Field::Parent => text(&self.parent),
            Field::Children => list(&self.children),
            Field::Duplicates => text(&self.duplicates),
            Field::Creator => text(&self.creator),
            Field::AssignedTo => text(&self.assigned_to),
            Field::Listeners => list(&self.listeners),
            Field::Issue => text(&self.issue),
            Field::Target => text(&self.target),
            Field::Severity => text(&self.severity),
            Field::Status => text(&self.status),
            Field::Resolution => text(&self.resolution),
            Field::Category => text(&self.category),
            Field::CreationDate => Some(Value::Time(self.creation_date)),
            Field::ResolvedDate => self.resolved_date.map(Value::Time),
            Field::Projection => text(&self.projection),
            Field::Estimate => text(&self.estimate),
            Field::Title => text(&self.title),
            Field::Paths => list(&self.paths),
            Field::Description => text(&self.description),
            Field::Reproduction => text(&self.reproduction),
            Field::Expected => text(&self.expected),
            Field::Trace => text(&self.trace),
            Field::Comments => {
                (!self.comments.is_empty()).then_some(Value::Comments(&self.comments))
            }
        }
    }

    /// Lists the changes that turn `old` into `self`, in display order.
    ///
    /// # Arguments
    ///
    /// * `old` - The previous version of the issue
    /// * `skip` - Fields to leave out of the comparison
    #[must_use]
    pub fn changes_from<'a>(&'a self, old: &'a Issue, skip: &[Field]) -> Vec<Change<'a>> {
        Field::ALL
            .iter()
            .copied()
            .filter(|field| !skip.contains(field))
            .filter_map(|field| diff_field(field, self.value(field), old.value(field)))
            .collect()
    }
}

fn diff_field<'a>(
    field: Field,
    now: Option<Value<'a>>,
    was: Option<Value<'a>>,
) -> Option<Change<'a>> {
    if now == was {
        return None;
    }
    if let (Some(now_items), Some(was_items)) = (list_items(now.as_ref()), list_items(was.as_ref()))
    {
        let now_set: BTreeSet<&str> = now_items.iter().copied().collect();
        let was_set: BTreeSet<&str> = was_items.iter().copied().collect();
        let added: Vec<&str> = now_set.difference(&was_set).copied().collect();
        let removed: Vec<&str> = was_set.difference(&now_set).copied().collect();
        if added.is_empty() && removed.is_empty() {
            return None;
        }
        return Some(Change::Listed {
            field,
            added,
            removed,
        });
    }
    match (now, was) {
        (Some(now), was) => Some(Change::Set { field, now, was }),
        (None, Some(was)) => Some(Change::Removed { field, was }),
        (None, None) => None,
    }
}

/// Flattens list-shaped values; an absent value counts as an empty list
/// only when the other side is a list.
fn list_items<'a>(value: Option<&Value<'a>>) -> Option<Vec<&'a str>> {
    match value {
        Some(Value::List(items)) => Some(items.iter().map(String::as_str).collect()),
        Some(Value::Comments(comments)) => {
            Some(comments.iter().map(|c| c.text.as_str()).collect())
        }
        Some(_) => None,
        None => Some(Vec::new()),
    }
}
