//! Client-side filter engine.
//!
//! Every list view derives its visible subset the same way: a free-text
//! query ANDed with zero or more categorical filters, each of which is
//! either the `All` sentinel (no constraint) or a specific enum value.
//! Filtering is pure: it never mutates the source collection and preserves
//! original relative order, with no dedup or ranking.

use std::str::FromStr;

use crate::error::Result;
use crate::issue::Issue;
use crate::types::{AccountStatus, Category, IssueStatus, Role, Severity};
use crate::user::User;

pub mod search;

pub use search::{Searchable, contains_case_insensitive, text_matches};

/// A categorical filter: the `All` sentinel admits every record, `Only`
/// requires field equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Selection::Only(value)
    }
}

impl<T: FromStr> Selection<T> {
    /// Parse a CLI/UI filter value; the literal `"all"` (any case) is the
    /// sentinel, anything else must parse as a specific value.
    pub fn parse(s: &str) -> std::result::Result<Self, T::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

/// Compound filter over the issue collection.
#[derive(Debug, Clone, Default)]
pub struct IssueQuery {
    pub query: String,
    pub category: Selection<Category>,
    pub status: Selection<IssueStatus>,
    pub severity: Selection<Severity>,
}

impl IssueQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<Selection<Category>>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<Selection<IssueStatus>>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_severity(mut self, severity: impl Into<Selection<Severity>>) -> Self {
        self.severity = severity.into();
        self
    }

    /// Parse filter values straight from CLI/UI strings, where each
    /// categorical value defaults to the `"all"` sentinel.
    pub fn from_strings(
        query: &str,
        category: Option<&str>,
        status: Option<&str>,
        severity: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            query: query.to_string(),
            category: category.map(Selection::parse).transpose()?.unwrap_or_default(),
            status: status.map(Selection::parse).transpose()?.unwrap_or_default(),
            severity: severity.map(Selection::parse).transpose()?.unwrap_or_default(),
        })
    }

    /// Reset every filter to its sentinel and the query to empty, restoring
    /// the full collection on the next `apply`.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// AND of the free-text predicate and every categorical predicate.
    pub fn matches(&self, issue: &Issue) -> bool {
        text_matches(issue, &self.query)
            && self.category.admits(&issue.category)
            && self.status.admits(&issue.status)
            && self.severity.admits(&issue.severity)
    }

    /// Derive the filtered view: an ordered subsequence of the input.
    pub fn apply<'a>(&self, issues: &'a [Issue]) -> Vec<&'a Issue> {
        issues.iter().filter(|issue| self.matches(issue)).collect()
    }
}

/// Compound filter over the user collection (admin view).
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub query: String,
    pub role: Selection<Role>,
    pub status: Selection<AccountStatus>,
}

impl UserQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_role(mut self, role: impl Into<Selection<Role>>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<Selection<AccountStatus>>) -> Self {
        self.status = status.into();
        self
    }

    pub fn from_strings(query: &str, role: Option<&str>, status: Option<&str>) -> Result<Self> {
        Ok(Self {
            query: query.to_string(),
            role: role.map(Selection::parse).transpose()?.unwrap_or_default(),
            status: status.map(Selection::parse).transpose()?.unwrap_or_default(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, user: &User) -> bool {
        text_matches(user, &self.query)
            && self.role.admits(&user.role())
            && self.status.admits(&user.status)
    }

    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        users.iter().filter(|user| self.matches(user)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{ISSUES, USERS};

    #[test]
    fn test_selection_all_admits_everything() {
        let all: Selection<Category> = Selection::All;
        assert!(all.admits(&Category::Roads));
        assert!(all.admits(&Category::Noise));
    }

    #[test]
    fn test_selection_only_requires_equality() {
        let only = Selection::Only(IssueStatus::Resolved);
        assert!(only.admits(&IssueStatus::Resolved));
        assert!(!only.admits(&IssueStatus::Reported));
    }

    #[test]
    fn test_selection_parse_sentinel_any_case() {
        assert_eq!(Selection::<Category>::parse("all").unwrap(), Selection::All);
        assert_eq!(Selection::<Category>::parse("ALL").unwrap(), Selection::All);
        assert_eq!(
            Selection::<Category>::parse("roads").unwrap(),
            Selection::Only(Category::Roads)
        );
        assert!(Selection::<Category>::parse("bogus").is_err());
    }

    #[test]
    fn test_empty_query_all_sentinels_is_identity() {
        let query = IssueQuery::new();
        let filtered = query.apply(&ISSUES);
        assert_eq!(filtered.len(), ISSUES.len());
        // Original relative order preserved
        let ids: Vec<u32> = filtered.iter().map(|i| i.id).collect();
        let expected: Vec<u32> = ISSUES.iter().map(|i| i.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_category_filter_case_insensitive_from_string() {
        let upper = IssueQuery::from_strings("", Some("ROADS"), None, None).unwrap();
        let lower = IssueQuery::from_strings("", Some("roads"), None, None).unwrap();
        let a: Vec<u32> = upper.apply(&ISSUES).iter().map(|i| i.id).collect();
        let b: Vec<u32> = lower.apply(&ISSUES).iter().map(|i| i.id).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|id| {
            ISSUES.iter().find(|i| i.id == *id).unwrap().category == Category::Roads
        }));
    }

    #[test]
    fn test_query_case_insensitive_equivalence() {
        let upper = IssueQuery::new().with_query("BANDRA");
        let lower = IssueQuery::new().with_query("bandra");
        let a: Vec<u32> = upper.apply(&ISSUES).iter().map(|i| i.id).collect();
        let b: Vec<u32> = lower.apply(&ISSUES).iter().map(|i| i.id).collect();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_predicates_and_compose() {
        // Text alone matches several Linking Road issues; adding a category
        // constraint narrows to the intersection.
        let text_only = IssueQuery::new().with_query("road");
        let with_category = text_only
            .clone()
            .with_category(Selection::Only(Category::Electricity));

        let broad: Vec<u32> = text_only.apply(&ISSUES).iter().map(|i| i.id).collect();
        let narrow: Vec<u32> = with_category.apply(&ISSUES).iter().map(|i| i.id).collect();

        assert!(narrow.iter().all(|id| broad.contains(id)));
        assert!(narrow.len() < broad.len());
    }

    #[test]
    fn test_monotonic_narrowing() {
        // Adding categorical constraints can only shrink the result set.
        let base = IssueQuery::new().with_query("the");
        let narrowed = base.clone().with_status(Selection::Only(IssueStatus::Assigned));
        let narrower = narrowed
            .clone()
            .with_severity(Selection::Only(Severity::High));

        let r0: Vec<u32> = base.apply(&ISSUES).iter().map(|i| i.id).collect();
        let r1: Vec<u32> = narrowed.apply(&ISSUES).iter().map(|i| i.id).collect();
        let r2: Vec<u32> = narrower.apply(&ISSUES).iter().map(|i| i.id).collect();

        assert!(r1.iter().all(|id| r0.contains(id)));
        assert!(r2.iter().all(|id| r1.contains(id)));
    }

    #[test]
    fn test_clear_restores_full_collection() {
        let mut query = IssueQuery::new()
            .with_query("pothole")
            .with_category(Selection::Only(Category::Roads))
            .with_status(Selection::Only(IssueStatus::InProgress));
        assert!(query.apply(&ISSUES).len() < ISSUES.len());

        query.clear();
        assert!(query.query.is_empty());
        assert!(query.category.is_all());
        assert_eq!(query.apply(&ISSUES).len(), ISSUES.len());
    }

    #[test]
    fn test_filtering_never_mutates_source() {
        let before: Vec<u32> = ISSUES.iter().map(|i| i.id).collect();
        let _ = IssueQuery::new().with_query("water").apply(&ISSUES);
        let after: Vec<u32> = ISSUES.iter().map(|i| i.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_user_query_by_role_and_text() {
        let officials = UserQuery::new().with_role(Selection::Only(Role::Official));
        let found = officials.apply(&USERS);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|u| u.role() == Role::Official));

        let by_email = UserQuery::new().with_query("priya.mehta@");
        assert_eq!(by_email.apply(&USERS).len(), 1);
    }

    #[test]
    fn test_user_query_status_filter() {
        let pending = UserQuery::from_strings("", None, Some("pending")).unwrap();
        let found = pending.apply(&USERS);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ananya Singh");
    }
}
