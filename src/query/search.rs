//! Free-text search predicate shared by every list view.

use crate::issue::Issue;
use crate::user::User;

/// Case-insensitive substring match.
///
/// Uses `unicase` for correct Unicode case folding (handles Turkish i,
/// German ß, etc.). An empty needle matches unconditionally.
pub fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack_folded = unicase::UniCase::new(haystack).to_folded_case();
    let needle_folded = unicase::UniCase::new(needle).to_folded_case();
    haystack_folded.contains(&needle_folded)
}

/// A record with a designated set of free-text fields for search.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Issue {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description, &self.location]
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }
}

/// True when the query matches ANY designated field of the record.
///
/// The empty query passes unconditionally, so an untouched search box shows
/// the full collection.
pub fn text_matches<T: Searchable>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| contains_case_insensitive(field, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::ISSUES;

    #[test]
    fn test_contains_case_insensitive() {
        assert!(contains_case_insensitive("Bandra West", "bandra"));
        assert!(contains_case_insensitive("Bandra West", "BANDRA"));
        assert!(contains_case_insensitive("Bandra West", "ra We"));
        assert!(!contains_case_insensitive("Bandra West", "Andheri"));

        // Empty needle always matches
        assert!(contains_case_insensitive("anything", ""));
        assert!(contains_case_insensitive("", ""));

        // Needle longer than haystack
        assert!(!contains_case_insensitive("hi", "hello"));

        // Unicode case folding
        assert!(contains_case_insensitive("Straße", "STRASSE"));
    }

    #[test]
    fn test_text_matches_any_designated_field() {
        let issue = &ISSUES[0];
        assert!(text_matches(issue, "pothole")); // title
        assert!(text_matches(issue, "two-wheelers")); // description
        assert!(text_matches(issue, "linking road")); // location
        assert!(!text_matches(issue, "garbage"));
    }

    #[test]
    fn test_text_matches_empty_query_passes() {
        for issue in ISSUES.iter() {
            assert!(text_matches(issue, ""));
        }
    }

    #[test]
    fn test_text_matches_ignores_undesignated_fields() {
        // Reporter name is not a designated issue search field
        let issue = &ISSUES[0];
        assert_eq!(issue.reported_by, "Amit S.");
        assert!(!text_matches(issue, "Amit"));
    }
}
