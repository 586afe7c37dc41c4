//! Tests for search sort and order parameters.

use gh_records::github::{IssueSearchSort, RepositorySearchSort};
use gh_records::{SearchOrder, Symbol, UserSearchSort};

#[test]
fn test_user_search_sort_as_str() {
    assert_eq!(UserSearchSort::Followers.as_str(), "followers");
    assert_eq!(UserSearchSort::Repositories.as_str(), "repositories");
    assert_eq!(UserSearchSort::Joined.as_str(), "joined");
}

#[test]
fn test_search_order_as_str() {
    assert_eq!(SearchOrder::Asc.as_str(), "asc");
    assert_eq!(SearchOrder::Desc.as_str(), "desc");
}

#[test]
fn test_repository_and_issue_sorts() {
    assert_eq!(RepositorySearchSort::Stars.as_str(), "stars");
    assert_eq!(RepositorySearchSort::HelpWantedIssues.as_str(), "help-wanted-issues");
    assert_eq!(IssueSearchSort::Reactions.as_str(), "reactions");
}

#[test]
fn test_enum_equality() {
    assert_eq!(UserSearchSort::Followers, UserSearchSort::Followers);
    assert_ne!(UserSearchSort::Followers, UserSearchSort::Repositories);

    assert_eq!(SearchOrder::Asc, SearchOrder::Asc);
    assert_ne!(SearchOrder::Asc, SearchOrder::Desc);
}

#[test]
fn test_sorts_parse_and_display_as_wire_strings() {
    assert_eq!("help-wanted-issues".parse::<RepositorySearchSort>().unwrap(), RepositorySearchSort::HelpWantedIssues);
    assert_eq!(SearchOrder::Desc.to_string(), "desc");
    assert!("Followers".parse::<UserSearchSort>().is_err());
}
