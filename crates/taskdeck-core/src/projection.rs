//! Derives the displayable subset of the collection from the active tab and
//! search term. Pure and order-preserving; recomputed on every change to any
//! input, with no incremental diffing.

use crate::models::{TabFilter, Task};

/// Tab filter first, then a case-insensitive substring match on the title.
/// An empty search term passes everything the tab admits; an empty result
/// is a normal, displayable outcome.
pub fn project_tasks<'a>(tasks: &'a [Task], tab: TabFilter, search: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| tab.admits(task))
        .filter(|task| search.is_empty() || contains_ignore_case(&task.title, search))
        .collect()
}

/// ASCII case-insensitive substring test.
pub fn contains_ignore_case(text: &str, term: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let term: Vec<char> = term.chars().collect();
    if term.is_empty() {
        return true;
    }
    if text.len() < term.len() {
        return false;
    }
    (0..=text.len() - term.len()).any(|start| {
        term.iter()
            .enumerate()
            .all(|(i, tc)| text[start + i].eq_ignore_ascii_case(tc))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn task(id: &str, title: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            completed,
            image_url: None,
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap(),
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task("1", "Buy milk", false),
            task("2", "Walk the dog", true),
            task("3", "Buy eggs", true),
        ]
    }

    #[test]
    fn test_all_tab_empty_search_passes_everything() {
        let tasks = sample();
        let projected = project_tasks(&tasks, TabFilter::All, "");
        assert_eq!(projected.len(), 3);
        // Source order preserved
        let ids: Vec<&str> = projected.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_tab_membership() {
        let tasks = sample();
        assert!(project_tasks(&tasks, TabFilter::Completed, "")
            .iter()
            .all(|t| t.completed));
        assert!(project_tasks(&tasks, TabFilter::Active, "")
            .iter()
            .all(|t| !t.completed));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let tasks = sample();
        let projected = project_tasks(&tasks, TabFilter::All, "MILK");
        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].id, "1");

        let projected = project_tasks(&tasks, TabFilter::All, "buy");
        assert_eq!(projected.len(), 2);
    }

    #[test]
    fn test_no_match_is_a_valid_empty_state() {
        let tasks = vec![task("1", "Buy milk", false)];
        assert!(project_tasks(&tasks, TabFilter::All, "eggs").is_empty());
    }

    #[test]
    fn test_search_composes_with_tab() {
        let tasks = sample();
        let projected = project_tasks(&tasks, TabFilter::Completed, "buy");
        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].id, "3");
    }

    #[test]
    fn test_projection_is_pure() {
        let tasks = sample();
        let first: Vec<&str> = project_tasks(&tasks, TabFilter::All, "buy")
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        let second: Vec<&str> = project_tasks(&tasks, TabFilter::All, "buy")
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Buy Milk", "milk"));
        assert!(contains_ignore_case("Buy Milk", "UY M"));
        assert!(!contains_ignore_case("Buy Milk", "eggs"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("ab", "abc"));
    }
}
