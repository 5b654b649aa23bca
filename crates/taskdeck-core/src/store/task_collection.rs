use std::collections::HashMap;

use crate::models::Task;

/// What happened when a mutation response was committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The stored entity was replaced with the server's representation.
    Applied,
    /// A newer mutation was issued for the same task after this one started;
    /// the response is dropped.
    Stale,
    /// No entry with that id exists anymore.
    Missing,
}

/// Single source of truth for the session's tasks, newest created first.
/// Entries change only in response to completed backend round trips: loads
/// replace everything, creates prepend, updates replace the whole entity,
/// deletes remove. Nothing is synthesized locally ahead of the server.
///
/// Two rapid mutations to one id can complete out of order; per-id tickets
/// make that race explicit. `begin_mutation` hands the round trip a ticket
/// and `commit_update` applies a response only when its ticket is still the
/// latest issued for that id.
#[derive(Debug, Default)]
pub struct TaskCollection {
    tasks: Vec<Task>,
    tickets: HashMap<String, u64>,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Adopt the server's list wholesale, in the order it arrived.
    /// Outstanding tickets are forgotten; responses from mutations that were
    /// in flight across the reload commit as stale.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.tickets.clear();
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
        self.tickets.clear();
    }

    /// Insert a server-confirmed task at the head of iteration order.
    /// Ignored when the id is already present.
    pub fn insert_new(&mut self, task: Task) -> bool {
        if self.tasks.iter().any(|t| t.id == task.id) {
            return false;
        }
        self.tasks.insert(0, task);
        true
    }

    /// Ticket for a mutation round trip about to start on `id`.
    pub fn begin_mutation(&mut self, id: &str) -> u64 {
        let ticket = self.tickets.entry(id.to_string()).or_insert(0);
        *ticket += 1;
        *ticket
    }

    /// Replace the entry for `id` with the server's full representation,
    /// provided `ticket` is still the latest issued for that id.
    pub fn commit_update(&mut self, id: &str, ticket: u64, task: Task) -> MergeOutcome {
        if self.tickets.get(id).copied().unwrap_or(0) != ticket {
            tracing::debug!(%id, ticket, "dropping stale mutation response");
            return MergeOutcome::Stale;
        }
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(entry) => {
                *entry = task;
                MergeOutcome::Applied
            }
            None => MergeOutcome::Missing,
        }
    }

    /// Drop the entry after a confirmed delete.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tickets.remove(id);
        self.tasks.len() != before
    }
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

    #[test]
    fn test_insert_new_prepends_and_dedups() {
        let mut collection = TaskCollection::new();
        collection.replace_all(vec![task("1", "old", false)]);

        assert!(collection.insert_new(task("2", "new", false)));
        assert_eq!(collection.tasks()[0].id, "2");
        assert_eq!(collection.tasks()[1].id, "1");

        // Same id again is ignored
        assert!(!collection.insert_new(task("2", "dup", false)));
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_commit_replaces_whole_entity() {
        let mut collection = TaskCollection::new();
        collection.replace_all(vec![task("1", "Buy milk", false)]);

        let ticket = collection.begin_mutation("1");
        let mut returned = task("1", "Buy milk", true);
        returned.description = Some("2 liters".to_string());

        assert_eq!(
            collection.commit_update("1", ticket, returned),
            MergeOutcome::Applied
        );
        let stored = collection.get("1").unwrap();
        assert!(stored.completed);
        assert_eq!(stored.description.as_deref(), Some("2 liters"));
    }

    #[test]
    fn test_toggle_twice_round_trips_flag() {
        let mut collection = TaskCollection::new();
        collection.replace_all(vec![task("1", "t", false)]);

        let first = collection.begin_mutation("1");
        collection.commit_update("1", first, task("1", "t", true));
        let second = collection.begin_mutation("1");
        collection.commit_update("1", second, task("1", "t", false));

        assert!(!collection.get("1").unwrap().completed);
    }

    #[test]
    fn test_stale_ticket_dropped() {
        let mut collection = TaskCollection::new();
        collection.replace_all(vec![task("1", "t", false)]);

        let first = collection.begin_mutation("1");
        let second = collection.begin_mutation("1");

        // Second round trip resolves first
        assert_eq!(
            collection.commit_update("1", second, task("1", "t", true)),
            MergeOutcome::Applied
        );
        // First resolves late and must not overwrite
        assert_eq!(
            collection.commit_update("1", first, task("1", "t", false)),
            MergeOutcome::Stale
        );
        assert!(collection.get("1").unwrap().completed);
    }

    #[test]
    fn test_reload_supersedes_inflight_mutations() {
        let mut collection = TaskCollection::new();
        collection.replace_all(vec![task("1", "t", false)]);
        let ticket = collection.begin_mutation("1");

        collection.replace_all(vec![task("1", "fresh", false)]);
        assert_eq!(
            collection.commit_update("1", ticket, task("1", "stale", true)),
            MergeOutcome::Stale
        );
        assert_eq!(collection.get("1").unwrap().title, "fresh");
    }

    #[test]
    fn test_commit_for_removed_task_reports_missing() {
        let mut collection = TaskCollection::new();
        collection.replace_all(vec![task("1", "t", false)]);
        let ticket = collection.begin_mutation("1");
        collection.remove("1");

        // Removal also forgot the ticket, so the late response is stale
        assert_eq!(
            collection.commit_update("1", ticket, task("1", "t", true)),
            MergeOutcome::Stale
        );

        // A current ticket for an id that never existed reports missing
        let ticket = collection.begin_mutation("ghost");
        assert_eq!(
            collection.commit_update("ghost", ticket, task("ghost", "t", true)),
            MergeOutcome::Missing
        );
    }

    #[test]
    fn test_remove_unknown_id_changes_nothing() {
        let mut collection = TaskCollection::new();
        collection.replace_all(vec![task("1", "t", false)]);

        assert!(!collection.remove("2"));
        assert_eq!(collection.len(), 1);
        assert!(collection.remove("1"));
        assert!(collection.is_empty());
    }
}
