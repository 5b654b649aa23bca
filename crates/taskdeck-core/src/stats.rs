//! Analytics over the full, unfiltered collection. Windows are measured in
//! whole days back from the moment of computation; nothing here is cached
//! or persisted.

use chrono::{DateTime, Utc};

use crate::models::{Task, Timeframe};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    /// `round(completed / total * 100)`, exactly 0 when total is 0.
    pub percent_complete: u32,
}

pub fn compute_stats(tasks: &[Task], timeframe: Timeframe, now: DateTime<Utc>) -> TaskStats {
    let mut total = 0;
    let mut completed = 0;
    for task in tasks {
        if !within_window(task, timeframe, now) {
            continue;
        }
        total += 1;
        if task.completed {
            completed += 1;
        }
    }
    let percent_complete = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    };
    TaskStats {
        total,
        completed,
        active: total - completed,
        percent_complete,
    }
}

/// Inclusive whole-day window: a task is inside when the ceiling of its age
/// in days is at most the window size.
fn within_window(task: &Task, timeframe: Timeframe, now: DateTime<Utc>) -> bool {
    let Some(days) = timeframe.days() else {
        return true;
    };
    let elapsed_ms = (now - task.created_at).num_milliseconds().abs();
    let elapsed_days = (elapsed_ms as f64 / MILLIS_PER_DAY).ceil() as i64;
    elapsed_days <= days
}
