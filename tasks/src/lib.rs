//! Shared task model and list operations for the task list client.
//!
//! This crate owns the domain representation used by the `client` crate: the
//! remote record schema, the initial-batch cap, the local mutation rules, and
//! completion statistics. It has no browser dependencies so every rule is
//! natively testable.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use serde::{Deserialize, Serialize};

/// Maximum number of tasks accepted from the remote source at fetch time.
///
/// The cap applies exactly once, when the initial batch lands. Local
/// mutations only toggle or remove, so the list never grows past it.
pub const INITIAL_BATCH_CAP: usize = 20;

/// A single to-do record as served by the remote API.
///
/// The remote payload carries extra fields this client never reads (e.g.
/// `userId`); serde drops them on deserialize.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier assigned by the remote source.
    pub id: i64,
    /// Human-readable title, stored verbatim. Escaping markup-significant
    /// characters is the renderer's concern.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
}

/// Completion statistics for a task list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of tasks in the list.
    pub total: usize,
    /// Number of tasks with the completion flag set.
    pub completed: usize,
    /// `total - completed`.
    pub pending: usize,
}

/// Truncate a freshly fetched list to [`INITIAL_BATCH_CAP`] entries.
///
/// Remote order is preserved; no client-side sorting happens anywhere.
#[must_use]
pub fn initial_batch(mut fetched: Vec<Task>) -> Vec<Task> {
    fetched.truncate(INITIAL_BATCH_CAP);
    fetched
}

/// Flip the completion flag of the task matching `id` in place.
///
/// Returns `true` if an entry changed. A missing id is a silent no-op that
/// leaves the list untouched. Order and all other entries are unaffected.
pub fn toggle_completed(tasks: &mut [Task], id: i64) -> bool {
    match tasks.iter_mut().find(|task| task.id == id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

/// Remove the task matching `id`, preserving the order of the rest.
///
/// Returns `true` if an entry was removed; a missing id is a silent no-op.
pub fn remove_task(tasks: &mut Vec<Task>, id: i64) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    tasks.len() != before
}

/// Compute completion statistics for `tasks`.
#[must_use]
pub fn stats_for(tasks: &[Task]) -> Stats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();
    Stats {
        total,
        completed,
        pending: total - completed,
    }
}
