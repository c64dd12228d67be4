//! Task-list view state shared through Leptos context.
//!
//! DESIGN
//! ======
//! The rendered list mirrors the persisted store after every change; the
//! page logic writes the store first and then lands the same value here, so
//! the two cannot diverge.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use tasks::Task;

/// Shared task-list state driving the home page render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TasksState {
    /// Current list, in remote order.
    pub items: Vec<Task>,
    /// True while the one-shot fetch is in flight.
    pub loading: bool,
    /// True after the fetch failed; the page shows a static error panel.
    pub load_failed: bool,
}

impl TasksState {
    /// Enter the loading phase for the one-shot fetch.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.load_failed = false;
    }

    /// Land a successful fetch or a warm cache in the view state.
    pub fn complete_fetch(&mut self, items: Vec<Task>) {
        self.items = items;
        self.loading = false;
        self.load_failed = false;
    }

    /// Record a terminal fetch failure and clear the loading indicator.
    pub fn fail_fetch(&mut self) {
        self.loading = false;
        self.load_failed = true;
    }

    /// Replace the rendered list after a local mutation.
    pub fn set_items(&mut self, items: Vec<Task>) {
        self.items = items;
    }
}
