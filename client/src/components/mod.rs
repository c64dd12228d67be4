//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure projections of task-list state; interaction flows
//! back to the page through explicit callbacks carrying the task id.

pub mod empty_state;
pub mod stats_bar;
pub mod task_row;
