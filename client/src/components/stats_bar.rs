//! Summary badges for the task list: total, completed, pending.

#[cfg(test)]
#[path = "stats_bar_test.rs"]
mod stats_bar_test;

use leptos::prelude::*;

use crate::state::tasks::TasksState;

fn total_label(total: usize) -> String {
    format!("Total: {total}")
}

fn completed_label(completed: usize) -> String {
    format!("Completed: {completed}")
}

fn pending_label(pending: usize) -> String {
    format!("Pending: {pending}")
}

/// Stats region above the task list.
///
/// Recomputed from the full list on every change; always satisfies
/// `total = completed + pending`.
#[component]
pub fn StatsBar() -> impl IntoView {
    let state = expect_context::<RwSignal<TasksState>>();
    let stats = move || tasks::stats_for(&state.get().items);

    view! {
        <div id="stats" class="stats">
            <span class="stat-badge stat-badge--total">
                {move || total_label(stats().total)}
            </span>
            <span class="stat-badge stat-badge--completed">
                {move || completed_label(stats().completed)}
            </span>
            <span class="stat-badge stat-badge--pending">
                {move || pending_label(stats().pending)}
            </span>
        </div>
    }
}
