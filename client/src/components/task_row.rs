//! Single task row: toggle control, title, metadata, delete control.
//!
//! DESIGN
//! ======
//! The row never touches storage or network. Toggle/delete intent flows to
//! the page through callbacks that capture the task id at construction time,
//! and the title is interpolated as a text node so markup-significant
//! characters are escaped by the renderer.

#[cfg(test)]
#[path = "task_row_test.rs"]
mod task_row_test;

use leptos::prelude::*;

use tasks::Task;

/// Textual status shown in the row metadata.
fn status_label(completed: bool) -> &'static str {
    if completed { "Completed" } else { "Pending" }
}

/// Status badge class for the row metadata.
fn status_class(completed: bool) -> &'static str {
    if completed {
        "task-status task-status--completed"
    } else {
        "task-status task-status--pending"
    }
}

/// Accessible label describing what the toggle button will do next.
fn toggle_aria_label(completed: bool) -> &'static str {
    if completed {
        "Mark as incomplete"
    } else {
        "Mark as complete"
    }
}

/// One visual row for a task.
#[component]
pub fn TaskRow(
    task: Task,
    on_toggle: Callback<i64>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = task.id;
    let completed = task.completed;

    view! {
        <div class="task-item" class:task-item--completed=completed data-id=id.to_string()>
            <button
                class="toggle-btn"
                aria-label=toggle_aria_label(completed)
                on:click=move |_| on_toggle.run(id)
            ></button>

            <div class="task-content">
                <p class="task-title">{task.title.clone()}</p>
                <div class="task-meta">
                    <span class="task-id">{format!("ID: {id}")}</span>
                    <span class=status_class(completed)>{status_label(completed)}</span>
                </div>
            </div>

            <button
                class="delete-btn"
                aria-label="Delete task"
                on:click=move |_| on_delete.run(id)
            >
                "✕"
            </button>
        </div>
    }
}
