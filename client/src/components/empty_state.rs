//! Icon + heading + body panel for the no-tasks and fetch-error states.

use leptos::prelude::*;

/// Static panel shown in the task container when there are no rows to
/// render: either the list is genuinely empty or the fetch failed.
#[component]
pub fn EmptyState(
    icon: &'static str,
    heading: &'static str,
    body: &'static str,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon" aria-hidden="true">{icon}</div>
            <h3 class="empty-state__heading">{heading}</h3>
            <p class="empty-state__body">{body}</p>
        </div>
    }
}
