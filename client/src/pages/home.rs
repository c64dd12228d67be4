//! Home page orchestrating bootstrap, fetch, and local mutations.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only screen. On mount it reads the persisted list through the
//! injected store; a warm cache renders directly with no network traffic,
//! and a cold cache triggers the one-shot fetch. Toggle and delete are
//! read-modify-write cycles against the store followed by a signal update,
//! so the persisted list and the rendered list are always the same value.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use tasks::Task;

use crate::components::empty_state::EmptyState;
use crate::components::stats_bar::StatsBar;
use crate::components::task_row::TaskRow;
use crate::state::tasks::TasksState;
use crate::util::persistence::StoreContext;

/// Bootstrap decision: only an empty cache goes to the network.
fn should_fetch(stored: &[Task]) -> bool {
    stored.is_empty()
}

/// Run the one-shot fetch: loading indicator on, one GET, cap, persist,
/// render. Any failure is terminal and lands as the static error panel.
fn fetch_initial(state: RwSignal<TasksState>, store: StoreContext) {
    state.update(TasksState::begin_fetch);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_tasks().await {
            Ok(fetched) => {
                let batch = tasks::initial_batch(fetched);
                store.0.store(&batch);
                state.update(|s| s.complete_fetch(batch));
            }
            Err(err) => {
                log::error!("initial task fetch failed: {err}");
                state.update(TasksState::fail_fetch);
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = store;
        state.update(TasksState::fail_fetch);
    }
}

/// Home page: header with stats, loading indicator, and the task container.
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<RwSignal<TasksState>>();
    let store = expect_context::<StoreContext>();

    // Bootstrap once per mount: warm cache renders directly, cold cache
    // fetches.
    let bootstrapped = RwSignal::new(false);
    {
        let store = store.clone();
        Effect::new(move || {
            if bootstrapped.get() {
                return;
            }
            bootstrapped.set(true);
            let stored = store.0.load();
            if should_fetch(&stored) {
                fetch_initial(state, store.clone());
            } else {
                state.update(|s| s.complete_fetch(stored));
            }
        });
    }

    let toggle_store = store.clone();
    let on_toggle = Callback::new(move |id: i64| {
        let mut list = toggle_store.0.load();
        tasks::toggle_completed(&mut list, id);
        toggle_store.0.store(&list);
        state.update(|s| s.set_items(list));
    });

    let delete_store = store.clone();
    let on_delete = Callback::new(move |id: i64| {
        let mut list = delete_store.0.load();
        tasks::remove_task(&mut list, id);
        delete_store.0.store(&list);
        state.update(|s| s.set_items(list));
    });

    view! {
        <div class="task-page">
            <header class="task-page__header">
                <h1 class="task-page__title">"My Tasks"</h1>
                <StatsBar/>
            </header>

            <Show when=move || state.get().loading>
                <div id="loading" class="loading">
                    <div class="loading__spinner" aria-hidden="true"></div>
                    <p class="loading__text">"Loading tasks..."</p>
                </div>
            </Show>

            <div id="task-container" class="task-container">
                <Show when=move || !state.get().loading>
                    <Show
                        when=move || !state.get().load_failed
                        fallback=|| {
                            view! {
                                <EmptyState
                                    icon="⚠️"
                                    heading="Error Loading Tasks"
                                    body="Please check your internet connection and try again."
                                />
                            }
                        }
                    >
                        <Show
                            when=move || !state.get().items.is_empty()
                            fallback=|| {
                                view! {
                                    <EmptyState
                                        icon="✨"
                                        heading="No Tasks Available"
                                        body="All tasks have been completed or removed!"
                                    />
                                }
                            }
                        >
                            {move || {
                                state
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|task| {
                                        view! {
                                            <TaskRow task=task on_toggle=on_toggle on_delete=on_delete/>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </Show>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
