//! Root application component and context providers.
//!
//! DESIGN
//! ======
//! The storage adapter and the task-list signal are provided through Leptos
//! context rather than referenced as ambient globals, so pages and tests can
//! swap the backing store.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::tasks::TasksState;
use crate::util::persistence::default_store;

/// Root application component.
///
/// Provides shared state and the storage adapter, then renders the single
/// page. There is no router; the widget has exactly one view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(TasksState::default());
    provide_context(state);
    provide_context(default_store());

    view! {
        <Title text="My Tasks"/>
        <HomePage/>
    }
}
