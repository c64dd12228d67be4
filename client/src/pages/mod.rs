//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! The widget has a single screen; `home` owns bootstrap/fetch/mutation
//! orchestration and delegates rendering details to `components`.

pub mod home;
