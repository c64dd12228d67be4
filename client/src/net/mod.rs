//! Networking modules for the one-shot remote fetch.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the only network surface: a single GET against a fixed endpoint
//! during bootstrap. Everything after that is served from local storage.

pub mod api;
