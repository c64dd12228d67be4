//! Remote API helper for the one-shot initial task fetch.
//!
//! Client-side (`csr`): one real HTTP GET via `gloo-net`. Native builds get
//! a stub error since the endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure shape collapses into [`FetchError`] and is terminal: no
//! retries, no backoff, no distinction between transient and permanent
//! failure. The caller decides how to surface it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use tasks::Task;

/// Fixed endpoint serving the initial task batch. No query parameters,
/// headers, or auth.
pub const TASKS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos";

/// Failure shapes for the one-shot fetch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced an HTTP response.
    #[error("network request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("task request failed: {0}")]
    Status(u16),
    /// The response body was not a JSON task array.
    #[error("malformed task payload: {0}")]
    Decode(String),
}

/// Fetch the full task batch from [`TASKS_ENDPOINT`].
///
/// The response is returned untruncated; the caller caps it via
/// [`tasks::initial_batch`] before persisting or rendering.
///
/// # Errors
///
/// Returns a [`FetchError`] describing the transport, status, or decode
/// failure.
pub async fn fetch_tasks() -> Result<Vec<Task>, FetchError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(TASKS_ENDPOINT)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        resp.json::<Vec<Task>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(FetchError::Transport(
            "not available outside the browser".to_owned(),
        ))
    }
}
