//! Backend trait definition.

use crate::domain::{ActionPayload, Result, ResultSet};
use async_trait::async_trait;
use std::sync::Arc;

/// Query and command API of the lighting service.
///
/// Implementations must be `Send + Sync` so a shared handle can be moved into
/// the tasks that run requests.
///
/// # Example
///
/// ```rust,ignore
/// use huelio_console::client::LightingBackend;
///
/// async fn first_match(backend: &dyn LightingBackend) -> huelio_console::Result<()> {
///     let results = backend.query("kitchen").await?;
///     if let Some(candidate) = results.get(0) {
///         backend.submit(&candidate.payload).await?;
///     }
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait LightingBackend: Send + Sync {
    /// Searches for candidate actions matching `term`.
    ///
    /// # Errors
    ///
    /// - [`ConsoleError::Transport`](crate::ConsoleError::Transport) on network
    ///   failure or a non-success status
    /// - [`ConsoleError::Parse`](crate::ConsoleError::Parse) on a malformed body
    async fn query(&self, term: &str) -> Result<ResultSet>;

    /// Executes a candidate by sending its payload back unchanged.
    ///
    /// # Errors
    ///
    /// - [`ConsoleError::Transport`](crate::ConsoleError::Transport) on network
    ///   failure
    /// - [`ConsoleError::SubmissionRejected`](crate::ConsoleError::SubmissionRejected)
    ///   on a non-success status
    async fn submit(&self, payload: &ActionPayload) -> Result<()>;
}

#[async_trait]
impl<T: LightingBackend + ?Sized> LightingBackend for Arc<T> {
    async fn query(&self, term: &str) -> Result<ResultSet> {
        (**self).query(term).await
    }

    async fn submit(&self, payload: &ActionPayload) -> Result<()> {
        (**self).submit(payload).await
    }
}
