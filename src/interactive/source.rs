//! Memoized candidate-list fetch
//!
//! Each flow starts one backend list call and shares it between the search
//! adapter (queried on every keystroke) and the final record lookup. The
//! backend must be hit at most once per flow invocation no matter how often
//! the list is consumed.

use crate::error::CliResult;
use std::future::Future;
use tokio::sync::OnceCell;

/// A lazily fetched, memoized candidate list
pub struct SharedFetch<T, F, Fut>
where
    F: Fn() -> Fut,
    Fut: Future<Output = CliResult<Vec<T>>>,
{
    cell: OnceCell<Vec<T>>,
    fetch: F,
}

impl<T, F, Fut> SharedFetch<T, F, Fut>
where
    F: Fn() -> Fut,
    Fut: Future<Output = CliResult<Vec<T>>>,
{
    pub fn new(fetch: F) -> Self {
        Self {
            cell: OnceCell::new(),
            fetch,
        }
    }

    /// Resolve the list, performing the backend call at most once
    ///
    /// A failed fetch is not cached; the error propagates and the next
    /// caller retries.
    pub async fn get(&self) -> CliResult<&[T]> {
        let list = self.cell.get_or_try_init(&self.fetch).await?;
        Ok(list.as_slice())
    }
}
