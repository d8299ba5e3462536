// src/blocking.rs
// Drives the async API from synchronous callers.

use std::future::Future;

use crate::error::{BlogError, Result};

/// Run `future` to completion on a fresh current-thread runtime.
///
/// Panics if called from inside another tokio runtime (tokio refuses to
/// nest `block_on`).
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(BlogError::Runtime)?;
    Ok(runtime.block_on(future))
}
