//! ResponsePresenter port - delivers a structured response to the caller.
//!
//! Rendering (embeds, plain text, JSON) is the adapter's business.

use async_trait::async_trait;

use crate::domain::foundation::{CommandMetadata, DomainError};
use crate::domain::response::Response;

/// Sends exactly one response per command invocation.
#[async_trait]
pub trait ResponsePresenter: Send + Sync {
    /// Deliver the response for the invocation described by `metadata`.
    ///
    /// # Errors
    ///
    /// - `InternalError` if the transport could not deliver the reply
    async fn present(&self, metadata: &CommandMetadata, response: &Response)
        -> Result<(), DomainError>;
}
