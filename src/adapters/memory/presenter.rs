//! Recording response presenter.
//!
//! Keeps every delivered response for assertions.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{CommandMetadata, DomainError, ErrorCode};
use crate::domain::response::Response;
use crate::ports::ResponsePresenter;

#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    delivered: Arc<RwLock<Vec<(CommandMetadata, Response)>>>,
    fail_delivery: bool,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A presenter whose transport is down: every delivery fails.
    pub fn failing() -> Self {
        Self {
            fail_delivery: true,
            ..Self::default()
        }
    }

    pub async fn responses(&self) -> Vec<Response> {
        self.delivered
            .read()
            .await
            .iter()
            .map(|(_, response)| response.clone())
            .collect()
    }

    pub async fn last(&self) -> Option<Response> {
        self.delivered
            .read()
            .await
            .last()
            .map(|(_, response)| response.clone())
    }

    pub async fn count(&self) -> usize {
        self.delivered.read().await.len()
    }
}

#[async_trait]
impl ResponsePresenter for RecordingPresenter {
    async fn present(
        &self,
        metadata: &CommandMetadata,
        response: &Response,
    ) -> Result<(), DomainError> {
        if self.fail_delivery {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                "reply transport unavailable",
            ));
        }
        self.delivered
            .write()
            .await
            .push((metadata.clone(), response.clone()));
        Ok(())
    }
}
