//! JSON-lines response presenter.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

use super::ConsoleOutput;
use crate::domain::foundation::{CommandMetadata, DomainError, ErrorCode};
use crate::domain::response::Response;
use crate::ports::ResponsePresenter;

/// Writes every output as one JSON line to a shared writer.
pub struct JsonLinesPresenter<W> {
    out: Arc<Mutex<W>>,
}

impl<W> Clone for JsonLinesPresenter<W> {
    fn clone(&self) -> Self {
        Self {
            out: Arc::clone(&self.out),
        }
    }
}

impl<W: AsyncWrite + Unpin + Send> JsonLinesPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Arc::new(Mutex::new(out)),
        }
    }

    /// The shared writer.
    pub fn writer(&self) -> Arc<Mutex<W>> {
        Arc::clone(&self.out)
    }

    /// Serializes `output` and writes it followed by a newline.
    ///
    /// # Errors
    ///
    /// - `InternalError` if serialization or the write fails
    pub async fn write(&self, output: &ConsoleOutput) -> Result<(), DomainError> {
        let mut line = serde_json::to_vec(output).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Failed to encode output: {}", e))
        })?;
        line.push(b'\n');

        let mut out = self.out.lock().await;
        out.write_all(&line).await.map_err(io_error)?;
        out.flush().await.map_err(io_error)?;
        Ok(())
    }
}

fn io_error(err: std::io::Error) -> DomainError {
    DomainError::new(ErrorCode::InternalError, format!("Failed to write output: {}", err))
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> ResponsePresenter for JsonLinesPresenter<W> {
    async fn present(
        &self,
        metadata: &CommandMetadata,
        response: &Response,
    ) -> Result<(), DomainError> {
        self.write(&ConsoleOutput::Response {
            command: metadata.command.clone(),
            guild_id: metadata.guild_id,
            response: response.clone(),
        })
        .await
    }
}
