//! Track value object: one pending media item in a queue.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserId, ValidationError};

/// A playable item waiting in the queue.
///
/// Only the metadata the pipeline needs; fetching and decoding belong to the
/// playback engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    title: String,
    url: String,
    requested_by: UserId,
}

impl Track {
    /// # Errors
    ///
    /// - `EmptyField` if title or url is blank
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        requested_by: UserId,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let url = url.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if url.trim().is_empty() {
            return Err(ValidationError::empty_field("url"));
        }
        Ok(Self {
            title,
            url,
            requested_by,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn requested_by(&self) -> UserId {
        self.requested_by
    }
}
