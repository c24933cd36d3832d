pub mod transcript_api;

use std::{future::Future, time::Duration};

use crate::parser::VideoId;

pub trait TranscriptFetcher {
    /// Returns the video's caption entries in playback order.
    fn fetch_transcript(
        &self,
        video_id: &VideoId,
    ) -> impl Future<Output = Result<Vec<TranscriptSegment>, TranscriptError>> + Send;
}

/// One timed caption entry; `start` and `duration` are in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start: 0.0,
            duration: 0.0,
        }
    }
}

/// Transcript provider failures; each variant carries the provider's message.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TranscriptError {
    #[error("{0}")]
    TranscriptsDisabled(String),
    #[error("{0}")]
    NoTranscriptFound(String),
    #[error("{0}")]
    VideoUnavailable(String),
    #[error("{0}")]
    Provider(String),
    #[error("Transcript request timed out after {0:?}")]
    Timeout(Duration),
}

impl TranscriptError {
    /// Whether the provider is reporting that no transcript exists for the
    /// video, as opposed to failing to retrieve one.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            TranscriptError::TranscriptsDisabled(_)
                | TranscriptError::NoTranscriptFound(_)
                | TranscriptError::VideoUnavailable(_)
        )
    }
}
