use std::{sync::Arc, time::Duration};

use yt_transcript_rs::{
    errors::{CouldNotRetrieveTranscript, CouldNotRetrieveTranscriptReason as Reason},
    YouTubeTranscriptApi,
};

use crate::{
    parser::VideoId,
    yt::{TranscriptError, TranscriptFetcher, TranscriptSegment},
};

/// `TranscriptFetcher` backed by `yt_transcript_rs`.
#[derive(Clone)]
pub struct TranscriptApiClient {
    api: Arc<YouTubeTranscriptApi>,
    languages: Vec<String>,
    timeout: Option<Duration>,
}

impl TranscriptApiClient {
    pub fn new() -> Result<Self, TranscriptError> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| TranscriptError::Provider(e.to_string()))?;

        Ok(Self {
            api: Arc::new(api),
            languages: vec!["en".into()],
            timeout: None,
        })
    }

    /// Language codes to look for, highest priority first
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }
}

impl TranscriptFetcher for TranscriptApiClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_transcript(
        &self,
        video_id: &VideoId,
    ) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        let languages = self
            .languages
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>();

        let request = self.api.fetch_transcript(video_id, &languages, false);
        let fetched = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, request)
                .await
                .map_err(|_| TranscriptError::Timeout(timeout))?,
            None => request.await,
        }
        .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch transcript"))?;

        let segments = fetched
            .snippets
            .into_iter()
            .map(|snippet| TranscriptSegment {
                text: snippet.text,
                start: snippet.start,
                duration: snippet.duration,
            })
            .collect::<Vec<_>>();

        tracing::info!(count = segments.len(), "Fetched transcript segments");
        Ok(segments)
    }
}

impl From<CouldNotRetrieveTranscript> for TranscriptError {
    fn from(value: CouldNotRetrieveTranscript) -> Self {
        let message = value.to_string();

        match value.reason {
            Some(Reason::TranscriptsDisabled { .. }) => TranscriptError::TranscriptsDisabled(message),
            Some(Reason::NoTranscriptFound { .. }) => TranscriptError::NoTranscriptFound(message),
            Some(Reason::VideoUnavailable { .. }) => TranscriptError::VideoUnavailable(message),
            _ => TranscriptError::Provider(message),
        }
    }
}
