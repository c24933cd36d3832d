pub mod builder;

use itertools::Itertools;
use serde::Serialize;

use crate::{
    error::Error,
    llm::note_generator::build_prompt,
    parser::extract_video_id,
    yt::{TranscriptFetcher, TranscriptSegment},
    NoteGenerator,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesResult {
    pub video_id: String,
    pub notes: String,
}

/// Joins segment texts with single spaces, in playback order.
pub fn assemble_transcript(segments: &[TranscriptSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).join(" ")
}

// URL -> transcript -> notes, one linear run per request
#[derive(Debug)]
pub struct NotesProcessor<T, G>
where
    T: TranscriptFetcher + Send + Sync + 'static,
    G: NoteGenerator + Send + Sync + 'static,
{
    transcript_fetcher: T,
    note_generator: G,
}

impl<T, G> NotesProcessor<T, G>
where
    T: TranscriptFetcher + Send + Sync + 'static,
    G: NoteGenerator + Send + Sync + 'static,
{
    pub fn new(transcript_fetcher: T, note_generator: G) -> Self {
        NotesProcessor {
            transcript_fetcher,
            note_generator,
        }
    }

    /// Fetches the transcript for the video behind `youtube_url` and turns it
    /// into point-wise notes.
    ///
    /// Nothing is cached: every call runs a full fetch and generation.
    #[tracing::instrument(skip(self))]
    pub async fn summarize(&self, youtube_url: &str) -> Result<NotesResult, Error> {
        let video_id = extract_video_id(youtube_url)
            .ok_or_else(|| Error::InvalidInput("Invalid YouTube URL".into()))?;

        let segments = self
            .transcript_fetcher
            .fetch_transcript(&video_id)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, %video_id, "Failed to fetch transcript"))?;

        let transcript = assemble_transcript(&segments);
        tracing::debug!(
            segments = segments.len(),
            chars = transcript.len(),
            "Assembled transcript"
        );

        let notes = self
            .note_generator
            .generate(&build_prompt(&transcript))
            .await
            .map_err(|e| Error::Upstream(e.to_string()))?;

        Ok(NotesResult {
            video_id: video_id.into_inner(),
            notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_transcript_joins_with_single_space() {
        let segments = [TranscriptSegment::new("Hello"), TranscriptSegment::new("world")];
        assert_eq!(assemble_transcript(&segments), "Hello world");
    }

    #[test]
    fn test_assemble_transcript_keeps_segment_text_verbatim() {
        let segments = [
            TranscriptSegment::new("line one\nstill one"),
            TranscriptSegment::new(" padded "),
        ];
        assert_eq!(
            assemble_transcript(&segments),
            "line one\nstill one  padded "
        );
        assert_eq!(assemble_transcript(&[]), "");
    }

    #[test]
    fn test_notes_result_serializes_camel_case() {
        let result = NotesResult {
            video_id: "ABC123".into(),
            notes: "- point".into(),
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({ "videoId": "ABC123", "notes": "- point" })
        );
    }
}
