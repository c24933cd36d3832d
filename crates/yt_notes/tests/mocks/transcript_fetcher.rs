use std::sync::{Arc, Mutex};
use yt_notes::{parser::VideoId, TranscriptError, TranscriptFetcher, TranscriptSegment};

#[derive(Clone)]
pub struct MockTranscriptFetcher {
    pub segments: Vec<TranscriptSegment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<TranscriptError>,
}

impl MockTranscriptFetcher {
    pub fn new(texts: &[&str]) -> Self {
        Self {
            segments: texts.iter().map(|t| TranscriptSegment::new(*t)).collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(err: TranscriptError) -> Self {
        Self {
            segments: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(err),
        }
    }
}

impl TranscriptFetcher for MockTranscriptFetcher {
    async fn fetch_transcript(
        &self,
        video_id: &VideoId,
    ) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref err) = self.fail_with {
            return Err(err.clone());
        }
        Ok(self.segments.clone())
    }
}
