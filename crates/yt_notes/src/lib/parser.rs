//! # Yt URL Parser
//!
//! Maps the assorted shapes of YouTube links onto the bare video identifier
//! the transcript provider understands.

use std::{fmt, ops::Deref};

use url::Url;

const WATCH_HOSTS: [&str; 3] = ["youtube.com", "www.youtube.com", "m.youtube.com"];
const SHORT_HOST: &str = "youtu.be";

/// Opaque, non-empty token addressing a single video.
///
/// No further validation is done here; the transcript provider is the one
/// that decides whether the video exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Returns `None` for an empty token.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        (!id.is_empty()).then_some(VideoId(id))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for VideoId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<VideoId> for String {
    fn from(value: VideoId) -> Self {
        value.0
    }
}

/// Extracts the video identifier from a YouTube URL.
///
/// Recognised shapes:
/// * `youtube.com/watch?v=<id>` (also `www.` and `m.` hosts)
/// * `youtube.com/embed/<id>` and `youtube.com/v/<id>`
/// * `youtu.be/<id>`
///
/// The scheme is ignored and the host compared case-insensitively. Anything
/// that fails to parse, or points elsewhere, yields `None`; this function
/// never errors.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    let path = parsed.path();

    if WATCH_HOSTS.contains(&host.as_str()) {
        // blank `v=` values are dropped, same as a missing parameter
        if let Some(id) = parsed
            .query_pairs()
            .find(|(key, value)| key == "v" && !value.is_empty())
            .map(|(_, value)| value.into_owned())
        {
            return VideoId::new(id);
        }

        if path.starts_with("/embed/") || path.starts_with("/v/") {
            return path.split('/').nth(2).and_then(VideoId::new);
        }

        return None;
    }

    if host == SHORT_HOST {
        return VideoId::new(path.trim_start_matches('/'));
    }

    None
}
