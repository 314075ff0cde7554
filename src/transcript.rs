//! Caption transcript retrieval.

use crate::error::{Result, TldwError};
use tracing::{debug, info};
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Caption languages to try, in order of preference.
const LANGUAGES: &[&str] = &["en"];

/// Fetches caption transcripts for YouTube videos.
pub struct TranscriptFetcher {
    api: YouTubeTranscriptApi,
}

impl TranscriptFetcher {
    /// Create a fetcher with no proxy or cookie authentication.
    pub fn new() -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| TldwError::VideoSource(e.to_string()))?;
        Ok(Self { api })
    }

    /// Fetch the transcript for a video and flatten it into a single string.
    ///
    /// Snippet texts are joined with single spaces, preserving the order the
    /// provider returned them in. Timing information is discarded.
    pub async fn fetch(&self, video_id: &str) -> Result<String> {
        debug!("Fetching transcript for video {}", video_id);

        let transcript = self
            .api
            .fetch_transcript(video_id, LANGUAGES, false)
            .await
            .map_err(|e| classify_fetch_error(e.to_string()))?;

        info!(
            "Fetched {} caption snippets ({})",
            transcript.snippets.len(),
            transcript.language_code
        );

        Ok(join_segments(
            transcript.snippets.iter().map(|s| s.text.as_str()),
        ))
    }
}

/// Join caption segments with single spaces, preserving order.
fn join_segments<'a>(segments: impl Iterator<Item = &'a str>) -> String {
    segments.collect::<Vec<_>>().join(" ")
}

/// Sort fetch failures into the known "no transcript for this video" class
/// (captions disabled, no transcript found, video unavailable) versus
/// everything else. The unavailable case is rendered by the caption
/// provider as "The video is no longer available".
fn classify_fetch_error(message: String) -> TldwError {
    let lower = message.to_lowercase();
    let known = lower.contains("disabled")
        || lower.contains("no transcript")
        || lower.contains("unavailable")
        || lower.contains("no longer available");

    if known {
        TldwError::TranscriptUnavailable(message)
    } else {
        TldwError::VideoSource(message)
    }
}
