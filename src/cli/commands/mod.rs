//! CLI command implementations.

mod summarize;
mod transcript;

pub use summarize::run_summarize;
pub use transcript::run_transcript;

use crate::cli::Output;
use crate::error::Result;
use crate::transcript::TranscriptFetcher;

/// Fetch a video's transcript behind a spinner. Callers treat any error
/// here as fatal for the current run.
async fn fetch_transcript(video_id: &str) -> Result<String> {
    let fetcher = TranscriptFetcher::new()?;

    let spinner = Output::spinner("Fetching transcript...");
    let result = fetcher.fetch(video_id).await;
    spinner.finish_and_clear();

    result
}
