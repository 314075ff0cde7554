//! Raw transcript mode: print and save the transcript without summarizing.

use super::fetch_transcript;
use crate::cli::Output;
use crate::error::Result;
use std::path::Path;

/// Fetch a video's transcript, print it, and write it to a file.
pub async fn run_transcript(video_id: &str, output_file: Option<String>) -> Result<()> {
    let transcript = fetch_transcript(video_id).await?;

    Output::header("Transcript");
    println!("\n{}", transcript);

    let path = output_file.unwrap_or_else(|| default_output_file(video_id));
    save_transcript(Path::new(&path), &transcript)?;

    Output::success(&format!("Transcript saved to {}", path));
    Ok(())
}

/// Default output filename for a video's transcript.
fn default_output_file(video_id: &str) -> String {
    format!("transcript_{}.txt", video_id)
}

/// Write the transcript as UTF-8 text.
fn save_transcript(path: &Path, transcript: &str) -> Result<()> {
    std::fs::write(path, transcript)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_file_name() {
        assert_eq!(
            default_output_file("dQw4w9WgXcQ"),
            "transcript_dQw4w9WgXcQ.txt"
        );
    }

    #[test]
    fn test_save_transcript_writes_exact_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(default_output_file("dQw4w9WgXcQ"));

        save_transcript(&path, "a b c").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a b c");
    }
}
