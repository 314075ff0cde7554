//! YouTube URL and video ID handling.

use regex::Regex;
use std::sync::OnceLock;

static URL_RE: OnceLock<Regex> = OnceLock::new();
static ID_RE: OnceLock<Regex> = OnceLock::new();

/// Extract the video ID from a watch URL, a short youtu.be URL, or a bare ID.
///
/// Inputs matching neither URL shape are assumed to already be an ID and are
/// returned unchanged.
pub fn extract_video_id(input: &str) -> String {
    if let Some(idx) = input.find("v=") {
        let rest = &input[idx + 2..];
        let end = rest.find('&').unwrap_or(rest.len());
        rest[..end].to_string()
    } else if let Some(idx) = input.find("youtu.be/") {
        let rest = &input[idx + "youtu.be/".len()..];
        let end = rest.find('?').unwrap_or(rest.len());
        rest[..end].to_string()
    } else {
        input.to_string()
    }
}

/// Check whether an argument looks like a YouTube URL or a bare 11-character
/// video ID.
pub fn is_video_input(input: &str) -> bool {
    let url_re = URL_RE.get_or_init(|| {
        Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/").expect("valid pattern")
    });
    let id_re =
        ID_RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("valid pattern"));

    url_re.is_match(input) || id_re.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_extract_from_short_url() {
        assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?feature=shared"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_bare_id_passes_through() {
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(extract_video_id("a_b-c_d-e_f"), "a_b-c_d-e_f");
    }

    #[test]
    fn test_is_video_input() {
        assert!(is_video_input("dQw4w9WgXcQ"));
        assert!(is_video_input("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_video_input("youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_video_input("https://youtu.be/dQw4w9WgXcQ"));

        assert!(!is_video_input("not-a-video-id"));
        assert!(!is_video_input("https://vimeo.com/12345"));
        assert!(!is_video_input(""));
    }
}
