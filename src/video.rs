//! YouTube video identification.

use regex::Regex;

/// Length of a YouTube video identifier.
const VIDEO_ID_LEN: usize = 11;

/// A validated YouTube video identifier (exactly 11 URL-safe characters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extracts video identifiers from the YouTube URL shapes the service accepts.
///
/// Each URL shape gets its own pattern. Candidates are over-matched on
/// purpose; a syntactic match is only accepted when the candidate is exactly
/// eleven characters.
pub struct VideoIdExtractor {
    patterns: Vec<Regex>,
}

impl VideoIdExtractor {
    pub fn new() -> Self {
        let patterns = [
            // youtube.com/watch?v=ID (v= anywhere in the query string)
            r"youtube\.com/watch\?(?:[^#\s]*&)?v=([A-Za-z0-9_-]+)",
            // youtu.be/ID
            r"youtu\.be/([A-Za-z0-9_-]+)",
            // youtube.com/embed/ID
            r"youtube\.com/embed/([A-Za-z0-9_-]+)",
            // youtube.com/v/ID
            r"youtube\.com/v/([A-Za-z0-9_-]+)",
            // youtube.com/u/<char>/ID
            r"youtube\.com/u/\w/([A-Za-z0-9_-]+)",
            // Bare video ID
            r"^([A-Za-z0-9_-]+)$",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("Invalid regex"))
        .collect();

        Self { patterns }
    }

    /// Extract a video ID from a URL or bare ID.
    ///
    /// Returns `None` when no shape matches or the candidate is not exactly
    /// eleven characters. Never panics.
    pub fn extract(&self, input: &str) -> Option<VideoId> {
        let input = input.trim();

        for pattern in &self.patterns {
            let Some(caps) = pattern.captures(input) else {
                continue;
            };
            let Some(candidate) = caps.get(1) else {
                continue;
            };
            if candidate.as_str().len() == VIDEO_ID_LEN {
                return Some(VideoId(candidate.as_str().to_string()));
            }
        }

        None
    }
}

impl Default for VideoIdExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(input: &str) -> Option<String> {
        VideoIdExtractor::new()
            .extract(input)
            .map(|id| id.as_str().to_string())
    }

    #[test]
    fn test_extract_watch_url() {
        assert_eq!(
            extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_watch_url_with_extra_params() {
        assert_eq!(
            extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ&feature=share"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract("https://www.youtube.com/watch?app=desktop&v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_short_url() {
        assert_eq!(
            extract("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract("https://youtu.be/dQw4w9WgXcQ?t=5"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_embed_url() {
        assert_eq!(
            extract("https://youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_v_url() {
        assert_eq!(
            extract("https://www.youtube.com/v/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_user_url() {
        assert_eq!(
            extract("https://www.youtube.com/u/c/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_bare_id() {
        assert_eq!(extract("dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert_eq!(extract("not a url"), None);
        assert_eq!(extract(""), None);
        assert_eq!(extract("https://example.com"), None);
        assert_eq!(extract("https://vimeo.com/123456789"), None);
    }

    #[test]
    fn test_rejects_wrong_length_candidates() {
        // Ten and twelve characters match syntactically but are not IDs.
        assert_eq!(extract("https://www.youtube.com/watch?v=dQw4w9WgXc"), None);
        assert_eq!(extract("https://youtu.be/dQw4w9WgXcQx"), None);
    }
}
