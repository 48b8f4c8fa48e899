pub mod config;
pub mod scrape;
pub mod search;
pub mod transcript;

use serde::Serialize;

/// Default channel used by the demo driver (Signal Music Studios)
pub const DEFAULT_CHANNEL_ID: &str = "UCRDDHLvQb8HjE2r7_ZuNtWA";

/// Metadata for a single video, as returned by the API-search path
#[derive(Debug, Clone, Serialize)]
pub struct VideoRecord {
    pub title: String,
    pub description: String,
    pub video_id: String,
    pub publish_time: String,
}

/// A single transcript segment
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Outcome of probing a video for an English transcript.
///
/// `NotFound` means the caption listing succeeded and contained no English
/// track; `ProbeFailed` means the listing itself failed (network error,
/// video not found, captions disabled at the page level). The boolean view
/// via [`Availability::is_available`] collapses both to `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Found,
    NotFound,
    ProbeFailed(String),
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Found)
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Found => write!(f, "found"),
            Availability::NotFound => write!(f, "not found"),
            Availability::ProbeFailed(reason) => write!(f, "probe failed: {reason}"),
        }
    }
}

/// Extract a video ID from a bare ID or common YouTube URL formats
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    // Bare 11-character video ID
    if regex::Regex::new(r"^[a-zA-Z0-9_-]{11}$").unwrap().is_match(input) {
        return Some(input.to_string());
    }

    let patterns = [
        r"youtube\.com/watch\?.*v=([a-zA-Z0-9_-]{11})",
        r"youtu\.be/([a-zA-Z0-9_-]{11})",
        r"youtube\.com/embed/([a-zA-Z0-9_-]{11})",
        r"youtube\.com/shorts/([a-zA-Z0-9_-]{11})",
    ];

    for pattern in patterns {
        if let Some(caps) = regex::Regex::new(pattern).unwrap().captures(input) {
            return Some(caps[1].to_string());
        }
    }

    None
}
