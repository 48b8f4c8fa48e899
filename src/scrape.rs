use std::collections::HashSet;

use eyre::Result;
use log::{debug, warn};
use regex::Regex;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Fetch the channel's public /videos page and extract the video IDs
/// embedded in its initial-data JSON.
///
/// A non-success status is logged but parsing proceeds anyway; the result
/// is then usually empty. Output order is not meaningful — IDs are
/// de-duplicated with set semantics and callers should sort if they need a
/// stable view.
pub async fn channel_video_ids(client: &reqwest::Client, channel_id: &str) -> Result<Vec<String>> {
    let channel_url = format!("https://www.youtube.com/channel/{channel_id}/videos");
    debug!("Scraping channel page: {channel_url}");

    let response = client
        .get(&channel_url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!("Non-success status {status} from {channel_url}");
        println!("Non-success status {status} in call to channel_url: {channel_url}");
        println!("{body}");
    }

    let ids = extract_video_ids(&body);
    debug!("Scraped {} unique video ids from {channel_url}", ids.len());
    Ok(ids)
}

/// Pull all `{"videoId":"..."}` tokens out of a raw page body, de-duplicated.
pub fn extract_video_ids(body: &str) -> Vec<String> {
    let re = Regex::new(r#"\{"videoId":"([\w&-]+)""#).unwrap();
    let unique: HashSet<&str> = re.captures_iter(body).map(|caps| caps.get(1).unwrap().as_str()).collect();
    unique.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_ids_basic() {
        let body = r#"var ytInitialData = {"contents":[{"videoId":"abc12345678","thumbnail":{}},{"videoId":"def12345678"}]};"#;
        let mut ids = extract_video_ids(body);
        ids.sort();
        assert_eq!(ids, vec!["abc12345678", "def12345678"]);
    }

    #[test]
    fn test_extract_video_ids_deduplicates() {
        let body = r#"{"videoId":"abc12345678"} {"videoId":"abc12345678"} {"videoId":"abc12345678"}"#;
        let ids = extract_video_ids(body);
        assert_eq!(ids, vec!["abc12345678"]);
    }

    #[test]
    fn test_extract_video_ids_requires_brace_prefix() {
        // A bare "videoId" key without the leading brace is not a match
        let body = r#""videoId":"abc12345678""#;
        assert!(extract_video_ids(body).is_empty());
    }

    #[test]
    fn test_extract_video_ids_token_charset() {
        let body = r#"{"videoId":"a_b-c&d1234"} {"videoId":"bad id here"}"#;
        let ids = extract_video_ids(body);
        assert_eq!(ids, vec!["a_b-c&d1234"]);
    }

    #[test]
    fn test_extract_video_ids_empty_body() {
        assert!(extract_video_ids("").is_empty());
        assert!(extract_video_ids("<html><body>nothing here</body></html>").is_empty());
    }

    #[test]
    fn test_extract_video_ids_idempotent_set() {
        let body = r#"{"videoId":"one12345678"} {"videoId":"two12345678"} {"videoId":"one12345678"}"#;
        let first: HashSet<String> = extract_video_ids(body).into_iter().collect();
        let second: HashSet<String> = extract_video_ids(body).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
