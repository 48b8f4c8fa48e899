use eyre::Result;
use log::debug;
use serde::Deserialize;

use crate::VideoRecord;

const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// Upstream quota cap on maxResults for search.list
const MAX_RESULTS_LIMIT: u32 = 50;

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ResourceId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct ResourceId {
    kind: String,
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "publishTime", default)]
    publish_time: String,
}

/// Fetch the most recent videos of a channel via the Data API v3 search
/// endpoint, in reverse-chronological order.
///
/// Search results can include playlists and channels alongside videos;
/// those are skipped. (The reference implementation broke on a leading
/// non-video item; here non-video items are filtered out wherever they
/// appear.)
pub async fn recent_videos(
    client: &reqwest::Client,
    api_key: &str,
    channel_id: &str,
    max_results: u32,
) -> Result<Vec<VideoRecord>> {
    let max_results = max_results.min(MAX_RESULTS_LIMIT);
    debug!("Searching channel {channel_id} for {max_results} most recent videos");

    let max_results = max_results.to_string();
    let resp: SearchListResponse = client
        .get(SEARCH_URL)
        .query(&[
            ("key", api_key),
            ("channelId", channel_id),
            ("part", "id,snippet"),
            ("maxResults", max_results.as_str()),
            ("order", "date"),
        ])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(collect_records(resp))
}

fn collect_records(resp: SearchListResponse) -> Vec<VideoRecord> {
    resp.items
        .into_iter()
        .filter(|item| item.id.kind == "youtube#video")
        .filter_map(|item| {
            let video_id = item.id.video_id?;
            Some(VideoRecord {
                title: item.snippet.title,
                description: item.snippet.description,
                video_id,
                publish_time: item.snippet.publish_time,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SearchListResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_collect_records_videos_only() {
        let resp = parse(
            r#"{
  "items": [
    {
      "id": {"kind": "youtube#video", "videoId": "abc12345678"},
      "snippet": {"title": "First", "description": "d1", "publishTime": "2024-01-02T00:00:00Z"}
    },
    {
      "id": {"kind": "youtube#video", "videoId": "def12345678"},
      "snippet": {"title": "Second", "description": "d2", "publishTime": "2024-01-01T00:00:00Z"}
    }
  ]
}"#,
        );
        let records = collect_records(resp);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].video_id, "abc12345678");
        assert_eq!(records[0].title, "First");
        assert_eq!(records[0].publish_time, "2024-01-02T00:00:00Z");
        assert_eq!(records[1].video_id, "def12345678");
    }

    // The reference implementation raised when the first search result was
    // a playlist or channel; this case documents the deliberate fix.
    #[test]
    fn test_collect_records_skips_leading_non_video() {
        let resp = parse(
            r#"{
  "items": [
    {
      "id": {"kind": "youtube#playlist"},
      "snippet": {"title": "A playlist", "description": "", "publishTime": ""}
    },
    {
      "id": {"kind": "youtube#video", "videoId": "abc12345678"},
      "snippet": {"title": "A video", "description": "", "publishTime": "2024-01-01T00:00:00Z"}
    }
  ]
}"#,
        );
        let records = collect_records(resp);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].video_id, "abc12345678");
    }

    #[test]
    fn test_collect_records_skips_channel_kind() {
        let resp = parse(
            r#"{
  "items": [
    {
      "id": {"kind": "youtube#channel"},
      "snippet": {"title": "The channel itself", "description": "", "publishTime": ""}
    }
  ]
}"#,
        );
        assert!(collect_records(resp).is_empty());
    }

    #[test]
    fn test_collect_records_empty_response() {
        let resp = parse(r#"{"items": []}"#);
        assert!(collect_records(resp).is_empty());
    }

    #[test]
    fn test_collect_records_missing_items_field() {
        let resp = parse("{}");
        assert!(collect_records(resp).is_empty());
    }

    #[test]
    fn test_collect_records_nonempty_ids() {
        let resp = parse(
            r#"{
  "items": [
    {
      "id": {"kind": "youtube#video", "videoId": "abc12345678"},
      "snippet": {}
    }
  ]
}"#,
        );
        let records = collect_records(resp);
        assert_eq!(records.len(), 1);
        assert!(!records[0].video_id.is_empty());
        assert_eq!(records[0].title, "");
    }
}
