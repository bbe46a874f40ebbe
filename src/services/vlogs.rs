use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{
    db::{Cache, CacheKey},
    error::{AppError, AppResult},
};

const MAX_RESULTS: u8 = 3;
const VLOG_CACHE_TTL: u64 = 86400; // 1 day

/// A travel-vlog reference shown on the destination detail panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vlog {
    pub title: String,
    pub video_id: String,
    pub thumbnail: String,
}

/// Looks up travel vlogs for a destination via the YouTube Data API.
///
/// Successful lookups are cached in Redis by destination name. Failures,
/// quota errors, and empty result sets all resolve to a fixed placeholder
/// pair - the detail panel always has something to render.
#[derive(Clone)]
pub struct VlogService {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    cache: Cache,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: VideoId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoId {
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    thumbnails: Thumbnails,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    high: Thumbnail,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl VlogService {
    pub fn new(cache: Cache, api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            cache,
        }
    }

    /// Returns an ordered list of vlogs for the destination, placeholders on
    /// any failure. Never errors.
    pub async fn search(&self, destination_name: &str) -> Vec<Vlog> {
        let cache_key = CacheKey::VlogSearch(destination_name.to_string());
        if let Some(cached) = self.cache.get::<Vec<Vlog>>(&cache_key).await {
            return cached;
        }

        match self.try_search(destination_name).await {
            Ok(vlogs) if !vlogs.is_empty() => {
                self.cache.set_in_background(&cache_key, &vlogs, VLOG_CACHE_TTL);
                vlogs
            }
            Ok(_) => {
                tracing::warn!(
                    destination = %destination_name,
                    "Vlog search returned no results, using placeholders"
                );
                placeholder_vlogs(destination_name)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    destination = %destination_name,
                    "Vlog search failed, using placeholders"
                );
                placeholder_vlogs(destination_name)
            }
        }
    }

    async fn try_search(&self, destination_name: &str) -> AppResult<Vec<Vlog>> {
        let url = format!("{}/search", self.api_url);
        let query = format!("{} travel vlog India", destination_name);
        let max_results = MAX_RESULTS.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", query.as_str()),
                ("maxResults", max_results.as_str()),
                ("type", "video"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "YouTube API returned status {}: {}",
                status, body
            )));
        }

        let search: SearchResponse = response.json().await?;
        let vlogs: Vec<Vlog> = search
            .items
            .into_iter()
            .map(|item| Vlog {
                title: item.snippet.title,
                video_id: item.id.video_id,
                thumbnail: item.snippet.thumbnails.high.url,
            })
            .collect();

        tracing::info!(
            destination = %destination_name,
            results = vlogs.len(),
            "Vlog search completed"
        );

        Ok(vlogs)
    }
}

/// Fixed placeholder entries pointing at generic travel footage, used when
/// the live lookup is unavailable.
pub fn placeholder_vlogs(destination_name: &str) -> Vec<Vlog> {
    vec![
        Vlog {
            title: format!("Experience {} | Travel Vlog", destination_name),
            video_id: "i9E_Blai8vk".to_string(),
            thumbnail: "https://img.youtube.com/vi/i9E_Blai8vk/hqdefault.jpg".to_string(),
        },
        Vlog {
            title: format!("Top things to do in {}", destination_name),
            video_id: "ysz5S6PUM-U".to_string(),
            thumbnail: "https://img.youtube.com/vi/ysz5S6PUM-U/hqdefault.jpg".to_string(),
        },
    ]
}
