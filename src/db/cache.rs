use std::fmt::Display;

use redis::{AsyncCommands, Client};
use serde::{de::DeserializeOwned, Serialize};

/// Creates a Redis client for caching external lookups.
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Vlog search results for a destination name.
    VlogSearch(String),
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::VlogSearch(name) => write!(f, "vlogs:{}", name.to_lowercase()),
        }
    }
}

/// Read-through cache over Redis.
///
/// Strictly best-effort: a miss, a connection failure, or a bad payload all
/// surface as `None` and the caller falls through to the live lookup. Writes
/// are fire-and-forget on a spawned task so they never delay a response.
#[derive(Clone)]
pub struct Cache {
    redis_client: Client,
}

impl Cache {
    pub fn new(redis_client: Client) -> Self {
        Self { redis_client }
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let mut conn = match self.redis_client.get_multiplexed_async_connection().await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Redis unavailable, skipping cache read");
                return None;
            }
        };

        let cached: Option<String> = match conn.get(key.to_string()).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Redis get failed");
                return None;
            }
        };

        let json = cached?;
        match serde_json::from_str(&json) {
            Ok(value) => {
                tracing::debug!(key = %key, "Cache hit");
                Some(value)
            }
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Evicting undecodable cache entry");
                None
            }
        }
    }

    /// Queues a cache write without blocking the caller. Failures are logged
    /// and dropped; the cache is an optimization, not a store of record.
    pub fn set_in_background<T: Serialize>(&self, key: &CacheKey, value: &T, ttl_secs: u64) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, key = %key, "Cache serialization failed");
                return;
            }
        };

        let client = self.redis_client.clone();
        let key = key.to_string();
        tokio::spawn(async move {
            let result = async {
                let mut conn = client.get_multiplexed_async_connection().await?;
                conn.set_ex::<_, _, ()>(&key, json, ttl_secs).await
            }
            .await;

            if let Err(e) = result {
                tracing::warn!(error = %e, key = %key, "Background cache write failed");
            }
        });
    }
}
