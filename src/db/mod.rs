pub mod cache;
pub mod postgres;

pub use cache::{create_redis_client, Cache, CacheKey};
pub use postgres::{create_pool, load_catalog};
