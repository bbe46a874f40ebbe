use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::error::AppResult;
use crate::models::{Destination, DestinationRow};

/// Creates a PostgreSQL connection pool
///
/// Establishes a pool of database connections for efficient reuse.
/// The pool automatically manages connection lifecycle and limits.
pub async fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Loads the full destination catalog.
///
/// Happens once at startup, outside the request path; the returned rows are
/// validated into `Destination`s here so malformed catalog data fails the
/// boot instead of a request. Row order is preserved, it is the tie-break of
/// last resort during ranking.
pub async fn load_catalog(pool: &PgPool) -> AppResult<Vec<Destination>> {
    let rows: Vec<DestinationRow> = sqlx::query_as(
        r#"
        SELECT id, name, zone, state, city, "type", significance,
               time_needed_hrs, duration_bucket, entrance_fee, budget_bucket,
               google_rating, sentiment_score, review_count,
               sample_reviews, best_time_to_visit, weekly_off
        FROM destinations
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    let catalog = rows
        .into_iter()
        .map(DestinationRow::into_destination)
        .collect::<AppResult<Vec<_>>>()?;

    tracing::info!(destinations = catalog.len(), "Destination catalog loaded");

    Ok(catalog)
}
