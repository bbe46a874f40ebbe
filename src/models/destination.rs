use serde::Serialize;
use sqlx::FromRow;

use super::{BudgetBucket, DurationBucket};
use crate::error::AppResult;

/// One catalog entry, produced by the offline data-preparation pipeline and
/// immutable for the engine's lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct Destination {
    pub id: i32,
    pub name: String,
    pub zone: String,
    pub state: String,
    pub city: String,
    /// Activity type, e.g. "Nature" or "Historical". Named `kind` to avoid
    /// the `type` keyword; serialized under the original column name.
    #[serde(rename = "type")]
    pub kind: String,
    /// Purpose tag, e.g. "Pilgrimage" or "Relaxation".
    pub significance: String,
    pub time_needed_hrs: f64,
    pub duration_bucket: DurationBucket,
    pub entrance_fee: f64,
    pub budget_bucket: BudgetBucket,
    /// Google review rating in [0, 5].
    pub google_rating: f64,
    /// Lexicon-scored review sentiment in [-1, 1].
    pub sentiment_score: f64,
    pub review_count: i64,
    /// Display-only review excerpts; never vectorized.
    pub sample_reviews: Option<String>,
    pub best_time_to_visit: Option<String>,
    /// Weekly closure day ("Monday", ...) or None when open all week.
    pub weekly_off: Option<String>,
}

/// Raw row shape of the `destinations` table. Numeric columns are nullable in
/// the source data; missing or unparseable values were written as NULL by the
/// pipeline and load here as zero.
#[derive(Debug, FromRow)]
pub struct DestinationRow {
    pub id: i32,
    pub name: String,
    pub zone: String,
    pub state: String,
    pub city: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub significance: String,
    pub time_needed_hrs: Option<f64>,
    pub duration_bucket: String,
    pub entrance_fee: Option<f64>,
    pub budget_bucket: String,
    pub google_rating: Option<f64>,
    pub sentiment_score: Option<f64>,
    pub review_count: Option<i64>,
    pub sample_reviews: Option<String>,
    pub best_time_to_visit: Option<String>,
    pub weekly_off: Option<String>,
}

impl DestinationRow {
    /// Validates the row into a `Destination`. An unknown bucket string is a
    /// catalog error surfaced at load time, not deferred to request time.
    pub fn into_destination(self) -> AppResult<Destination> {
        Ok(Destination {
            id: self.id,
            name: self.name,
            zone: self.zone,
            state: self.state,
            city: self.city,
            kind: self.kind,
            significance: self.significance,
            time_needed_hrs: self.time_needed_hrs.unwrap_or(0.0),
            duration_bucket: self.duration_bucket.parse()?,
            entrance_fee: self.entrance_fee.unwrap_or(0.0),
            budget_bucket: self.budget_bucket.parse()?,
            google_rating: self.google_rating.unwrap_or(0.0),
            sentiment_score: self.sentiment_score.unwrap_or(0.0),
            review_count: self.review_count.unwrap_or(0),
            sample_reviews: self.sample_reviews,
            best_time_to_visit: self.best_time_to_visit,
            weekly_off: self.weekly_off,
        })
    }
}
