use std::collections::BTreeSet;

use crate::models::{Destination, UserProfile};

/// Ideal-destination defaults injected into the numeric slots of a user
/// vector. The profile UI never asks for these, so the user vector is biased
/// toward excellent, well-reviewed places. Deliberate; changing them changes
/// every match score.
pub const IDEAL_RATING: f64 = 4.8;
pub const IDEAL_SENTIMENT: f64 = 0.9;
pub const IDEAL_REVIEW_COUNT: f64 = 100.0;

/// Fitted encoder state: one-hot vocabularies and min-max bounds derived from
/// the full catalog at load time. Destination and profile vectors must go
/// through the same state for cosine similarity to be meaningful.
#[derive(Debug, Clone)]
pub struct EncoderState {
    kind_vocab: Vec<String>,
    significance_vocab: Vec<String>,
    duration_vocab: Vec<String>,
    budget_vocab: Vec<String>,
    zone_vocab: Vec<String>,
    rating_bounds: (f64, f64),
    sentiment_bounds: (f64, f64),
    review_bounds: (f64, f64),
}

impl EncoderState {
    /// Fits vocabularies (sorted, deduplicated) and numeric scaling bounds
    /// from the catalog. An empty catalog fits to empty vocabularies and
    /// degenerate bounds; every later encode then yields the zero vector.
    pub fn fit(catalog: &[Destination]) -> Self {
        Self {
            kind_vocab: vocabulary(catalog, |d| d.kind.clone()),
            significance_vocab: vocabulary(catalog, |d| d.significance.clone()),
            duration_vocab: vocabulary(catalog, |d| d.duration_bucket.to_string()),
            budget_vocab: vocabulary(catalog, |d| d.budget_bucket.to_string()),
            zone_vocab: vocabulary(catalog, |d| d.zone.clone()),
            rating_bounds: bounds(catalog, |d| d.google_rating),
            sentiment_bounds: bounds(catalog, |d| d.sentiment_score),
            review_bounds: bounds(catalog, |d| d.review_count as f64),
        }
    }

    /// Total vector length: one slot per vocabulary entry plus the three
    /// scaled numeric fields.
    pub fn dimensions(&self) -> usize {
        self.kind_vocab.len()
            + self.significance_vocab.len()
            + self.duration_vocab.len()
            + self.budget_vocab.len()
            + self.zone_vocab.len()
            + 3
    }

    pub fn encode_destination(&self, destination: &Destination) -> Vec<f64> {
        self.encode(
            Some(&destination.kind),
            Some(&destination.significance),
            Some(&destination.duration_bucket.to_string()),
            Some(&destination.budget_bucket.to_string()),
            Some(&destination.zone),
            destination.google_rating,
            destination.sentiment_score,
            destination.review_count as f64,
        )
    }

    /// Encodes a user profile into the destination vector space. Missing
    /// categorical preferences (and values outside the catalog vocabulary)
    /// contribute an all-zero one-hot block rather than failing; the numeric
    /// slots always carry the ideal-destination defaults.
    pub fn encode_profile(&self, profile: &UserProfile) -> Vec<f64> {
        self.encode(
            profile.kind.as_deref(),
            profile.significance.as_deref(),
            profile.duration_bucket.map(|b| b.to_string()).as_deref(),
            profile.budget_bucket.map(|b| b.to_string()).as_deref(),
            profile.zone.as_deref(),
            IDEAL_RATING,
            IDEAL_SENTIMENT,
            IDEAL_REVIEW_COUNT,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn encode(
        &self,
        kind: Option<&str>,
        significance: Option<&str>,
        duration: Option<&str>,
        budget: Option<&str>,
        zone: Option<&str>,
        rating: f64,
        sentiment: f64,
        review_count: f64,
    ) -> Vec<f64> {
        let mut vector = Vec::with_capacity(self.dimensions());
        one_hot(&mut vector, &self.kind_vocab, kind);
        one_hot(&mut vector, &self.significance_vocab, significance);
        one_hot(&mut vector, &self.duration_vocab, duration);
        one_hot(&mut vector, &self.budget_vocab, budget);
        one_hot(&mut vector, &self.zone_vocab, zone);
        vector.push(min_max_scale(rating, self.rating_bounds));
        vector.push(min_max_scale(sentiment, self.sentiment_bounds));
        vector.push(min_max_scale(review_count, self.review_bounds));
        vector
    }
}

fn vocabulary<F>(catalog: &[Destination], field: F) -> Vec<String>
where
    F: Fn(&Destination) -> String,
{
    catalog
        .iter()
        .map(field)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn bounds<F>(catalog: &[Destination], field: F) -> (f64, f64)
where
    F: Fn(&Destination) -> f64,
{
    catalog.iter().map(field).fold((f64::MAX, f64::MIN), |(min, max), v| {
        (min.min(v), max.max(v))
    })
}

/// Appends the one-hot block for `value` against `vocab`. An absent or
/// out-of-vocabulary value leaves the whole block zero ("ignore unknown").
fn one_hot(vector: &mut Vec<f64>, vocab: &[String], value: Option<&str>) {
    for entry in vocab {
        let hit = value.is_some_and(|v| v == entry);
        vector.push(if hit { 1.0 } else { 0.0 });
    }
}

/// Scales into [0, 1]. A degenerate bound (constant column, or an empty
/// catalog) maps everything to 0; out-of-range inputs (the ideal defaults can
/// exceed the catalog maximum) are clamped so encodings stay non-negative.
fn min_max_scale(value: f64, (min, max): (f64, f64)) -> f64 {
    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
        return 0.0;
    }
    ((value - min) / range).clamp(0.0, 1.0)
}
