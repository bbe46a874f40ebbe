use tracing::instrument;

use crate::models::{Destination, Recommendation, UserProfile};

pub mod explain;
pub mod filters;
pub mod ranker;
pub mod vectorizer;

pub use vectorizer::EncoderState;

/// Number of recommendations returned when the caller does not ask for a
/// specific count.
pub const DEFAULT_TOP_N: usize = 5;

/// The profile matching engine.
///
/// Owns the immutable catalog and its pre-computed feature vectors, both
/// built once at construction. A request is a pure pipeline over that state
/// (vectorize, rank, filter, explain), so a single `Engine` behind an `Arc`
/// can serve concurrent requests without locking.
pub struct Engine {
    catalog: Vec<Destination>,
    catalog_vectors: Vec<Vec<f64>>,
    encoder: EncoderState,
}

impl Engine {
    /// Fits the encoder on the catalog and caches one vector per destination.
    /// An empty catalog is accepted; every recommend call then returns an
    /// empty list.
    pub fn new(catalog: Vec<Destination>) -> Self {
        let encoder = EncoderState::fit(&catalog);
        let catalog_vectors = catalog
            .iter()
            .map(|destination| encoder.encode_destination(destination))
            .collect();

        tracing::info!(
            destinations = catalog.len(),
            dimensions = encoder.dimensions(),
            "Catalog vectors built"
        );

        Self {
            catalog,
            catalog_vectors,
            encoder,
        }
    }

    pub fn catalog(&self) -> &[Destination] {
        &self.catalog
    }

    pub fn destination(&self, id: i32) -> Option<&Destination> {
        self.catalog.iter().find(|destination| destination.id == id)
    }

    /// Returns at most `top_n` recommendations for the profile, best match
    /// first. Ranking happens before the hard-constraint filter, so a strict
    /// filter can shrink the result below `top_n` even when excluded
    /// candidates score higher than the survivors.
    #[instrument(skip(self, profile))]
    pub fn recommend(&self, profile: UserProfile, top_n: usize) -> Vec<Recommendation> {
        let profile = profile.canonicalized();
        let user_vector = self.encoder.encode_profile(&profile);

        let ranked = ranker::rank(&user_vector, &self.catalog_vectors, &self.catalog);
        let survivors = filters::apply_constraints(ranked, &profile);

        let recommendations: Vec<Recommendation> = survivors
            .into_iter()
            .take(top_n)
            .map(|(destination, match_score)| Recommendation {
                explanation: explain::explain(destination, &profile),
                destination: destination.clone(),
                match_score,
            })
            .collect();

        tracing::debug!(results = recommendations.len(), "Recommendation pipeline complete");

        recommendations
    }
}
