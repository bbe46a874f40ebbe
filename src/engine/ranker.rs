use std::cmp::Ordering;

use crate::models::Destination;

/// Scores every catalog vector against the user vector and orders the catalog
/// by descending cosine similarity, breaking score ties by descending
/// `google_rating`. The sort is stable, so fully tied entries keep catalog
/// order and identical inputs always produce identical output.
pub fn rank<'a>(
    user_vector: &[f64],
    catalog_vectors: &[Vec<f64>],
    catalog: &'a [Destination],
) -> Vec<(&'a Destination, f64)> {
    debug_assert_eq!(catalog_vectors.len(), catalog.len());

    let mut ranked: Vec<(&Destination, f64)> = catalog
        .iter()
        .zip(catalog_vectors)
        .map(|(destination, vector)| (destination, cosine_similarity(user_vector, vector)))
        .collect();

    ranked.sort_by(|(a, a_score), (b, b_score)| {
        b_score
            .partial_cmp(a_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                b.google_rating
                    .partial_cmp(&a.google_rating)
                    .unwrap_or(Ordering::Equal)
            })
    });

    ranked
}

/// Cosine similarity of two equal-length vectors. All encodings are
/// non-negative, so the result lands in [0, 1]; a zero-magnitude side
/// (e.g. a profile with only unseen categories over a degenerate catalog)
/// scores 0.0 rather than dividing by zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
