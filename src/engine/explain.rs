use crate::models::{BudgetBucket, Destination, UserProfile};

/// Sentence returned when no matched-attribute predicate fires.
pub const FALLBACK_EXPLANATION: &str = "Recommended based on overall similarity.";

/// Sentiment above this threshold earns a "highly positive" mention.
const SENTIMENT_HIGHLIGHT_THRESHOLD: f64 = 0.8;

/// Composes the short justification shown under each recommendation card.
///
/// Pure and deterministic: predicates are evaluated in a fixed order
/// (interest, budget, duration, sentiment) and matched fragments are joined
/// into a single sentence. Identical inputs always yield identical text, so
/// the output is safe to assert on in regression tests.
pub fn explain(destination: &Destination, profile: &UserProfile) -> String {
    let mut reasons = Vec::new();

    let kind_match = profile.kind.as_deref() == Some(destination.kind.as_str());
    let significance_match =
        profile.significance.as_deref() == Some(destination.significance.as_str());
    if kind_match || significance_match {
        reasons.push(format!(
            "aligns with your interest in {}/{}",
            destination.kind, destination.significance
        ));
    }

    if profile.budget_bucket == Some(destination.budget_bucket) {
        reasons.push(format!("matches your {} budget", destination.budget_bucket));
    } else if destination.budget_bucket == BudgetBucket::Free
        && profile.budget_bucket == Some(BudgetBucket::Low)
    {
        reasons.push("is budget-friendly (Free)".to_string());
    }

    if profile.duration_bucket == Some(destination.duration_bucket) {
        reasons.push(format!(
            "fits your {} time availability",
            destination.duration_bucket
        ));
    }

    if destination.sentiment_score > SENTIMENT_HIGHLIGHT_THRESHOLD {
        reasons.push("has highly positive visitor sentiment".to_string());
    }

    if reasons.is_empty() {
        return FALLBACK_EXPLANATION.to_string();
    }
    format!("This place {}.", reasons.join(", "))
}
