use serde::Deserialize;

use super::{BudgetBucket, DurationBucket, JobType};

/// A travel-preference profile for a single recommend request.
///
/// Deserialized from arbitrary client JSON: unknown keys are ignored and every
/// field is optional except `job_type`, which defaults to Flexible. Stateless,
/// discarded once the request returns.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Preferred activity type ("Nature", "Heritage", ...).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Travel interest / purpose ("Relaxation", "Pilgrimage", ...).
    pub significance: Option<String>,
    pub budget_bucket: Option<BudgetBucket>,
    pub duration_bucket: Option<DurationBucket>,
    pub zone: Option<String>,
    pub job_type: JobType,
    /// Planned day of visit; excludes destinations closed on that day.
    pub visit_day: Option<String>,
    /// Display-only; not used in vectorization or filtering.
    pub season: Option<String>,
}

impl UserProfile {
    /// Maps the UI vocabulary onto the catalog vocabulary so the encoder
    /// works over a closed, pre-agreed categorical set. The catalog tags
    /// heritage sites as "Historical" and leisure spots as "Relaxation".
    pub fn canonicalized(mut self) -> Self {
        self.kind = self.kind.map(|kind| match kind.as_str() {
            "Heritage" => "Historical".to_string(),
            "Leisure" => "Relaxation".to_string(),
            _ => kind,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_from_sparse_json() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"type": "Nature", "unknown_key": 42}"#).unwrap();
        assert_eq!(profile.kind.as_deref(), Some("Nature"));
        assert_eq!(profile.job_type, JobType::Flexible);
        assert!(profile.budget_bucket.is_none());
        assert!(profile.visit_day.is_none());
    }

    #[test]
    fn test_canonicalizes_ui_vocabulary() {
        let profile = UserProfile {
            kind: Some("Heritage".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.canonicalized().kind.as_deref(), Some("Historical"));

        let profile = UserProfile {
            kind: Some("Leisure".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.canonicalized().kind.as_deref(), Some("Relaxation"));
    }

    #[test]
    fn test_canonicalize_leaves_catalog_values_alone() {
        let profile = UserProfile {
            kind: Some("Nature".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.canonicalized().kind.as_deref(), Some("Nature"));
    }
}
