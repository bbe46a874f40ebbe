use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod destination;
pub mod profile;

pub use destination::{Destination, DestinationRow};
pub use profile::UserProfile;

use crate::error::AppError;

/// Discretized visit duration, derived offline from `time_needed_hrs`
/// (< 5h = Short, 5-24h = Medium, > 24h = Long). The engine never re-derives
/// these boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationBucket {
    Short,
    Medium,
    Long,
}

/// Discretized entrance fee. `Medium` only ever appears as a user preference
/// (the UI budget slider); catalog rows are bucketed to Free/Low/High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetBucket {
    Free,
    Low,
    Medium,
    High,
}

/// Time flexibility of the user. Fixed Schedule turns the duration preference
/// into a hard constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Fixed Schedule")]
    FixedSchedule,
    #[serde(alias = "Flexible / Remote")]
    Flexible,
}

impl Default for JobType {
    fn default() -> Self {
        JobType::Flexible
    }
}

impl Display for DurationBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DurationBucket::Short => "Short",
            DurationBucket::Medium => "Medium",
            DurationBucket::Long => "Long",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for DurationBucket {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Short" => Ok(DurationBucket::Short),
            "Medium" => Ok(DurationBucket::Medium),
            "Long" => Ok(DurationBucket::Long),
            other => Err(AppError::Catalog(format!(
                "unknown duration bucket: {}",
                other
            ))),
        }
    }
}

impl Display for BudgetBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BudgetBucket::Free => "Free",
            BudgetBucket::Low => "Low",
            BudgetBucket::Medium => "Medium",
            BudgetBucket::High => "High",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for BudgetBucket {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Free" => Ok(BudgetBucket::Free),
            "Low" => Ok(BudgetBucket::Low),
            "Medium" => Ok(BudgetBucket::Medium),
            "High" => Ok(BudgetBucket::High),
            other => Err(AppError::Catalog(format!(
                "unknown budget bucket: {}",
                other
            ))),
        }
    }
}

/// A destination annotated with its similarity score and, after filtering,
/// a human-readable justification. Built per request, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub destination: Destination,
    pub match_score: f64,
    pub explanation: String,
}
