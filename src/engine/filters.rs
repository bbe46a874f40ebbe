use crate::models::{BudgetBucket, Destination, JobType, UserProfile};

/// Applies the hard business rules to an already-ranked candidate list,
/// strictly in order: schedule, then budget, then availability. Each step
/// prunes the previous step's survivors; relative order is untouched. An
/// empty survivor set is a valid outcome, not an error.
pub fn apply_constraints<'a>(
    ranked: Vec<(&'a Destination, f64)>,
    profile: &UserProfile,
) -> Vec<(&'a Destination, f64)> {
    ranked
        .into_iter()
        .filter(|(destination, _)| passes_schedule(destination, profile))
        .filter(|(destination, _)| passes_budget(destination, profile))
        .filter(|(destination, _)| passes_availability(destination, profile))
        .collect()
}

/// A Fixed Schedule user gets exactly the duration they asked for; there is
/// no flexibility window. Flexible users (and fixed-schedule users with no
/// stated duration) pass everything.
fn passes_schedule(destination: &Destination, profile: &UserProfile) -> bool {
    if profile.job_type != JobType::FixedSchedule {
        return true;
    }
    match profile.duration_bucket {
        Some(desired) => destination.duration_bucket == desired,
        None => true,
    }
}

/// Low budget drops High (Free and Low both pass); Free keeps only Free;
/// Medium and High preferences apply no budget filter at all.
fn passes_budget(destination: &Destination, profile: &UserProfile) -> bool {
    match profile.budget_bucket {
        Some(BudgetBucket::Low) => destination.budget_bucket != BudgetBucket::High,
        Some(BudgetBucket::Free) => destination.budget_bucket == BudgetBucket::Free,
        _ => true,
    }
}

/// A planned visit day excludes destinations closed on that day. No
/// `weekly_off` means open all week, which never excludes.
fn passes_availability(destination: &Destination, profile: &UserProfile) -> bool {
    match (&profile.visit_day, &destination.weekly_off) {
        (Some(visit_day), Some(weekly_off)) => visit_day != weekly_off,
        _ => true,
    }
}
