//! External collaborators consumed by the API surface.
//!
//! Both services wrap third-party APIs and are failure-isolated: any
//! transport, quota, or response-shape problem resolves to a fixed fallback
//! value instead of an error reaching the recommendation path.

pub mod narrative;
pub mod vlogs;

pub use narrative::NarrativeService;
pub use vlogs::{Vlog, VlogService};
