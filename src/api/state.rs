use std::sync::Arc;

use crate::engine::Engine;
use crate::services::{NarrativeService, VlogService};

/// Shared application state.
///
/// The engine (catalog plus vector cache) is built once at startup and is
/// never mutated afterwards, so handlers share it through a plain `Arc`
/// without locking. The collaborator services are cheap clones around
/// connection pools.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
    pub narrative: NarrativeService,
    pub vlogs: VlogService,
}

impl AppState {
    pub fn new(engine: Engine, narrative: NarrativeService, vlogs: VlogService) -> Self {
        Self {
            engine: Arc::new(engine),
            narrative,
            vlogs,
        }
    }
}
