//! Application state.

use std::sync::Arc;

use hilite_pipeline::{Orchestrator, PipelineConfig};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub orchestrator: Arc<Orchestrator>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: ApiConfig, pipeline_config: PipelineConfig) -> Self {
        Self {
            config,
            orchestrator: Arc::new(Orchestrator::from_config(pipeline_config)),
        }
    }
}
