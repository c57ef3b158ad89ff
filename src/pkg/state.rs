use std::sync::Arc;

use crate::pkg::services::{DefaultSampleService, SampleService};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn SampleService>,
}

impl AppState {
    pub fn new() -> AppState {
        AppState {
            service: Arc::new(DefaultSampleService),
        }
    }

    pub fn with_service(service: Arc<dyn SampleService>) -> AppState {
        AppState { service }
    }
}

impl Default for AppState {
    fn default() -> AppState {
        AppState::new()
    }
}
