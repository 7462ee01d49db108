use std::sync::Arc;

use service::Services;

/// Shared handler state: the immutable service graph.
#[derive(Clone)]
pub struct ServerState {
    pub services: Arc<Services>,
}

impl ServerState {
    pub fn new(services: Services) -> Self {
        Self { services: Arc::new(services) }
    }

    /// Services over process-local repositories.
    pub fn in_memory() -> Self {
        Self::new(Services::in_memory())
    }
}
