use std::sync::Arc;
use std::time::Instant;

use crate::application::SharedSessionStore;
use crate::domain::ClinicDataset;

/// State shared by every API route.
#[derive(Clone)]
pub struct AppState {
    pub session: SharedSessionStore,
    pub data: Arc<ClinicDataset>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(session: SharedSessionStore, data: Arc<ClinicDataset>) -> Self {
        Self {
            session,
            data,
            started_at: Instant::now(),
        }
    }
}
