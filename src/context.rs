use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::event::EventContext;
use crate::services::CommitComparisonService;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub event: EventContext,
    pub comparison: Arc<dyn CommitComparisonService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        event: EventContext,
        comparison: Arc<dyn CommitComparisonService>,
    ) -> Self {
        Self {
            config,
            event,
            comparison,
        }
    }
}
