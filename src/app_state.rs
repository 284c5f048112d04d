use std::sync::Arc;

use crate::services::docintel::AnalysisProvider;
use crate::services::mapping::MappingSettings;
use crate::services::poller::PollPolicy;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn AnalysisProvider>,
    pub poll_policy: PollPolicy,
    pub mapping: MappingSettings,
}

impl AppState {
    pub fn new(
        analyzer: Arc<dyn AnalysisProvider>,
        poll_policy: PollPolicy,
        mapping: MappingSettings,
    ) -> Self {
        Self {
            analyzer,
            poll_policy,
            mapping,
        }
    }
}
