//! Application state shared by the handlers

use std::sync::Arc;

use crate::domain::Cache;
use crate::infrastructure::analysis::AnalysisService;

#[derive(Clone)]
pub struct AppState {
    pub analysis: Arc<AnalysisService>,
}

impl AppState {
    pub fn new(analysis: Arc<AnalysisService>) -> Self {
        Self { analysis }
    }

    /// Cache behind the analysis service
    pub fn cache(&self) -> &Arc<dyn Cache> {
        self.analysis.cache()
    }
}
