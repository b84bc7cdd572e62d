use crate::models::dataset::Dataset;

/// Shared, read-only application state handed to every worker.
#[derive(Debug)]
pub struct AppState {
    pub dataset: Dataset,
    pub app_name: String,
}

impl AppState {
    pub fn new(dataset: Dataset, app_name: impl Into<String>) -> Self {
        AppState { dataset, app_name: app_name.into() }
    }
}
