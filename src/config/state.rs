// Application state module
// Holds the loaded configuration and the seeded dataset

use crate::config::Config;
use crate::dataset::Dataset;

/// Application state shared by every connection task.
///
/// Built once before the listener starts accepting connections and never
/// mutated afterwards, so handlers read it concurrently without locks.
pub struct AppState {
    pub config: Config,
    dataset: Dataset,
}

impl AppState {
    pub fn new(config: Config, dataset: Dataset) -> Self {
        Self { config, dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}
