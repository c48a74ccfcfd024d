use crate::config::Config;
use crate::services::{ChromeLauncher, LighthouseCli};
use crate::store::ReportStore;

// Shared handler state. The report store is injected here instead of
// living in a process global so tests can assert on it directly.
pub struct AppState {
    pub browser: ChromeLauncher,
    pub engine: LighthouseCli,
    pub store: ReportStore,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            browser: ChromeLauncher::new(config),
            engine: LighthouseCli::new(config),
            store: ReportStore::new(),
        }
    }
}
