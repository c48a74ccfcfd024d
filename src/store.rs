use crate::models::AnalysisReport;
use std::sync::RwLock;

// Single-slot store for the most recent report. Concurrent analyses race
// on it last-write-wins; there is no versioning beyond "most recent".
pub struct ReportStore {
    slot: RwLock<Option<AnalysisReport>>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    pub fn put(&self, report: AnalysisReport) {
        let mut slot = self.slot.write().expect("report store lock poisoned");
        *slot = Some(report);
    }

    pub fn latest(&self) -> Option<AnalysisReport> {
        let slot = self.slot.read().expect("report store lock poisoned");
        slot.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::analysis::assemble_report;
    use crate::services::analysis::fixtures::raw_result;

    #[test]
    fn starts_empty() {
        let store = ReportStore::new();
        assert!(store.latest().is_none());
    }

    #[test]
    fn keeps_the_most_recent_report() {
        let store = ReportStore::new();
        let first = assemble_report(&raw_result(1.0, 1.0, 1.0, 1.0, 1.0)).unwrap();
        let second = assemble_report(&raw_result(0.5, 0.5, 0.5, 0.5, 0.5)).unwrap();

        store.put(first);
        store.put(second.clone());

        assert_eq!(store.latest(), Some(second));
    }
}
