// src/services/analysis/mod.rs

pub mod assemble;
pub mod issues;
pub mod recommend;
pub mod score;

pub use assemble::assemble_report;

use crate::error::AnalysisError;
use crate::models::AnalysisReport;
use crate::services::browser::{BrowserHandle, BrowserManager};
use crate::services::engine::{AuditEngine, AUDIT_CATEGORIES};
use log::info;

// One full analysis: launch a browser, audit the page through it, and
// synthesize the report. The browser handle is released exactly once on
// every path where acquisition succeeded, before any result or error is
// returned. Storing the report is the caller's side effect, not ours.
pub async fn run_analysis<B, E>(
    url: &str,
    browser: &B,
    engine: &E,
) -> Result<AnalysisReport, AnalysisError>
where
    B: BrowserManager,
    E: AuditEngine,
{
    let handle = browser.acquire().await?;
    info!("browser ready on port {}", handle.port());

    let outcome = match engine.run(url, handle.port(), &AUDIT_CATEGORIES).await {
        Ok(raw) => assemble_report(&raw),
        Err(err) => Err(err),
    };
    browser.release(handle).await;

    outcome
}


#[cfg(test)]
mod tests {
    use super::fixtures::raw_result;
    use super::*;
    use crate::models::RawAuditResult;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubHandle;

    impl BrowserHandle for StubHandle {
        fn port(&self) -> u16 {
            9222
        }
    }

    #[derive(Default)]
    struct StubBrowser {
        fail_acquire: bool,
        acquired: AtomicUsize,
        released: AtomicUsize,
    }

    impl BrowserManager for StubBrowser {
        type Handle = StubHandle;

        async fn acquire(&self) -> Result<StubHandle, AnalysisError> {
            if self.fail_acquire {
                return Err(AnalysisError::Acquisition("no browser available".into()));
            }
            self.acquired.fetch_add(1, Ordering::SeqCst);
            Ok(StubHandle)
        }

        async fn release(&self, _handle: StubHandle) {
            self.released.fetch_add(1, Ordering::SeqCst);
        }
    }

    enum StubOutcome {
        Passing,
        EngineFailure,
        // Parses fine upstream but is missing the audits the rules need,
        // so assembly fails with a contract violation.
        MissingAudits,
    }

    struct StubEngine {
        outcome: StubOutcome,
        runs: AtomicUsize,
    }

    impl StubEngine {
        fn new(outcome: StubOutcome) -> Self {
            Self {
                outcome,
                runs: AtomicUsize::new(0),
            }
        }
    }

    impl AuditEngine for StubEngine {
        async fn run(
            &self,
            _url: &str,
            _port: u16,
            _categories: &[&str],
        ) -> Result<RawAuditResult, AnalysisError> {
            self.runs.fetch_add(1, Ordering::SeqCst);
            match self.outcome {
                StubOutcome::Passing => Ok(raw_result(1.0, 1.0, 1.0, 1.0, 1.0)),
                StubOutcome::EngineFailure => {
                    Err(AnalysisError::AuditEngine("page load timed out".into()))
                }
                StubOutcome::MissingAudits => {
                    let mut raw = raw_result(1.0, 1.0, 1.0, 1.0, 1.0);
                    raw.audits.clear();
                    Ok(raw)
                }
            }
        }
    }

    #[tokio::test]
    async fn releases_the_browser_once_on_success() {
        let browser = StubBrowser::default();
        let engine = StubEngine::new(StubOutcome::Passing);

        let report = run_analysis("https://example.com", &browser, &engine)
            .await
            .unwrap();

        assert_eq!(report.score, 100);
        assert_eq!(browser.acquired.load(Ordering::SeqCst), 1);
        assert_eq!(browser.released.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn releases_the_browser_once_when_the_engine_fails() {
        let browser = StubBrowser::default();
        let engine = StubEngine::new(StubOutcome::EngineFailure);

        let err = run_analysis("https://example.com", &browser, &engine)
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::AuditEngine(_)));
        assert_eq!(browser.released.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn releases_the_browser_once_when_assembly_fails() {
        let browser = StubBrowser::default();
        let engine = StubEngine::new(StubOutcome::MissingAudits);

        let err = run_analysis("https://example.com", &browser, &engine)
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::ContractViolation(_)));
        assert_eq!(browser.released.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_acquisition_never_runs_the_engine_or_releases() {
        let browser = StubBrowser {
            fail_acquire: true,
            ..StubBrowser::default()
        };
        let engine = StubEngine::new(StubOutcome::Passing);

        let err = run_analysis("https://example.com", &browser, &engine)
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::Acquisition(_)));
        assert_eq!(engine.runs.load(Ordering::SeqCst), 0);
        assert_eq!(browser.released.load(Ordering::SeqCst), 0);
    }
}
