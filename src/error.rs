use thiserror::Error;

// Everything that can sink an analysis request. No retries happen at this
// level; the handler surfaces the failure as-is.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("browser acquisition failed: {0}")]
    Acquisition(String),

    #[error("audit engine failed: {0}")]
    AuditEngine(String),

    // The audit result is missing a category or audit the synthesis rules
    // reference. That is an integration defect, not a "no issue" case, so
    // the whole analysis fails instead of guessing a default.
    #[error("audit result contract violated: {0}")]
    ContractViolation(String),
}

impl AnalysisError {
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Acquisition(_) => "acquisition_failed",
            AnalysisError::AuditEngine(_) => "audit_engine_failed",
            AnalysisError::ContractViolation(_) => "contract_violation",
        }
    }
}
