// src/models/mod.rs

pub mod app_state;
pub mod audit;
pub mod report;

pub use app_state::AppState;
pub use audit::{AuditRecord, RawAuditResult, RawCategories, RawCategory};
pub use report::{
    AnalysisReport, CategoryReport, Issue, Priority, Recommendation, Severity,
};
