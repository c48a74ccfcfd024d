use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Success,
}

// A derived, human-readable finding for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub message: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub score: u8,
    pub issues: Vec<Issue>,
}

// The consumer-facing report. Field names and nesting are the public
// contract for the dashboard, so they stay stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub score: u8,
    pub performance: CategoryReport,
    pub seo: CategoryReport,
    pub content: CategoryReport,
    pub accessibility: CategoryReport,
    pub security: CategoryReport,
    pub mobile: CategoryReport,
    pub recommendations: Vec<Recommendation>,
}
