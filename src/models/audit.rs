use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// One diagnostic check inside a category. Lighthouse leaves `score` null
// for informational audits, so it stays optional here.
#[derive(Debug, Deserialize, Serialize)]
pub struct AuditRecord {
    pub score: Option<f64>,
    #[serde(rename = "displayValue")]
    pub display_value: Option<String>,
}

// Raw score for a single category, on a [0,1] scale.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RawCategory {
    pub score: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RawCategories {
    pub performance: Option<RawCategory>,
    pub seo: Option<RawCategory>,
    pub accessibility: Option<RawCategory>,
    #[serde(rename = "best-practices")]
    pub best_practices: Option<RawCategory>,
    pub pwa: Option<RawCategory>,
}

// Root structure of one engine run, deserialized straight from the
// Lighthouse JSON output. Consumed once per request, never persisted.
#[derive(Debug, Deserialize, Serialize)]
pub struct RawAuditResult {
    pub categories: RawCategories,
    pub audits: HashMap<String, AuditRecord>,
}

impl RawAuditResult {
    // Raw [0,1] score for a named category. A category the synthesis rules
    // reference has to be present and scored; anything else is an
    // integration defect upstream.
    pub fn category_score(&self, name: &str) -> Result<f64, AnalysisError> {
        let category = match name {
            "performance" => self.categories.performance.as_ref(),
            "seo" => self.categories.seo.as_ref(),
            "accessibility" => self.categories.accessibility.as_ref(),
            "best-practices" => self.categories.best_practices.as_ref(),
            "pwa" => self.categories.pwa.as_ref(),
            _ => None,
        };
        category.and_then(|c| c.score).ok_or_else(|| {
            AnalysisError::ContractViolation(format!(
                "category `{}` is missing from the audit result",
                name
            ))
        })
    }

    pub fn audit(&self, id: &str) -> Result<&AuditRecord, AnalysisError> {
        self.audits.get(id).ok_or_else(|| {
            AnalysisError::ContractViolation(format!(
                "audit `{}` is missing from the audit result",
                id
            ))
        })
    }
}
