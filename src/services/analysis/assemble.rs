use crate::error::AnalysisError;
use crate::models::{AnalysisReport, CategoryReport, RawAuditResult};
use crate::services::analysis::issues::{
    extract_issues, ACCESSIBILITY_RULES, CONTENT_RULES, MOBILE_RULES, PERFORMANCE_RULES,
    SECURITY_RULES, SEO_RULES,
};
use crate::services::analysis::recommend::generate_recommendations;
use crate::services::analysis::score::score_categories;

// Pure function from one raw engine result to the consumer-facing report.
// All-or-nothing: any contract violation fails the whole assembly.
pub fn assemble_report(raw: &RawAuditResult) -> Result<AnalysisReport, AnalysisError> {
    let scores = score_categories(raw)?;

    Ok(AnalysisReport {
        // The top-level score mirrors the SEO category.
        score: scores.seo,
        performance: CategoryReport {
            score: scores.performance,
            issues: extract_issues(&PERFORMANCE_RULES, raw)?,
        },
        seo: CategoryReport {
            score: scores.seo,
            issues: extract_issues(&SEO_RULES, raw)?,
        },
        content: CategoryReport {
            score: scores.content,
            issues: extract_issues(&CONTENT_RULES, raw)?,
        },
        accessibility: CategoryReport {
            score: scores.accessibility,
            issues: extract_issues(&ACCESSIBILITY_RULES, raw)?,
        },
        security: CategoryReport {
            score: scores.security,
            issues: extract_issues(&SECURITY_RULES, raw)?,
        },
        mobile: CategoryReport {
            score: scores.mobile,
            issues: extract_issues(&MOBILE_RULES, raw)?,
        },
        recommendations: generate_recommendations(raw)?,
    })
}
