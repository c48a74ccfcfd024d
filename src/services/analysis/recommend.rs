use crate::error::AnalysisError;
use crate::models::{Priority, RawAuditResult, Recommendation};

// Threshold checks against raw [0,1] category scores, before percentage
// conversion. Evaluation order is the output order.
struct RecommendationRule {
    category: &'static str,
    threshold: f64,
    priority: Priority,
    message: &'static str,
}

const RULES: [RecommendationRule; 2] = [
    RecommendationRule {
        category: "performance",
        threshold: 0.9,
        priority: Priority::High,
        message: "Optimize images and enable compression to improve performance",
    },
    RecommendationRule {
        category: "seo",
        threshold: 0.9,
        priority: Priority::Medium,
        message: "Improve meta tags and structured data for better SEO",
    },
];

pub(crate) fn generate_recommendations(
    raw: &RawAuditResult,
) -> Result<Vec<Recommendation>, AnalysisError> {
    let mut recommendations = Vec::new();
    for rule in &RULES {
        if raw.category_score(rule.category)? < rule.threshold {
            recommendations.push(Recommendation {
                message: rule.message.to_string(),
                priority: rule.priority,
            });
        }
    }
    Ok(recommendations)
}
