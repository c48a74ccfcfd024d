use crate::error::AnalysisError;
use crate::models::RawAuditResult;

// Integer 0-100 scores for every report category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryScores {
    pub performance: u8,
    pub seo: u8,
    pub accessibility: u8,
    pub security: u8,
    pub mobile: u8,
    pub content: u8,
}

// The content category has no engine counterpart; it blends three raw
// scores with these weights before percentage conversion.
const CONTENT_SEO_WEIGHT: f64 = 0.5;
const CONTENT_ACCESSIBILITY_WEIGHT: f64 = 0.3;
const CONTENT_BEST_PRACTICES_WEIGHT: f64 = 0.2;

pub fn score_categories(raw: &RawAuditResult) -> Result<CategoryScores, AnalysisError> {
    let performance = raw.category_score("performance")?;
    let seo = raw.category_score("seo")?;
    let accessibility = raw.category_score("accessibility")?;
    let best_practices = raw.category_score("best-practices")?;
    let pwa = raw.category_score("pwa")?;

    let content = CONTENT_SEO_WEIGHT * seo
        + CONTENT_ACCESSIBILITY_WEIGHT * accessibility
        + CONTENT_BEST_PRACTICES_WEIGHT * best_practices;

    Ok(CategoryScores {
        performance: to_percent(performance),
        seo: to_percent(seo),
        accessibility: to_percent(accessibility),
        security: to_percent(best_practices),
        mobile: to_percent(pwa),
        content: to_percent(content),
    })
}

// Scores arrive on a [0,1] scale. A value above 1 already went through an
// upstream x100 conversion (once for (1,100], twice for (100,10000]) and
// gets scaled back so consumers never see a score over 100.
pub(crate) fn to_percent(raw: f64) -> u8 {
    let scaled = if raw <= 1.0 {
        raw * 100.0
    } else if raw <= 100.0 {
        raw
    } else {
        raw / 100.0
    };
    scaled.round() as u8
}
