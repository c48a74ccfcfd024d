use crate::error::AnalysisError;
use crate::models::{AuditRecord, Issue, RawAuditResult, Severity};

// One threshold check against a named audit. A rule fires when the
// audit's score is strictly below the threshold; an unscored audit counts
// as failing.
struct IssueRule {
    audit: &'static str,
    threshold: f64,
    severity: Severity,
    text: IssueText,
}

enum IssueText {
    Fixed(&'static str),
    // Rendered with the audit's display value appended, e.g.
    // "Slow speed index (4.2 s)".
    WithDisplayValue(&'static str),
}

impl IssueText {
    fn render(&self, record: &AuditRecord) -> String {
        match self {
            IssueText::Fixed(text) => (*text).to_string(),
            IssueText::WithDisplayValue(text) => {
                let value = record.display_value.as_deref().unwrap_or("n/a");
                format!("{} ({})", text, value)
            }
        }
    }
}

// The rules for one report category, evaluated in order, plus the single
// success entry used when none of them fire.
pub(crate) struct CategoryRules {
    rules: &'static [IssueRule],
    all_clear: &'static str,
}

pub(crate) const PERFORMANCE_RULES: CategoryRules = CategoryRules {
    rules: &[
        IssueRule {
            audit: "speed-index",
            threshold: 0.9,
            severity: Severity::Warning,
            text: IssueText::WithDisplayValue("Slow speed index"),
        },
        IssueRule {
            audit: "largest-contentful-paint",
            threshold: 0.9,
            severity: Severity::Critical,
            text: IssueText::WithDisplayValue("Large contentful paint"),
        },
    ],
    all_clear: "No critical performance issues",
};

pub(crate) const SEO_RULES: CategoryRules = CategoryRules {
    rules: &[
        IssueRule {
            audit: "meta-description",
            threshold: 1.0,
            severity: Severity::Warning,
            text: IssueText::Fixed("Missing or incomplete meta description"),
        },
        IssueRule {
            audit: "canonical",
            threshold: 1.0,
            severity: Severity::Warning,
            text: IssueText::Fixed("Canonical URL issues detected"),
        },
    ],
    all_clear: "No major SEO issues",
};

pub(crate) const CONTENT_RULES: CategoryRules = CategoryRules {
    rules: &[
        IssueRule {
            audit: "meta-description",
            threshold: 1.0,
            severity: Severity::Info,
            text: IssueText::Fixed("Meta description could be improved"),
        },
        IssueRule {
            audit: "document-title",
            threshold: 1.0,
            severity: Severity::Warning,
            text: IssueText::Fixed("Page title could be optimized"),
        },
    ],
    all_clear: "Content quality is good",
};

pub(crate) const ACCESSIBILITY_RULES: CategoryRules = CategoryRules {
    rules: &[
        IssueRule {
            audit: "color-contrast",
            threshold: 1.0,
            severity: Severity::Warning,
            text: IssueText::Fixed("Low color contrast detected"),
        },
        IssueRule {
            audit: "image-alt",
            threshold: 1.0,
            severity: Severity::Warning,
            text: IssueText::Fixed("Missing alt text on images"),
        },
    ],
    all_clear: "No major accessibility issues",
};

// TODO: back this with real audits once the engine integration exposes
// security checks; until then the category always reports clean.
pub(crate) const SECURITY_RULES: CategoryRules = CategoryRules {
    rules: &[],
    all_clear: "No security vulnerabilities detected",
};

pub(crate) const MOBILE_RULES: CategoryRules = CategoryRules {
    rules: &[
        IssueRule {
            audit: "viewport",
            threshold: 1.0,
            severity: Severity::Critical,
            text: IssueText::Fixed("Viewport not properly configured"),
        },
        IssueRule {
            audit: "tap-targets",
            threshold: 0.9,
            severity: Severity::Warning,
            text: IssueText::Fixed("Tap targets too small for mobile"),
        },
    ],
    all_clear: "Mobile-friendly design",
};

pub(crate) fn extract_issues(
    rules: &CategoryRules,
    raw: &RawAuditResult,
) -> Result<Vec<Issue>, AnalysisError> {
    let mut issues = Vec::new();
    for rule in rules.rules {
        let record = raw.audit(rule.audit)?;
        if record.score.unwrap_or(0.0) < rule.threshold {
            issues.push(Issue {
                message: rule.text.render(record),
                severity: rule.severity,
            });
        }
    }
    if issues.is_empty() {
        issues.push(Issue {
            message: rules.all_clear.to_string(),
            severity: Severity::Success,
        });
    }
    Ok(issues)
}
