use crate::config::Config;
use crate::error::AnalysisError;
use crate::models::RawAuditResult;
use std::process::Stdio;
use tokio::process::Command;

// The five categories requested from the engine on every run.
pub const AUDIT_CATEGORIES: [&str; 5] = [
    "performance",
    "seo",
    "accessibility",
    "best-practices",
    "pwa",
];

pub trait AuditEngine {
    async fn run(
        &self,
        url: &str,
        port: u16,
        categories: &[&str],
    ) -> Result<RawAuditResult, AnalysisError>;
}

// Runs the Lighthouse CLI against an already-launched Chrome and parses
// the JSON report it writes to stdout.
pub struct LighthouseCli {
    bin: String,
    max_wait_for_load_ms: u32,
}

impl LighthouseCli {
    pub fn new(config: &Config) -> Self {
        Self {
            bin: config.lighthouse_bin.clone(),
            max_wait_for_load_ms: config.max_wait_for_load_ms,
        }
    }
}

impl AuditEngine for LighthouseCli {
    async fn run(
        &self,
        url: &str,
        port: u16,
        categories: &[&str],
    ) -> Result<RawAuditResult, AnalysisError> {
        let output = Command::new(&self.bin)
            .arg(url)
            .arg("--output=json")
            .arg("--quiet")
            .arg("--no-enable-error-reporting")
            .arg(format!("--port={}", port))
            .arg(format!("--only-categories={}", categories.join(",")))
            .arg(format!("--max-wait-for-load={}", self.max_wait_for_load_ms))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                AnalysisError::AuditEngine(format!(
                    "failed to spawn lighthouse at `{}`: {}",
                    self.bin, e
                ))
            })?;

        if !output.status.success() {
            return Err(AnalysisError::AuditEngine(format!(
                "lighthouse failed for {}: {}",
                url,
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        serde_json::from_slice(&output.stdout).map_err(|e| {
            AnalysisError::AuditEngine(format!("malformed lighthouse report: {}", e))
        })
    }
}
