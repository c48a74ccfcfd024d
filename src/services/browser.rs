use crate::config::Config;
use crate::error::AnalysisError;
use log::warn;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::{Child, Command};
use uuid::Uuid;

// A live browser usable by the audit engine. Handles are acquired and
// released through a BrowserManager; release consumes the handle, so a
// second release does not typecheck.
pub trait BrowserHandle {
    fn port(&self) -> u16;
}

pub trait BrowserManager {
    type Handle: BrowserHandle;

    async fn acquire(&self) -> Result<Self::Handle, AnalysisError>;
    async fn release(&self, handle: Self::Handle);
}

pub struct ChromeHandle {
    child: Child,
    port: u16,
}

impl BrowserHandle for ChromeHandle {
    fn port(&self) -> u16 {
        self.port
    }
}

// Launches one isolated headless Chrome per analysis request.
pub struct ChromeLauncher {
    chrome_path: String,
    http: reqwest::Client,
}

impl ChromeLauncher {
    pub fn new(config: &Config) -> Self {
        Self {
            chrome_path: config.chrome_path.clone(),
            http: reqwest::Client::new(),
        }
    }

    // Chrome opens the devtools socket a moment after the process starts;
    // poll /json/version until it answers or the retries run out.
    async fn wait_for_devtools(&self, port: u16) -> Result<(), AnalysisError> {
        let endpoint = format!("http://127.0.0.1:{}/json/version", port);
        for _ in 0..40 {
            match self.http.get(&endpoint).send().await {
                Ok(response) if response.status().is_success() => return Ok(()),
                _ => tokio::time::sleep(Duration::from_millis(250)).await,
            }
        }
        Err(AnalysisError::Acquisition(format!(
            "chrome did not expose devtools on port {} in time",
            port
        )))
    }
}

impl BrowserManager for ChromeLauncher {
    type Handle = ChromeHandle;

    async fn acquire(&self) -> Result<ChromeHandle, AnalysisError> {
        let port = free_port()
            .map_err(|e| AnalysisError::Acquisition(format!("no free port for chrome: {}", e)))?;
        let profile_dir = std::env::temp_dir().join(format!("sitepulse-chrome-{}", Uuid::new_v4()));

        let mut child = Command::new(&self.chrome_path)
            .arg("--headless")
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg(format!("--remote-debugging-port={}", port))
            .arg(format!("--user-data-dir={}", profile_dir.display()))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                AnalysisError::Acquisition(format!(
                    "failed to spawn chrome at `{}`: {}",
                    self.chrome_path, e
                ))
            })?;

        if let Err(err) = self.wait_for_devtools(port).await {
            // The handle never escapes a failed acquisition, so the child
            // is reaped here rather than through release.
            let _ = child.kill().await;
            return Err(err);
        }

        Ok(ChromeHandle { child, port })
    }

    async fn release(&self, mut handle: ChromeHandle) {
        if let Err(err) = handle.child.kill().await {
            warn!("failed to kill chrome on port {}: {}", handle.port, err);
        }
    }
}

fn free_port() -> std::io::Result<u16> {
    // Bind port 0 and let the OS pick; the listener drops before chrome
    // starts, which is a small race but the same one chrome-launcher takes.
    let listener = std::net::TcpListener::bind(("127.0.0.1", 0))?;
    Ok(listener.local_addr()?.port())
}
