use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub chrome_path: String,
    pub lighthouse_bin: String,
    pub public_dir: String,
    pub max_wait_for_load_ms: u32,
}

impl Config {
    // Environment wins over defaults; `.env` is loaded by main before this
    // runs. Malformed numbers fail startup instead of being papered over.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(value) => value.parse().context("PORT must be a valid port number")?,
            Err(_) => 3000,
        };
        let max_wait_for_load_ms = match env::var("MAX_WAIT_FOR_LOAD_MS") {
            Ok(value) => value
                .parse()
                .context("MAX_WAIT_FOR_LOAD_MS must be a number of milliseconds")?,
            Err(_) => 120_000,
        };

        Ok(Self {
            port,
            chrome_path: env::var("CHROME_PATH").unwrap_or_else(|_| "google-chrome".to_string()),
            lighthouse_bin: env::var("LIGHTHOUSE_BIN").unwrap_or_else(|_| "lighthouse".to_string()),
            public_dir: env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
            max_wait_for_load_ms,
        })
    }
}
