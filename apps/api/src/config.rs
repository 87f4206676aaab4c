use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_MB: u64 = 10;

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service boots with no environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upload ceiling in bytes (MAX_UPLOAD_MB, default 10).
    pub max_upload_bytes: u64,
    /// Optional newline-separated skill vocabulary override.
    pub skill_vocab_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_upload_mb = match std::env::var("MAX_UPLOAD_MB") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("MAX_UPLOAD_MB must be a number of megabytes")?,
            Err(_) => DEFAULT_MAX_UPLOAD_MB,
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            skill_vocab_file: std::env::var("SKILL_VOCAB_FILE").ok().map(PathBuf::from),
        })
    }
}
