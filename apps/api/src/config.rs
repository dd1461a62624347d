use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::validation::CategoryDefinition;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
    /// JSON file replacing the built-in category vocabulary.
    pub categories_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            cors_allowed_origins: Vec::new(),
            categories_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: match lookup("PORT") {
                Some(v) => v
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            max_upload_bytes: match lookup("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => defaults.max_upload_bytes,
            },
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            categories_path: lookup("ATS_CATEGORIES_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// Category table override from `ATS_CATEGORIES_PATH`, if configured.
    pub fn load_categories(&self) -> Result<Option<Vec<CategoryDefinition>>> {
        let Some(path) = &self.categories_path else {
            return Ok(None);
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read category file '{}'", path.display()))?;
        let categories: Vec<CategoryDefinition> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid category file '{}'", path.display()))?;
        anyhow::ensure!(
            !categories.is_empty(),
            "Category file '{}' defines no categories",
            path.display()
        );
        Ok(Some(categories))
    }
}
