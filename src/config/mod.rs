use clap::Parser;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/* =======================
CLI ARGS
======================= */

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Print a single snapshot and exit
    #[arg(long)]
    pub once: bool,
}

/* =======================
MAIN CONFIG
======================= */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub display: DisplayConfig,
    pub catalog: CatalogConfig,
}

/* =======================
DISPLAY CONFIG
======================= */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub refresh_interval_ms: u64,

    // shown instead of a countdown once an auction has ended
    pub placeholder: String,
}

/* =======================
CATALOG CONFIG
======================= */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub auctions_path: PathBuf,
}

/* =======================
DEFAULT CONFIG
======================= */

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig {
                refresh_interval_ms: 1000,
                placeholder: "انتهى".to_string(),
            },
            catalog: CatalogConfig {
                auctions_path: PathBuf::from("auctions.json"),
            },
        }
    }
}

/* =======================
LOAD / CREATE CONFIG
======================= */

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut cfg = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            let cfg = Config::default();
            let content = serde_json::to_string_pretty(&cfg)?;
            std::fs::write(path, content)?;
            cfg
        };

        cfg.apply_env_overrides()?;
        Ok(cfg)
    }

    /// `REFRESH_INTERVAL_MS`, `COUNTDOWN_PLACEHOLDER` and `AUCTIONS_PATH`
    /// take precedence over the file.
    pub fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(raw) = lookup("REFRESH_INTERVAL_MS") {
            self.display.refresh_interval_ms = raw
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid REFRESH_INTERVAL_MS {:?}: {}", raw, e))?;
        }
        if let Some(placeholder) = lookup("COUNTDOWN_PLACEHOLDER") {
            self.display.placeholder = placeholder;
        }
        if let Some(path) = lookup("AUCTIONS_PATH") {
            self.catalog.auctions_path = PathBuf::from(path);
        }

        if self.display.refresh_interval_ms == 0 {
            anyhow::bail!("refresh_interval_ms must be greater than zero");
        }

        Ok(())
    }
}
