use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CloseoutError, Result};

pub const DEFAULT_COST_RATE: f64 = 1006.51;
pub const DEFAULT_REVENUE_RATE: f64 = 1006.11;

/// Presentation rates for KRW columns. The cost and revenue closings have
/// historically used slightly different rates; they stay independently
/// configurable, and `config show` prints both so the drift is visible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_cost_rate")]
    pub cad_to_krw_cost: f64,
    #[serde(default = "default_revenue_rate")]
    pub cad_to_krw_revenue: f64,
}

fn default_cost_rate() -> f64 {
    DEFAULT_COST_RATE
}

fn default_revenue_rate() -> f64 {
    DEFAULT_REVENUE_RATE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cad_to_krw_cost: DEFAULT_COST_RATE,
            cad_to_krw_revenue: DEFAULT_REVENUE_RATE,
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("closeout")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| CloseoutError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), content)?;
    Ok(())
}
