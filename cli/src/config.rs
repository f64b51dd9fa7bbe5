use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use metas_core::GoalInput;
use serde::{Deserialize, Serialize};
use tracing::debug;

const CONFIG_DIR_NAME: &str = ".metas";
const CONFIG_FILE_NAME: &str = "config.json";

/// Default form values, read from `~/.metas/config.json` when present.
///
/// Values stay raw strings; the engine does all parsing and validation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub goal: String,
    pub sale_value: String,
    pub time_per_sale: String,
    pub adjustment: String,
    pub start_date: String,
    pub end_date: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            goal: "70000".to_string(),
            sale_value: "250".to_string(),
            time_per_sale: "20".to_string(),
            adjustment: "0".to_string(),
            start_date: "2025-11-01".to_string(),
            end_date: "2026-07-01".to_string(),
        }
    }
}

/// Per-invocation values; `None` means "use the configured default".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub goal: Option<String>,
    pub sale_value: Option<String>,
    pub time_per_sale: Option<String>,
    pub adjustment: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl Settings {
    /// Loads settings from `path`, or from the default location when `path`
    /// is `None`. Only an explicitly requested file has to exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_path()?, false),
        };

        if !path.exists() {
            if required {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
            debug!(path = %path.display(), "no config file, using built-in defaults");
            return Ok(Self::default());
        }

        let file = File::open(&path)
            .with_context(|| format!("Could not open config file {}", path.display()))?;
        let settings = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded config file");
        Ok(settings)
    }

    /// Builds the engine input, letting each override win over the setting.
    pub fn to_input(&self, overrides: Overrides) -> GoalInput {
        GoalInput {
            monthly_goal: overrides.goal.unwrap_or_else(|| self.goal.clone()),
            sale_value: overrides.sale_value.unwrap_or_else(|| self.sale_value.clone()),
            time_per_sale: overrides.time_per_sale.unwrap_or_else(|| self.time_per_sale.clone()),
            adjustment_percent: overrides.adjustment.unwrap_or_else(|| self.adjustment.clone()),
            start_date: overrides.start_date.unwrap_or_else(|| self.start_date.clone()),
            end_date: overrides.end_date.unwrap_or_else(|| self.end_date.clone()),
        }
    }
}

fn default_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
