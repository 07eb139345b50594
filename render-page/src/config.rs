use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "BARBOT_CONFIG";

/// Settings for the generated landing page document.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Document `<title>`
    pub title: String,
    pub lang: String,
    /// Optional stylesheet href linked from `<head>`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<String>,
    pub output: PathBuf,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "BarBot".to_string(),
            lang: "en".to_string(),
            stylesheet: None,
            output: PathBuf::from("dist/index.html"),
        }
    }
}

/// Load the page config from `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<PageConfig> {
    let Some(path) = path else {
        return Ok(PageConfig::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    parse_config(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
}

pub fn parse_config(content: &str) -> Result<PageConfig> {
    Ok(toml::from_str(content)?)
}

/// Config path from the command line, else from the environment.
pub fn resolve_config_path(cli_path: Option<PathBuf>) -> Option<PathBuf> {
    cli_path.or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}
