//! Application configuration for RecipeBook.
//!
//! User config lives at `~/.recipebook/recipebook.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RecipeBookError, Result};
use crate::types::DEFAULT_CATEGORY_ID;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "recipebook.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".recipebook";

/// File name the consuming plugin expects.
pub const OUTPUT_FILE_NAME: &str = "config.yml";

// ---------------------------------------------------------------------------
// Config structs (matching recipebook.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default category id when neither the form nor a flag sets one.
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Where `generate` writes when `--out` is not given.
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Replace an existing output file without `--force`.
    #[serde(default)]
    pub overwrite: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            output_file: default_output_file(),
            overwrite: false,
        }
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY_ID.into()
}
fn default_output_file() -> String {
    OUTPUT_FILE_NAME.into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.recipebook/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| RecipeBookError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.recipebook/recipebook.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| RecipeBookError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        RecipeBookError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    init_config_in(&config_dir()?)
}

/// Write a default config file into `dir`, creating it if needed.
pub fn init_config_in(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| RecipeBookError::io(dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| RecipeBookError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| RecipeBookError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
