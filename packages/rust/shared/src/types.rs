//! Form types: what the user fills in before generating `config.yml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RecipeBookError, Result};

/// Default category id shown in a fresh form.
pub const DEFAULT_CATEGORY_ID: &str = "main";

// ---------------------------------------------------------------------------
// CategoryInput
// ---------------------------------------------------------------------------

/// One user-defined category as entered in the form.
///
/// None of the fields are validated. Empty strings, whitespace-only item
/// lists and repeated names are all accepted and passed through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    /// Display label, also used as the category key.
    #[serde(default)]
    pub name: String,
    /// Item token for the category icon (e.g. `golden_hoe`).
    #[serde(default)]
    pub icon: String,
    /// Raw multi-line text, one item reference per line.
    #[serde(default)]
    pub items: String,
}

impl CategoryInput {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, items: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            items: items.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// GeneratorForm
// ---------------------------------------------------------------------------

/// The whole generator form: default category plus every category block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorForm {
    /// Category id the plugin opens first.
    #[serde(default = "default_category_id")]
    pub default_category: String,

    /// Category blocks, in the order they appear on the form.
    #[serde(default)]
    pub categories: Vec<CategoryInput>,
}

/// A fresh form starts with one empty category block.
impl Default for GeneratorForm {
    fn default() -> Self {
        Self {
            default_category: default_category_id(),
            categories: vec![CategoryInput::default()],
        }
    }
}

fn default_category_id() -> String {
    DEFAULT_CATEGORY_ID.into()
}

/// Supported on-disk form formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFormat {
    Toml,
    Json,
}

impl FormFormat {
    /// Pick a format from a file extension (`.toml`, `.json`).
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(RecipeBookError::validation(format!(
                "unsupported form file '{}': expected a .toml or .json extension",
                path.display()
            ))),
        }
    }
}

impl GeneratorForm {
    /// Parse a form from text in the given format.
    pub fn parse(content: &str, format: FormFormat) -> Result<Self> {
        match format {
            FormFormat::Toml => {
                toml::from_str(content).map_err(|e| RecipeBookError::parse(e.to_string()))
            }
            FormFormat::Json => {
                serde_json::from_str(content).map_err(|e| RecipeBookError::parse(e.to_string()))
            }
        }
    }

    /// Render the form as TOML (used for starter forms).
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| RecipeBookError::Serialize(e.to_string()))
    }
}

/// Load a form file, choosing the parser by extension.
pub fn load_form(path: &Path) -> Result<GeneratorForm> {
    let format = FormFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| RecipeBookError::io(path, e))?;

    let form = GeneratorForm::parse(&content, format).map_err(|e| match e {
        RecipeBookError::Parse { message } => {
            RecipeBookError::parse(format!("failed to parse {}: {message}", path.display()))
        }
        other => other,
    })?;

    tracing::debug!(
        ?path,
        categories = form.categories.len(),
        "loaded generator form"
    );
    Ok(form)
}
