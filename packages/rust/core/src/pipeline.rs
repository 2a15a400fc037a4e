//! End-to-end `generate` pipeline: form → document → YAML → `config.yml`.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use recipebook_shared::{GeneratorForm, OUTPUT_FILE_NAME, RecipeBookError, Result};

use crate::builder;
use crate::document::ConfigDocument;

/// Where the rendered YAML goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Write to a file. A directory target gets `config.yml` inside it.
    File {
        path: PathBuf,
        /// Replace an existing file.
        overwrite: bool,
    },
    /// Return the text only; the caller prints it.
    Text,
}

/// Input for the `generate` pipeline.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub form: GeneratorForm,
    pub delivery: Delivery,
}

/// Result of the `generate` pipeline.
#[derive(Debug)]
pub struct GenerateReport {
    /// The rendered document.
    pub yaml: String,
    /// File written, if any.
    pub written_to: Option<PathBuf>,
    /// Number of item categories emitted.
    pub category_count: usize,
    /// Category names used more than once.
    pub duplicate_names: Vec<String>,
}

/// Render a document as YAML text.
pub fn render_yaml(document: &ConfigDocument) -> Result<String> {
    serde_yaml::to_string(document).map_err(|e| RecipeBookError::Serialize(e.to_string()))
}

/// Resolve the final output path: directories get `config.yml` appended.
///
/// A path ending in a separator names a directory even if it does not exist
/// yet.
pub fn resolve_output_path(path: &Path) -> PathBuf {
    let names_dir = path
        .as_os_str()
        .to_string_lossy()
        .chars()
        .next_back()
        .is_some_and(std::path::is_separator);

    if names_dir || path.is_dir() {
        path.join(OUTPUT_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

/// Render a document and write it to disk. Returns the path written.
///
/// Refuses to replace an existing file unless `overwrite` is set. Missing
/// parent directories are created.
#[instrument(skip_all, fields(path = %path.display(), overwrite = overwrite))]
pub fn save_config(document: &ConfigDocument, path: &Path, overwrite: bool) -> Result<PathBuf> {
    let yaml = render_yaml(document)?;
    write_yaml(&yaml, path, overwrite)
}

fn write_yaml(yaml: &str, path: &Path, overwrite: bool) -> Result<PathBuf> {
    let target = resolve_output_path(path);

    if target.exists() && !overwrite {
        return Err(RecipeBookError::validation(format!(
            "{} already exists (use --force to replace it)",
            target.display()
        )));
    }

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| RecipeBookError::io(parent, e))?;
    }

    std::fs::write(&target, yaml).map_err(|e| RecipeBookError::io(&target, e))?;
    info!(path = %target.display(), bytes = yaml.len(), "config written");

    Ok(target)
}

/// Run the full `generate` pipeline.
///
/// 1. Build the document from the form
/// 2. Render it as YAML
/// 3. Deliver it (file or text)
#[instrument(skip_all, fields(default_category = %request.form.default_category))]
pub fn generate(request: &GenerateRequest) -> Result<GenerateReport> {
    let form = &request.form;

    let duplicate_names = builder::duplicate_names(&form.default_category, &form.categories);
    if !duplicate_names.is_empty() {
        warn!(
            names = ?duplicate_names,
            "duplicate category names will produce duplicate ids in config.yml"
        );
    }

    let document = builder::build_from_form(form);
    let yaml = render_yaml(&document)?;
    debug!(
        categories = document.item_category_entries.len(),
        bytes = yaml.len(),
        "document rendered"
    );

    let written_to = match &request.delivery {
        Delivery::File { path, overwrite } => Some(write_yaml(&yaml, path, *overwrite)?),
        Delivery::Text => None,
    };

    Ok(GenerateReport {
        yaml,
        written_to,
        category_count: document.item_category_entries.len(),
        duplicate_names,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
