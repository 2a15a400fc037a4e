//! Shared types, error model, and configuration for RecipeBook.
//!
//! This crate is the foundation depended on by the other RecipeBook crates.
//! It provides:
//! - [`RecipeBookError`]: the unified error type
//! - Form types ([`GeneratorForm`], [`CategoryInput`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, OUTPUT_FILE_NAME, config_dir, config_file_path, init_config,
    init_config_in, load_config, load_config_from,
};
pub use error::{RecipeBookError, Result};
pub use types::{CategoryInput, DEFAULT_CATEGORY_ID, FormFormat, GeneratorForm, load_form};
