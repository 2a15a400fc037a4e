//! Document construction and export for RecipeBook.
//!
//! This crate turns a generator form into the plugin's `config.yml`:
//! [`builder`] assembles the document from the [`gui`] templates,
//! [`pipeline`] renders and saves it.

pub mod builder;
pub mod document;
pub mod gui;
pub mod pipeline;

pub use builder::{build, build_from_form};
pub use document::ConfigDocument;
