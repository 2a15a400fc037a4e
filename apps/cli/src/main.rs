//! RecipeBook CLI: config generator for the RecipeBook plugin.
//!
//! Collects category definitions from a form file or flags and writes the
//! plugin's `config.yml`.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
