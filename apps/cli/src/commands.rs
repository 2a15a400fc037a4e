//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use recipebook_core::pipeline::{self, Delivery, GenerateRequest};
use recipebook_shared::{
    AppConfig, CategoryInput, GeneratorForm, init_config, load_config, load_form,
};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// RecipeBook: generate the plugin's config.yml from category definitions.
#[derive(Parser)]
#[command(
    name = "recipebook",
    version,
    about = "Generate a RecipeBook plugin config.yml from category definitions.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Build config.yml from a form file and/or category flags.
    Generate(GenerateArgs),

    /// Print (or write) a starter form to fill in.
    Form {
        /// Write the form to this file instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for `generate`.
#[derive(clap::Args, Debug)]
pub(crate) struct GenerateArgs {
    /// Form file (.toml or .json) with the default category and categories.
    #[arg(short, long)]
    pub form: Option<PathBuf>,

    /// Default category id (overrides the form and config).
    #[arg(short, long)]
    pub default_category: Option<String>,

    /// Extra category as NAME=ICON; appended after the form's categories.
    #[arg(short, long = "category", value_name = "NAME=ICON", value_parser = parse_category_flag)]
    pub categories: Vec<CategoryFlag>,

    /// Items file for the matching --category (by position), one item per line.
    #[arg(long, value_name = "PATH")]
    pub items_from: Vec<PathBuf>,

    /// Output file or directory (defaults to the configured output file).
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the YAML to stdout instead of writing a file.
    #[arg(long, conflicts_with = "out")]
    pub stdout: bool,

    /// Replace an existing output file.
    #[arg(long)]
    pub force: bool,
}

/// A `--category NAME=ICON` flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CategoryFlag {
    pub name: String,
    pub icon: String,
}

/// Parse `NAME=ICON`. A missing `=` means an empty icon.
fn parse_category_flag(raw: &str) -> std::result::Result<CategoryFlag, String> {
    let (name, icon) = raw.split_once('=').unwrap_or((raw, ""));
    Ok(CategoryFlag {
        name: name.to_string(),
        icon: icon.to_string(),
    })
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
///
/// Logs go to stderr so `generate --stdout` output stays clean.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "recipebook=info,recipebook_core=info,recipebook_shared=info",
        1 => "recipebook=debug,recipebook_core=debug,recipebook_shared=debug",
        _ => "recipebook=trace,recipebook_core=trace,recipebook_shared=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => cmd_generate(&args),
        Command::Form { out } => cmd_form(out.as_deref()),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_generate(args: &GenerateArgs) -> Result<()> {
    let config = load_config()?;
    let form = resolve_form(args, &config)?;

    let delivery = resolve_delivery(args, &config);

    info!(
        default_category = %form.default_category,
        categories = form.categories.len(),
        "generating config"
    );

    let report = pipeline::generate(&GenerateRequest { form, delivery })?;

    match &report.written_to {
        Some(path) => {
            println!();
            println!("  Config generated!");
            println!("  Categories: {}", report.category_count);
            if !report.duplicate_names.is_empty() {
                println!("  Duplicates: {}", report.duplicate_names.join(", "));
            }
            println!("  Path:       {}", path.display());
            println!();
        }
        None => print!("{}", report.yaml),
    }

    Ok(())
}

/// Merge the form file, category flags and config into one form.
///
/// Precedence for the default category: flag, then form file, then config.
fn resolve_form(args: &GenerateArgs, config: &AppConfig) -> Result<GeneratorForm> {
    if args.items_from.len() > args.categories.len() {
        return Err(eyre!(
            "got {} --items-from files for {} --category flags; each items file needs a category",
            args.items_from.len(),
            args.categories.len()
        ));
    }

    let mut form = match &args.form {
        Some(path) => load_form(path)?,
        None => GeneratorForm {
            default_category: config.defaults.default_category.clone(),
            categories: Vec::new(),
        },
    };

    for (i, flag) in args.categories.iter().enumerate() {
        let items = match args.items_from.get(i) {
            Some(path) => read_items(path)?,
            None => String::new(),
        };
        form.categories
            .push(CategoryInput::new(flag.name.clone(), flag.icon.clone(), items));
    }

    if let Some(id) = &args.default_category {
        form.default_category = id.clone();
    }

    Ok(form)
}

/// Pick where the YAML goes: `--stdout`, else `--out`, else the configured
/// output file. `--force` or `defaults.overwrite` allows replacing it.
fn resolve_delivery(args: &GenerateArgs, config: &AppConfig) -> Delivery {
    if args.stdout {
        return Delivery::Text;
    }

    let path = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.defaults.output_file));
    Delivery::File {
        path,
        overwrite: args.force || config.defaults.overwrite,
    }
}

fn read_items(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| eyre!("cannot read items file '{}': {e}", path.display()))
}

fn cmd_form(out: Option<&Path>) -> Result<()> {
    let text = GeneratorForm::default().to_toml()?;

    match out {
        Some(path) => {
            if path.exists() {
                return Err(eyre!("'{}' already exists", path.display()));
            }
            std::fs::write(path, text)
                .map_err(|e| eyre!("cannot write form file '{}': {e}", path.display()))?;
            println!("Starter form written to: {}", path.display());
        }
        None => print!("{text}"),
    }

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> GenerateArgs {
        let mut argv = vec!["recipebook", "generate"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).expect("parse args").command {
            Command::Generate(args) => args,
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn category_flag_parsing() {
        assert_eq!(
            parse_category_flag("Farming=golden_hoe").unwrap(),
            CategoryFlag {
                name: "Farming".into(),
                icon: "golden_hoe".into()
            }
        );
        let bare = parse_category_flag("Mining").unwrap();
        assert_eq!((bare.name.as_str(), bare.icon.as_str()), ("Mining", ""));
        // Only the first '=' splits.
        let eq = parse_category_flag("A=b=c").unwrap();
        assert_eq!(eq.icon, "b=c");
    }

    #[test]
    fn flags_build_form_without_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let items = dir.path().join("farming.txt");
        std::fs::write(&items, "ecoitems:enchanted_carrot\necoitems:enchanted_wheat\n")
            .expect("write");

        let args = args(&[
            "-c",
            "Farming=golden_hoe",
            "--items-from",
            items.to_str().unwrap(),
            "-c",
            "Mining=diamond_pickaxe",
        ]);
        let form = resolve_form(&args, &AppConfig::default()).expect("resolve");

        assert_eq!(form.default_category, "main");
        assert_eq!(form.categories.len(), 2);
        assert_eq!(
            form.categories[0].items,
            "ecoitems:enchanted_carrot\necoitems:enchanted_wheat\n"
        );
        assert_eq!(form.categories[1].items, "");
    }

    #[test]
    fn default_category_flag_wins() {
        let mut config = AppConfig::default();
        config.defaults.default_category = "from-config".into();

        let form = resolve_form(&args(&["-d", "lobby"]), &config).expect("resolve");
        assert_eq!(form.default_category, "lobby");

        let form = resolve_form(&args(&[]), &config).expect("resolve");
        assert_eq!(form.default_category, "from-config");
        assert!(form.categories.is_empty());
    }

    #[test]
    fn form_file_then_flags() {
        let args = args(&[
            "--form",
            "../../fixtures/forms/farming.toml",
            "-c",
            "Combat=iron_sword",
        ]);
        let form = resolve_form(&args, &AppConfig::default()).expect("resolve");
        let names: Vec<&str> = form.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Farming", "Mining", "Combat"]);
    }

    #[test]
    fn extra_items_files_are_rejected() {
        let args = args(&["--items-from", "a.txt"]);
        assert!(resolve_form(&args, &AppConfig::default()).is_err());
    }

    #[test]
    fn delivery_defaults_to_configured_output_file() {
        let mut config = AppConfig::default();
        config.defaults.output_file = "plugins/RecipeBook/config.yml".into();

        assert_eq!(
            resolve_delivery(&args(&[]), &config),
            Delivery::File {
                path: PathBuf::from("plugins/RecipeBook/config.yml"),
                overwrite: false,
            }
        );
    }

    #[test]
    fn out_flag_beats_configured_output_file() {
        let mut config = AppConfig::default();
        config.defaults.output_file = "from-config.yml".into();

        assert_eq!(
            resolve_delivery(&args(&["--out", "build/config.yml", "--force"]), &config),
            Delivery::File {
                path: PathBuf::from("build/config.yml"),
                overwrite: true,
            }
        );
    }

    #[test]
    fn configured_overwrite_applies_without_force() {
        let mut config = AppConfig::default();
        config.defaults.overwrite = true;

        let Delivery::File { overwrite, .. } = resolve_delivery(&args(&[]), &config) else {
            panic!("expected file delivery");
        };
        assert!(overwrite);

        let Delivery::File { overwrite, .. } =
            resolve_delivery(&args(&[]), &AppConfig::default())
        else {
            panic!("expected file delivery");
        };
        assert!(!overwrite);
    }

    #[test]
    fn stdout_flag_selects_text_delivery() {
        let mut config = AppConfig::default();
        config.defaults.overwrite = true;
        assert_eq!(resolve_delivery(&args(&["--stdout"]), &config), Delivery::Text);
    }

    #[test]
    fn form_write_error_names_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing-dir").join("form.toml");

        let err = cmd_form(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("form.toml"));
    }

    #[test]
    fn stdout_conflicts_with_out() {
        let parsed = Cli::try_parse_from(["recipebook", "generate", "--stdout", "--out", "x.yml"]);
        assert!(parsed.is_err());
    }
}
