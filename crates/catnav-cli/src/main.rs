mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::render::{check_config, render_navigation, RenderOptions};

#[derive(Debug, Parser)]
#[command(name = "catnav-cli")]
#[command(about = "Build storefront navigation trees from catalog snapshots")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build the navigation tree for a catalog snapshot and print it as JSON
    Build {
        /// Path to a catalog snapshot (JSON)
        #[arg(long)]
        input: PathBuf,

        /// Requested language; defaults to CATNAV_TARGET_LANG, then the site language
        #[arg(long)]
        lang: Option<String>,

        /// Navigation surface to build for
        #[arg(long, value_enum, default_value_t = VariantArg::Mega)]
        variant: VariantArg,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Load and validate the navigation config file
    CheckConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    Mega,
    Bar,
}

impl From<VariantArg> for catnav_tree::NavVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Mega => catnav_tree::NavVariant::MegaMenu,
            VariantArg::Bar => catnav_tree::NavVariant::NavBar,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = catnav_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, log_level = %config.log_level, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Build {
            input,
            lang,
            variant,
            pretty,
        }) => {
            let options = RenderOptions {
                input,
                lang,
                variant: variant.into(),
                pretty,
            };
            let json = render_navigation(&config, &options)?;
            println!("{json}");
        }
        Some(Commands::CheckConfig) => {
            let summary = check_config(&config)?;
            println!("{summary}");
        }
        None => println!("catnav-cli: run with --help to list commands"),
    }

    Ok(())
}
