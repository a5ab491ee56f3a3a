use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cli_categories::config;
use cli_categories::CategoryReport;
use tracing::info;

/// Print how a command tree groups its subcommands and flags.
#[derive(Debug, Parser)]
#[command(name = "cli-categories", version)]
struct Cli {
    /// Definition file (defaults to ~/.config/cli-categories.json)
    #[arg(short, long)]
    definition: Option<PathBuf>,

    /// Print compact JSON instead of pretty JSON
    #[arg(long)]
    compact: bool,

    /// Subcommand path to report on, e.g. `remote add`
    path: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let definition = match &cli.definition {
        Some(path) => config::load_definition(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => config::load_default_definition().context("loading default definition")?,
    };
    let root = definition.into_command();

    let path: Vec<&str> = cli.path.iter().map(String::as_str).collect();
    let command = root
        .resolve(&path)
        .with_context(|| format!("no command at path `{}`", cli.path.join(" ")))?;
    info!(command = %command.name, "reporting categories");

    let report = CategoryReport::for_command(command);
    let output = if cli.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{output}");

    Ok(())
}
