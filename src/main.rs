//! Command-line front end: translate sort directives with an `.order-by.json` dictionary.

use std::io::{
    self,
    BufRead,
    Write,
};
use std::path::PathBuf;

use anyhow::{
    Context,
    Result,
};
use clap::Parser;
use order_by_translator::config::ConfigManager;
use tracing_subscriber::EnvFilter;

/// Translate client sort directives into SQL / Cypher `ORDER BY` expressions.
#[derive(Parser, Debug)]
#[command(name = "order-by")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file. Defaults to `.order-by.json` in the current directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cypher variable to prefix destinations with.
    #[arg(long)]
    variable: Option<String>,

    /// Separator between directive fields (used verbatim).
    #[arg(long)]
    source_separator: Option<String>,

    /// Separator between output fragments (used verbatim).
    #[arg(long)]
    target_separator: Option<String>,

    /// Directives to translate. Reads one directive per line from stdin when omitted.
    directives: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut manager = ConfigManager::new();
    match &args.config {
        Some(path) => manager
            .load_settings_file(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => manager
            .load_settings(Some(std::env::current_dir()?))
            .context("loading settings from the current directory")?,
    }

    let mut settings = manager.get_settings().clone();
    if let Some(variable) = args.variable {
        settings.variable = Some(variable);
    }
    if let Some(separator) = args.source_separator {
        settings.source_separator = separator;
    }
    if let Some(separator) = args.target_separator {
        settings.target_separator = separator;
    }
    manager.update_settings(settings).context("applying command-line overrides")?;

    let settings = manager.get_settings();
    let config = settings.to_config();
    tracing::debug!("Translating with {:?}", config);

    let mut out = io::stdout().lock();
    if args.directives.is_empty() {
        for line in io::stdin().lock().lines() {
            writeln!(out, "{}", config.translate(&line?, Some(settings.dictionary())))?;
        }
    } else {
        for directive in &args.directives {
            writeln!(out, "{}", config.translate(directive, Some(settings.dictionary())))?;
        }
    }

    Ok(())
}
