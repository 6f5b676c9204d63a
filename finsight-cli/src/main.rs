use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use finsight_analysis::Analysis;
use finsight_ingest::{
    DatePolicy, NormalizeOptions, Normalized, normalize_with, read_rows, read_rows_from,
};
use std::path::{Path, PathBuf};
use tracing::warn;

mod config;
mod logging;
mod report;
mod state;

use config::Config;
use report::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "finsight",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("FINSIGHT_BUILD_SHA"), ")"),
    about = "Summarize bank-statement CSV exports"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Income, expenses, savings and category breakdown for a statement
    Analyze {
        /// Statement CSV (date, description, amount, category); "-" reads stdin
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Output format (default from config: text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Drop rows whose date cannot be parsed
        #[arg(long)]
        strict_dates: bool,
    },

    /// Print the normalized transactions as JSON
    Normalize {
        #[arg(long)]
        csv: Option<PathBuf>,

        #[arg(long)]
        strict_dates: bool,
    },

    /// Manage ~/.finsight/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    logging::setup_logging(&cfg.log.level);

    match cli.command {
        Command::Analyze {
            csv,
            format,
            strict_dates,
        } => {
            let normalized = load(&cfg, csv, strict_dates)?;
            let analysis = Analysis::compute(&normalized.transactions);

            let output = match format.unwrap_or(cfg.report.format) {
                OutputFormat::Text => {
                    report::render_text(&analysis, normalized.dropped(), &cfg.report)?
                }
                OutputFormat::Json => report::render_json(&analysis, normalized.dropped())?,
            };
            println!("{}", output);
        }

        Command::Normalize { csv, strict_dates } => {
            let normalized = load(&cfg, csv, strict_dates)?;
            let json = serde_json::to_string_pretty(&normalized)
                .context("serialize transactions")?;
            println!("{}", json);
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => print!("{}", config::show_config(&cfg)?),
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
        },
    }

    Ok(())
}

fn load(cfg: &Config, csv: Option<PathBuf>, strict_dates: bool) -> Result<Normalized> {
    let csv_path = csv.unwrap_or_else(|| cfg.import.default_csv.clone());
    let options = NormalizeOptions {
        date_policy: if strict_dates {
            DatePolicy::Drop
        } else {
            cfg.import.date_policy
        },
    };

    let rows = read_statement_rows(&csv_path)?;
    let normalized = normalize_with(&rows, &options);
    if normalized.dropped() > 0 {
        warn!(
            skipped = normalized.dropped(),
            path = %csv_path.display(),
            "some statement rows were skipped"
        );
    }
    Ok(normalized)
}

fn read_statement_rows(csv_path: &Path) -> Result<Vec<Vec<String>>> {
    if csv_path == Path::new("-") {
        return read_rows_from(std::io::stdin().lock()).context("reading statement from stdin");
    }
    if !csv_path.exists() {
        bail!("CSV not found: {} (pass --csv <path>)", csv_path.display());
    }
    read_rows(csv_path).with_context(|| format!("parsing {}", csv_path.display()))
}
