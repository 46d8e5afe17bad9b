//! CLI binary for verity.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use verity::{SearchClient, VerityConfig, input};

/// Verity: search-backed evidence retrieval for fact verification.
#[derive(Parser)]
#[command(name = "verity", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// SearXNG base URL (overrides config file and SEARXNG_URL).
    #[arg(long)]
    url: Option<String>,

    /// Records considered per query; each query keeps half as snippets.
    #[arg(short = 'k', long)]
    snippets: Option<usize>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Retrieve snippet groups for a JSON list of query pairs.
    ///
    /// Reads `[["q1a", "q1b"], null, ...]` from FILE, or stdin when absent,
    /// and prints one snippet group per pair as JSON.
    Run {
        /// Input file; stdin when omitted.
        file: Option<PathBuf>,
    },

    /// Search a single query and list the raw results.
    Search {
        /// Query text.
        query: String,
    },

    /// Check that SearXNG is reachable.
    Probe,

    /// Write the effective configuration to the config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match (&cli.command, cli.config.as_deref()) {
        // init-config may target a file that does not exist yet.
        (Command::InitConfig { .. }, Some(path)) if !path.exists() => VerityConfig::default(),
        (_, path) => VerityConfig::load(path)?,
    };
    config.apply_process_env()?;
    if let Some(url) = cli.url.clone() {
        config.search.base_url = url;
    }
    if let Some(k) = cli.snippets {
        config.search.snippet_count = k;
    }

    // Diagnostics go to stderr so stdout stays clean JSON.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    match cli.command {
        Command::Run { file } => run_pairs(&config, file).await,
        Command::Search { query } => search(&config, &query).await,
        Command::Probe => probe(&config).await,
        Command::InitConfig { force } => init_config(&config, cli.config, force),
    }
}

async fn run_pairs(config: &VerityConfig, file: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let pairs = input::parse_query_pairs(&raw)?;

    let groups = verity::retrieve_evidence(config, &pairs).await?;
    println!("{}", input::render_groups(&groups)?);
    Ok(ExitCode::SUCCESS)
}

async fn search(config: &VerityConfig, query: &str) -> anyhow::Result<ExitCode> {
    let client = SearchClient::new(config.search.clone())?;
    let records = client.search_records(query).await?;
    if records.is_empty() {
        println!("No results.");
    }
    for record in &records {
        println!(
            "- {}: {}",
            record.title.as_deref().unwrap_or("(untitled)"),
            record.url.as_deref().unwrap_or("None")
        );
    }
    Ok(ExitCode::SUCCESS)
}

async fn probe(config: &VerityConfig) -> anyhow::Result<ExitCode> {
    let client = SearchClient::new(config.search.clone())?;
    let report = client.probe().await;
    if report.reachable {
        println!("SearXNG is running at {}", report.base_url);
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "Cannot connect to SearXNG at {}: {}",
            report.base_url,
            report.warning.as_deref().unwrap_or("unknown error")
        );
        Ok(ExitCode::FAILURE)
    }
}

fn init_config(
    config: &VerityConfig,
    path: Option<PathBuf>,
    force: bool,
) -> anyhow::Result<ExitCode> {
    let path = path.unwrap_or_else(VerityConfig::default_config_path);
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    config.validate()?;
    config.save_to_file(&path)?;
    println!("Wrote {}", path.display());
    Ok(ExitCode::SUCCESS)
}
