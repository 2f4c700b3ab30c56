use anyhow::Context;
use clap::{Parser, Subcommand};
use newsweight::application::pipeline::{SentimentPipeline, ensure_known_ticker, normalize_ticker};
use newsweight::config::{Config, SourceKind};
use newsweight::infrastructure::news::SnapshotStore;
use newsweight::infrastructure::symbols::load_symbols;
use newsweight::infrastructure::{CsvExporter, ServiceFactory};
use newsweight::interfaces::console::{render_article_table, render_tally_chart};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Recency-weighted news sentiment for a stock ticker",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch headlines for a ticker and print the weighted sentiment breakdown
    Analyze {
        /// Ticker symbol (overrides TICKER)
        #[arg(short, long)]
        ticker: Option<String>,

        /// Article source: rss, snapshot or mock (overrides NEWS_SOURCE)
        #[arg(short, long)]
        source: Option<String>,

        /// Snapshot file to replay when the source is "snapshot"
        #[arg(long)]
        snapshot_path: Option<PathBuf>,

        /// Decay rate per day (overrides DECAY_LAMBDA)
        #[arg(short, long)]
        lambda: Option<f64>,

        /// Directory for the CSV export (overrides OUTPUT_DIR)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Skip the CSV export
        #[arg(long)]
        no_csv: bool,

        /// Do not save fetched articles as a JSON snapshot
        #[arg(long)]
        no_snapshot: bool,

        /// Print the full report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// List the symbols from the symbols file
    Symbols {
        /// Symbols file, one ticker per line (overrides SYMBOLS_FILE)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env().context("Failed to load config")?;

    if let Err(e) = run(cli.command, &mut config).await {
        error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}

/// `RUST_LOG` directives when set and valid, `info` otherwise.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

async fn run(command: Commands, config: &mut Config) -> anyhow::Result<()> {
    match command {
        Commands::Analyze {
            ticker,
            source,
            snapshot_path,
            lambda,
            output_dir,
            no_csv,
            no_snapshot,
            json,
        } => {
            if let Some(ticker) = ticker {
                config.ticker = ticker;
            }
            if let Some(source) = source {
                config.news_source = SourceKind::from_str(&source)?;
            }
            if snapshot_path.is_some() {
                config.snapshot_path = snapshot_path;
            }
            if let Some(lambda) = lambda {
                config.decay_lambda = lambda;
            }
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            config.csv_export_enabled &= !no_csv;
            // Replaying a snapshot never writes a new one
            config.snapshot_enabled &= !no_snapshot && config.news_source != SourceKind::Snapshot;

            analyze(config, json).await
        }
        Commands::Symbols { file } => {
            let path = file
                .or_else(|| config.symbols_file.clone())
                .context("No symbols file given (use --file or SYMBOLS_FILE)")?;
            for symbol in load_symbols(&path)? {
                println!("{}", symbol);
            }
            Ok(())
        }
    }
}

async fn analyze(config: &Config, json: bool) -> anyhow::Result<()> {
    let ticker = normalize_ticker(&config.ticker)?;
    if let Some(path) = &config.symbols_file {
        ensure_known_ticker(&ticker, &load_symbols(path)?)?;
    }

    let mut pipeline = SentimentPipeline::new(
        ServiceFactory::create_source(config)?,
        ServiceFactory::create_scorer(config),
        config.decay_model()?,
    );
    if config.snapshot_enabled {
        pipeline = pipeline.with_snapshot(SnapshotStore::new(&config.snapshot_dir));
    }

    let report = pipeline.run(&ticker).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.aggregation.is_empty() {
        println!(
            "No news found for {} ({} skipped).",
            report.ticker,
            report.aggregation.skipped.len()
        );
    } else {
        println!(
            "Analysis complete for {}. {} articles analyzed, {} skipped.\n",
            report.ticker,
            report.aggregation.articles.len(),
            report.aggregation.skipped.len()
        );
        println!("{}", render_article_table(&report.aggregation.articles));
        println!("{}", render_tally_chart(&report.aggregation.tally));
        if let Some(class) = report.aggregation.tally.dominant() {
            println!(
                "Dominant sentiment: {} (half-life {:.1} days)",
                class,
                config.decay_model()?.half_life_days()
            );
        }
    }

    if config.csv_export_enabled && !report.aggregation.is_empty() {
        let path = CsvExporter::export_to_dir(
            &config.output_dir,
            &report.ticker,
            &report.aggregation.articles,
        )?;
        info!("CSV written to {}", path.display());
    }

    Ok(())
}
