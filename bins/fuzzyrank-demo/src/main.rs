//! fuzzyrank: score strings and rank candidates from the command line.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use fuzzyrank::{ExtractedResult, Extractor, MatchConfig, Score, Strategy};
use owo_colors::OwoColorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "fuzzyrank")]
#[command(about = "Fuzzy string scoring and ranking")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to .fuzzyrank.toml or fuzzyrank.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every strategy over a set of sample pairs
    Demo,
    /// Score two strings
    Score {
        /// First string
        a: String,
        /// Second string
        b: String,
        /// Strategy to use (all strategies when omitted)
        #[arg(short, long)]
        strategy: Option<Strategy>,
    },
    /// Rank candidates against a query
    Rank {
        /// Search query
        query: String,
        /// Candidate strings
        candidates: Vec<String>,
        /// Read additional candidates from a file, one per line
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Scoring strategy
        #[arg(short, long)]
        strategy: Option<Strategy>,
        /// Return only the best N results (at least 1)
        #[arg(
            short = 'n',
            long,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        limit: Option<usize>,
        /// Minimum score (0-100)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        cutoff: Option<u8>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

const SAMPLE_PAIRS: [(&str, &str); 6] = [
    ("mysmilarstring", "mysimilarstring"),
    ("mysmilarstring", "myawfullysimilarstirng"),
    ("similar", "somewhresimlrbetweenthisstring"),
    ("order words out of", "words out of order"),
    ("fuzzy was a bear", "fuzzy fuzzy fuzzy bear"),
    (
        "The quick brown fox jimps ofver the small lazy dog",
        "the quick brown fox jumps over the small lazy dog",
    ),
];

const SAMPLE_CHOICES: [&str; 8] = [
    "google",
    "bing",
    "facebook",
    "linkedin",
    "twitter",
    "googleplus",
    "bingnews",
    "plexoogl",
];

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = MatchConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Demo => run_demo(&config),
        Commands::Score { a, b, strategy } => run_score(&config, &a, &b, strategy),
        Commands::Rank {
            query,
            candidates,
            file,
            strategy,
            limit,
            cutoff,
            json,
        } => {
            let mut config = config;
            if let Some(cutoff) = cutoff {
                config.cutoff = cutoff;
            }
            if limit.is_some() {
                config.limit = limit;
            }
            if let Some(strategy) = strategy {
                config.strategy = strategy;
            }
            let candidates = collect_candidates(candidates, file.as_deref())?;
            run_rank(&config, &query, &candidates, json)
        }
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "fuzzyrank=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))
}

fn run_demo(config: &MatchConfig) -> anyhow::Result<()> {
    for (a, b) in SAMPLE_PAIRS {
        println!();
        println!("{}", format!("{a:?} vs {b:?}").bold());
        for strategy in Strategy::ALL {
            let score = score_pair(config, strategy, a, b);
            println!("  {:<20} {}", strategy.name(), paint(score));
        }
    }

    let extractor = Extractor::from_config(config)?;
    let query = "goolge";

    println!();
    println!("{}", format!("Extracting {query:?} from {SAMPLE_CHOICES:?}").bold());

    let best = extractor.extract_one(query, &SAMPLE_CHOICES, config.strategy)?;
    println!("  best    {best}");

    println!("  top 3");
    for result in extractor.extract_top(query, &SAMPLE_CHOICES, config.strategy, 3) {
        println!("          {result}");
    }

    println!("  sorted");
    for result in extractor.extract_sorted(query, &SAMPLE_CHOICES, config.strategy) {
        println!("          {result}");
    }

    Ok(())
}

fn run_score(
    config: &MatchConfig,
    a: &str,
    b: &str,
    strategy: Option<Strategy>,
) -> anyhow::Result<()> {
    match strategy {
        Some(strategy) => println!("{}", score_pair(config, strategy, a, b)),
        None => {
            for strategy in Strategy::ALL {
                println!("{:<20} {}", strategy.name(), paint(score_pair(config, strategy, a, b)));
            }
        }
    }
    Ok(())
}

fn run_rank(
    config: &MatchConfig,
    query: &str,
    candidates: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let extractor = Extractor::from_config(config)?;
    let results: Vec<ExtractedResult<&String>> = match config.limit {
        Some(limit) => extractor.extract_top(query, candidates, config.strategy, limit),
        None => extractor.extract_sorted(query, candidates, config.strategy),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        eprintln!("{}", format!("No candidate reached the cutoff of {}", config.cutoff).yellow());
        return Ok(());
    }
    for result in &results {
        println!("{:>5}  {}", paint(result.score), result.item);
    }
    Ok(())
}

/// Score with the configured processor and weights applied.
fn score_pair(config: &MatchConfig, strategy: Strategy, a: &str, b: &str) -> Score {
    let a = config.processor.apply(a);
    let b = config.processor.apply(b);
    strategy.apply_weighted(&config.weights, &a, &b)
}

fn collect_candidates(mut candidates: Vec<String>, file: Option<&Path>) -> anyhow::Result<Vec<String>> {
    if let Some(path) = file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read candidates from {}", path.display()))?;
        candidates.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );
    }

    if candidates.is_empty() {
        bail!("No candidates given: pass them as arguments or with --file");
    }
    Ok(candidates)
}

fn paint(score: Score) -> String {
    let text = format!("{score:>3}");
    match score {
        90..=100 => text.green().to_string(),
        60..=89 => text.yellow().to_string(),
        _ => text.red().to_string(),
    }
}
